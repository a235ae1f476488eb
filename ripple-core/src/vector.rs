use ripple_backend::{
    error::FftError,
    hal::{
        api::{BufferAlloc, BufferRead, BufferWrite},
        layouts::{Complex32, Engine},
    },
};

/// Dense device vector of interleaved single-precision complex samples.
///
/// Carries one engine buffer handle and the queue set work on it is
/// enqueued against. Buffers allocated here are released when the vector
/// drops; buffers adopted through [`Vector::from_raw_parts`] stay
/// caller-owned.
pub struct Vector<B: Engine> {
    buffer: B::Buffer,
    len: usize,
    queues: Vec<B::Queue>,
    owned: bool,
}

impl<B: Engine> Vector<B> {
    /// Wraps a caller-owned device buffer of `len` complex samples.
    /// SAFETY: `buffer` must stay valid for the vector's lifetime and
    /// actually hold `len` interleaved complex samples.
    #[allow(clippy::missing_safety_doc)]
    pub unsafe fn from_raw_parts(queues: &[B::Queue], buffer: B::Buffer, len: usize) -> Self {
        Self {
            buffer,
            len,
            queues: queues.to_vec(),
            owned: false,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &B::Buffer {
        &self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn queues(&self) -> &[B::Queue] {
        &self.queues
    }
}

impl<B> Vector<B>
where
    B: Engine + BufferAlloc<B>,
{
    /// Zero-filled device vector of `len` complex samples.
    pub fn zeroed(queues: &[B::Queue], len: usize) -> Result<Self, FftError> {
        Ok(Self {
            buffer: B::buffer_alloc(len)?,
            len,
            queues: queues.to_vec(),
            owned: true,
        })
    }
}

impl<B> Vector<B>
where
    B: Engine + BufferAlloc<B> + BufferWrite<B>,
{
    /// Device vector loaded from host samples.
    pub fn from_host(queues: &[B::Queue], data: &[Complex32]) -> Result<Self, FftError> {
        let vector = Self::zeroed(queues, data.len())?;
        B::buffer_write(&vector.buffer, data)?;
        Ok(vector)
    }
}

impl<B> Vector<B>
where
    B: Engine + BufferWrite<B>,
{
    pub fn write(&mut self, data: &[Complex32]) -> Result<(), FftError> {
        B::buffer_write(&self.buffer, data)
    }
}

impl<B> Vector<B>
where
    B: Engine + BufferRead<B>,
{
    pub fn read(&self) -> Result<Vec<Complex32>, FftError> {
        B::buffer_read(&self.buffer)
    }
}

impl<B: Engine> Drop for Vector<B> {
    fn drop(&mut self) {
        if self.owned {
            B::release_buffer(&self.buffer);
        }
    }
}
