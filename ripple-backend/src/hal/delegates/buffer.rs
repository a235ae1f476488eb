use crate::{
    error::FftError,
    hal::{
        api::{BufferAlloc, BufferRead, BufferWrite},
        layouts::{Complex32, Engine},
        oep::{BufferAllocImpl, BufferReadImpl, BufferWriteImpl},
    },
};

impl<B> BufferAlloc<B> for B
where
    B: Engine + BufferAllocImpl<B>,
{
    fn buffer_alloc(len: usize) -> Result<B::Buffer, FftError> {
        B::buffer_alloc_impl(len)
    }
}

impl<B> BufferWrite<B> for B
where
    B: Engine + BufferWriteImpl<B>,
{
    fn buffer_write(buffer: &B::Buffer, data: &[Complex32]) -> Result<(), FftError> {
        B::buffer_write_impl(buffer, data)
    }
}

impl<B> BufferRead<B> for B
where
    B: Engine + BufferReadImpl<B>,
{
    fn buffer_read(buffer: &B::Buffer) -> Result<Vec<Complex32>, FftError> {
        B::buffer_read_impl(buffer)
    }
}
