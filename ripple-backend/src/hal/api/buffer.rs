use crate::{
    error::FftError,
    hal::layouts::{Complex32, Engine},
};

/// Device-buffer allocation, for engines that own their buffer store.
/// The vendor engine does not implement this: its buffers are created and
/// owned by the caller's device runtime.
pub trait BufferAlloc<B: Engine> {
    fn buffer_alloc(len: usize) -> Result<B::Buffer, FftError>;
}

pub trait BufferWrite<B: Engine> {
    fn buffer_write(buffer: &B::Buffer, data: &[Complex32]) -> Result<(), FftError>;
}

pub trait BufferRead<B: Engine> {
    fn buffer_read(buffer: &B::Buffer) -> Result<Vec<Complex32>, FftError>;
}
