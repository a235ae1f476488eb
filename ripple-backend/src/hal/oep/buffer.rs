use crate::{
    error::FftError,
    hal::layouts::{Complex32, Engine},
};

pub unsafe trait BufferAllocImpl<B: Engine> {
    fn buffer_alloc_impl(len: usize) -> Result<B::Buffer, FftError>;
}

pub unsafe trait BufferWriteImpl<B: Engine> {
    fn buffer_write_impl(buffer: &B::Buffer, data: &[Complex32]) -> Result<(), FftError>;
}

pub unsafe trait BufferReadImpl<B: Engine> {
    fn buffer_read_impl(buffer: &B::Buffer) -> Result<Vec<Complex32>, FftError>;
}
