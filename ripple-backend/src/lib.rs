pub mod error;
pub mod hal;
pub mod implementation;

#[cfg(feature = "clfft")]
pub use implementation::clfft::ClFft;
pub use implementation::reference::RefFft;

pub use error::FftError;
