//! Device-vector side of the transform binding: a dense complex vector
//! over an engine's buffers, the plan-owning [`Fft`] adapter, and the
//! deferred expression tying the two to vector assignment.

pub mod expr;
pub mod fft;
pub mod vector;

pub use expr::FftExpr;
pub use fft::{Accumulation, Fft, Sign};
pub use vector::Vector;

#[cfg(feature = "clfft")]
pub use ripple_backend::ClFft;
pub use ripple_backend::{
    FftError, RefFft,
    hal::layouts::{Complex32, Direction},
    implementation::reference,
};
