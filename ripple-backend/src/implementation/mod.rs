#[cfg(feature = "clfft")]
pub mod clfft;
pub mod reference;
