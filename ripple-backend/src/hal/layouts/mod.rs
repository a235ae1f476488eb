mod cplx;
mod engine;
mod params;
mod plan;

pub use cplx::*;
pub use engine::*;
pub use params::*;
pub use plan::*;
