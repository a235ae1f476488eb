use crate::{
    error::FftError,
    hal::layouts::{Engine, MemLayout, Placement, Plan, Precision},
};

pub trait PlanNew<B: Engine> {
    /// Creates a default plan for the given execution context and 1–3
    /// per-dimension lengths. Length factorization is not checked here;
    /// the engine rejects sizes it does not support.
    fn new(context: &B::Context, lengths: &[u64]) -> Result<Plan<B>, FftError>;
}

pub trait PlanSetPrecision<B: Engine> {
    fn set_precision(&self, precision: Precision) -> Result<(), FftError>;
}

pub trait PlanSetLayout<B: Engine> {
    fn set_layout(&self, input: MemLayout, output: MemLayout) -> Result<(), FftError>;
}

pub trait PlanSetPlacement<B: Engine> {
    fn set_placement(&self, placement: Placement) -> Result<(), FftError>;
}
