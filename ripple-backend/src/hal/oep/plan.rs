use crate::{
    error::FftError,
    hal::layouts::{Engine, MemLayout, Placement, Plan, Precision},
};

pub unsafe trait PlanNewImpl<B: Engine> {
    fn plan_new_impl(context: &B::Context, lengths: &[u64]) -> Result<Plan<B>, FftError>;
}

pub unsafe trait PlanSetPrecisionImpl<B: Engine> {
    fn plan_set_precision_impl(plan: &Plan<B>, precision: Precision) -> Result<(), FftError>;
}

pub unsafe trait PlanSetLayoutImpl<B: Engine> {
    fn plan_set_layout_impl(plan: &Plan<B>, input: MemLayout, output: MemLayout) -> Result<(), FftError>;
}

pub unsafe trait PlanSetPlacementImpl<B: Engine> {
    fn plan_set_placement_impl(plan: &Plan<B>, placement: Placement) -> Result<(), FftError>;
}
