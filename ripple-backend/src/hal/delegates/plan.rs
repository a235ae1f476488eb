use crate::{
    error::FftError,
    hal::{
        api::{PlanNew, PlanSetLayout, PlanSetPlacement, PlanSetPrecision},
        layouts::{Engine, MemLayout, Placement, Plan, Precision},
        oep::{PlanNewImpl, PlanSetLayoutImpl, PlanSetPlacementImpl, PlanSetPrecisionImpl},
    },
};

impl<B> PlanNew<B> for Plan<B>
where
    B: Engine + PlanNewImpl<B>,
{
    fn new(context: &B::Context, lengths: &[u64]) -> Result<Plan<B>, FftError> {
        B::plan_new_impl(context, lengths)
    }
}

impl<B> PlanSetPrecision<B> for Plan<B>
where
    B: Engine + PlanSetPrecisionImpl<B>,
{
    fn set_precision(&self, precision: Precision) -> Result<(), FftError> {
        B::plan_set_precision_impl(self, precision)
    }
}

impl<B> PlanSetLayout<B> for Plan<B>
where
    B: Engine + PlanSetLayoutImpl<B>,
{
    fn set_layout(&self, input: MemLayout, output: MemLayout) -> Result<(), FftError> {
        B::plan_set_layout_impl(self, input, output)
    }
}

impl<B> PlanSetPlacement<B> for Plan<B>
where
    B: Engine + PlanSetPlacementImpl<B>,
{
    fn set_placement(&self, placement: Placement) -> Result<(), FftError> {
        B::plan_set_placement_impl(self, placement)
    }
}
