use ripple_backend::{
    error::FftError,
    hal::{
        api::{PlanNew, PlanSetLayout, PlanSetPlacement, PlanSetPrecision, TransformEnqueue},
        layouts::{Engine, Plan},
    },
};

use crate::{
    fft::{Accumulation, Fft, Sign},
    vector::Vector,
};

/// Deferred transform of one input vector by one adapter.
///
/// Produced by [`Fft::apply`], consumed by [`Vector::assign`] or
/// [`Vector::assign_add`]; owns neither borrow beyond that evaluation.
pub struct FftExpr<'a, B: Engine> {
    pub(crate) fft: &'a Fft<B>,
    pub(crate) input: &'a Vector<B>,
}

impl<B> Vector<B>
where
    B: Engine,
    Plan<B>: PlanNew<B> + PlanSetPrecision<B> + PlanSetLayout<B> + PlanSetPlacement<B> + TransformEnqueue<B>,
{
    /// `self = expr`: evaluates the deferred transform, overwriting self.
    pub fn assign(&mut self, expr: FftExpr<'_, B>) -> Result<(), FftError> {
        expr.fft
            .execute(expr.input, self, Sign::Positive, Accumulation::Overwrite)
    }

    /// `self += expr`: evaluates the deferred transform, accumulating into
    /// self. Accumulation is unimplemented, so this surfaces the binding's
    /// rejection; it exists so assignment targets select the behavior the
    /// same way overwriting targets do.
    pub fn assign_add(&mut self, expr: FftExpr<'_, B>) -> Result<(), FftError> {
        expr.fft
            .execute(expr.input, self, Sign::Positive, Accumulation::Accumulate)
    }
}
