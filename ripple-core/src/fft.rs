use ripple_backend::{
    error::FftError,
    hal::{
        api::{PlanNew, PlanSetLayout, PlanSetPlacement, PlanSetPrecision, TransformEnqueue},
        layouts::{Direction, Engine, EngineGuard, MemLayout, Placement, Plan, Precision},
    },
};

use crate::{expr::FftExpr, vector::Vector};

/// Accumulation behavior of one execute call: overwrite the output, or add
/// into it. Accumulation is not implemented by the bound engines and is
/// rejected at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulation {
    Overwrite,
    Accumulate,
}

/// Sign convention of one execute call. The negated convention is not
/// implemented and is rejected at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negated,
}

/// Transform adapter over a device queue set.
///
/// Owns exactly one engine plan configured for single-precision
/// interleaved complex-to-complex work, plus one counted reference to the
/// process-wide engine. Assumes dense row-major data; supports a single
/// device and 1–3 dimensions of power-of-{2,3,5} lengths.
///
/// ```ignore
/// let fft = Fft::<RefFft>::new(&queues, &[width, height], Direction::Forward)?;
/// output.assign(fft.apply(&input))?;     // out-of-place transform
/// fft.transform_in_place(&mut data)?;    // in-place transform
/// ```
pub struct Fft<B: Engine> {
    // Field order is load-bearing: the plan must be destroyed while the
    // engine reference is still held.
    plan: Plan<B>,
    queues: Vec<B::Queue>,
    direction: Direction,
    _engine: EngineGuard<B>,
}

impl<B> Fft<B>
where
    B: Engine,
    Plan<B>: PlanNew<B> + PlanSetPrecision<B> + PlanSetLayout<B> + PlanSetPlacement<B> + TransformEnqueue<B>,
{
    /// Builds an adapter for a dense block of the given per-dimension
    /// lengths, transforming in `direction` on `queues`.
    ///
    /// The first queue's context hosts the plan; all queues are assumed to
    /// share it. The first live adapter process-wide initializes the
    /// engine, and engine setup is undone if any later construction step
    /// fails.
    pub fn new(queues: &[B::Queue], lengths: &[u64], direction: Direction) -> Result<Self, FftError> {
        if queues.is_empty() {
            return Err(FftError::Unsupported("at least one device queue is required"));
        }
        if lengths.is_empty() || lengths.len() > 3 {
            return Err(FftError::Unsupported("transforms are 1- to 3-dimensional"));
        }

        let engine: EngineGuard<B> = EngineGuard::acquire()?;
        let context: B::Context = B::queue_context(&queues[0])?;
        let plan: Plan<B> = Plan::new(&context, lengths)?;
        plan.set_precision(Precision::Single)?;
        plan.set_layout(MemLayout::Interleaved, MemLayout::Interleaved)?;

        log::debug!("{} plan ready: lengths {lengths:?}, {direction:?}", B::NAME);

        Ok(Self {
            plan,
            queues: queues.to_vec(),
            direction,
            _engine: engine,
        })
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn lengths(&self) -> &[u64] {
        self.plan.lengths()
    }

    #[inline]
    pub fn plan(&self) -> &Plan<B> {
        &self.plan
    }

    /// Applies the adapter to an input vector, producing the deferred
    /// expression consumed by vector assignment. No engine work happens
    /// here.
    pub fn apply<'a>(&'a self, input: &'a Vector<B>) -> FftExpr<'a, B> {
        FftExpr { fft: self, input }
    }

    /// Overwrites `output` with the transform of `input`.
    pub fn transform_into(&self, output: &mut Vector<B>, input: &Vector<B>) -> Result<(), FftError> {
        self.execute(input, output, Sign::Positive, Accumulation::Overwrite)
    }

    /// Transforms `data` in place.
    pub fn transform_in_place(&self, data: &mut Vector<B>) -> Result<(), FftError> {
        self.dispatch(data.buffer(), data.buffer())
    }

    /// Runs one transform with explicit sign and accumulation selection.
    /// The unimplemented selections are rejected before any engine call.
    pub fn execute(
        &self,
        input: &Vector<B>,
        output: &mut Vector<B>,
        sign: Sign,
        accumulation: Accumulation,
    ) -> Result<(), FftError> {
        if sign == Sign::Negated {
            return Err(FftError::Unsupported("sign-flipped transforms are not implemented"));
        }
        if accumulation == Accumulation::Accumulate {
            return Err(FftError::Unsupported("accumulating into the output is not implemented"));
        }
        self.dispatch(input.buffer(), output.buffer())
    }

    fn dispatch(&self, input: &B::Buffer, output: &B::Buffer) -> Result<(), FftError> {
        // Split-buffer execution over several queues is not supported.
        if self.queues.len() != 1 {
            return Err(FftError::Unsupported("execution uses exactly one device queue"));
        }

        let placement: Placement = if input == output {
            Placement::InPlace
        } else {
            Placement::OutOfPlace
        };
        self.plan.set_placement(placement)?;
        self.plan
            .enqueue_transform(self.direction, &self.queues, input, output)
    }
}
