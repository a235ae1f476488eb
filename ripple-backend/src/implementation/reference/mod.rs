//! In-process reference engine.
//!
//! Implements the full engine surface against host memory: a buffer
//! registry stands in for device memory, plans record every configuration
//! call, and enqueued transforms run synchronously through a mixed-radix
//! kernel. Tests observe the recorded plan state through [`plan_state`].

mod dft;
mod registry;

#[cfg(test)]
mod test;

use std::{
    ptr::NonNull,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use crate::{
    error::FftError,
    hal::{
        layouts::{Complex32, Direction, Engine, EngineCell, MemLayout, Placement, Plan, Precision},
        oep::{
            BufferAllocImpl, BufferReadImpl, BufferWriteImpl, PlanNewImpl, PlanSetLayoutImpl,
            PlanSetPlacementImpl, PlanSetPrecisionImpl, TransformEnqueueImpl,
        },
    },
};

/// Engine status codes, in the style of a vendor status table.
pub mod status {
    use crate::error::Status;

    pub const NOT_INITIALIZED: Status = -1;
    pub const ALREADY_INITIALIZED: Status = -2;
    pub const INVALID_SIZE: Status = -3;
    pub const INVALID_BUFFER: Status = -4;
    pub const SIZE_MISMATCH: Status = -5;
    pub const INVALID_DIMENSION: Status = -6;
    pub const INVALID_QUEUE: Status = -7;
}

static CELL: EngineCell = EngineCell::new();
static READY: AtomicBool = AtomicBool::new(false);
static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(1);

fn err(status: i32) -> FftError {
    FftError::engine(RefFft::NAME, status)
}

/// Execution context of the reference device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefContext {
    id: u64,
}

impl RefContext {
    pub fn new() -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Default for RefContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Command queue of the reference device. Work enqueued on it completes
/// before the enqueue call returns, a degenerate form of in-order
/// asynchronous execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefQueue {
    context: RefContext,
    id: u64,
}

impl RefQueue {
    pub fn new(context: RefContext) -> Self {
        Self {
            context,
            id: NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// Identity-comparable handle to a registry-backed buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefBuffer {
    id: u64,
}

/// Everything a plan has been told since creation, for test observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanState {
    pub lengths: Vec<u64>,
    pub precision: Option<Precision>,
    pub layout: Option<(MemLayout, MemLayout)>,
    pub placement: Option<Placement>,
    pub last_direction: Option<Direction>,
    pub enqueues: usize,
}

pub struct RefPlanHandle {
    state: Mutex<PlanState>,
}

impl RefPlanHandle {
    fn lock(&self) -> std::sync::MutexGuard<'_, PlanState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Snapshot of the recorded state of a reference plan.
pub fn plan_state(plan: &Plan<RefFft>) -> PlanState {
    let handle: &RefPlanHandle = unsafe { &*plan.ptr() };
    handle.lock().clone()
}

pub struct RefFft;

impl Engine for RefFft {
    const NAME: &'static str = "reference FFT";

    type Handle = RefPlanHandle;
    type Buffer = RefBuffer;
    type Queue = RefQueue;
    type Context = RefContext;

    fn cell() -> &'static EngineCell {
        &CELL
    }

    fn setup() -> Result<(), FftError> {
        if READY.swap(true, Ordering::AcqRel) {
            return Err(err(status::ALREADY_INITIALIZED));
        }
        Ok(())
    }

    fn teardown() -> Result<(), FftError> {
        if !READY.swap(false, Ordering::AcqRel) {
            return Err(err(status::NOT_INITIALIZED));
        }
        Ok(())
    }

    fn queue_context(queue: &Self::Queue) -> Result<Self::Context, FftError> {
        Ok(queue.context)
    }

    unsafe fn destroy_plan(handle: NonNull<Self::Handle>) -> Result<(), FftError> {
        drop(unsafe { Box::from_raw(handle.as_ptr()) });
        Ok(())
    }

    fn release_buffer(buffer: &Self::Buffer) {
        registry::free(buffer.id);
    }
}

unsafe impl PlanNewImpl<RefFft> for RefFft {
    fn plan_new_impl(_context: &RefContext, lengths: &[u64]) -> Result<Plan<RefFft>, FftError> {
        if !READY.load(Ordering::Acquire) {
            return Err(err(status::NOT_INITIALIZED));
        }
        if lengths.is_empty() || lengths.len() > 3 {
            return Err(err(status::INVALID_DIMENSION));
        }
        if !lengths.iter().all(|&len| dft::smooth_235(len)) {
            return Err(err(status::INVALID_SIZE));
        }

        let handle = Box::new(RefPlanHandle {
            state: Mutex::new(PlanState {
                lengths: lengths.to_vec(),
                precision: None,
                layout: None,
                placement: None,
                last_direction: None,
                enqueues: 0,
            }),
        });
        Ok(unsafe { Plan::from_raw_parts(Box::into_raw(handle), lengths) })
    }
}

unsafe impl PlanSetPrecisionImpl<RefFft> for RefFft {
    fn plan_set_precision_impl(plan: &Plan<RefFft>, precision: Precision) -> Result<(), FftError> {
        let handle: &RefPlanHandle = unsafe { &*plan.ptr() };
        handle.lock().precision = Some(precision);
        Ok(())
    }
}

unsafe impl PlanSetLayoutImpl<RefFft> for RefFft {
    fn plan_set_layout_impl(
        plan: &Plan<RefFft>,
        input: MemLayout,
        output: MemLayout,
    ) -> Result<(), FftError> {
        let handle: &RefPlanHandle = unsafe { &*plan.ptr() };
        handle.lock().layout = Some((input, output));
        Ok(())
    }
}

unsafe impl PlanSetPlacementImpl<RefFft> for RefFft {
    fn plan_set_placement_impl(plan: &Plan<RefFft>, placement: Placement) -> Result<(), FftError> {
        let handle: &RefPlanHandle = unsafe { &*plan.ptr() };
        handle.lock().placement = Some(placement);
        Ok(())
    }
}

unsafe impl TransformEnqueueImpl<RefFft> for RefFft {
    fn transform_enqueue_impl(
        plan: &Plan<RefFft>,
        direction: Direction,
        queues: &[RefQueue],
        input: &RefBuffer,
        output: &RefBuffer,
    ) -> Result<(), FftError> {
        if !READY.load(Ordering::Acquire) {
            return Err(err(status::NOT_INITIALIZED));
        }
        if queues.is_empty() {
            return Err(err(status::INVALID_QUEUE));
        }

        let samples: usize = plan.samples() as usize;
        let mut data: Vec<Complex32> = registry::read(input.id).ok_or_else(|| err(status::INVALID_BUFFER))?;
        if data.len() != samples {
            return Err(err(status::SIZE_MISMATCH));
        }
        if registry::len(output.id).ok_or_else(|| err(status::INVALID_BUFFER))? != samples {
            return Err(err(status::SIZE_MISMATCH));
        }

        dft::transform(&mut data, plan.lengths(), direction);
        registry::replace(output.id, data);

        let handle: &RefPlanHandle = unsafe { &*plan.ptr() };
        let mut state = handle.lock();
        state.last_direction = Some(direction);
        state.enqueues += 1;
        Ok(())
    }
}

unsafe impl BufferAllocImpl<RefFft> for RefFft {
    fn buffer_alloc_impl(len: usize) -> Result<RefBuffer, FftError> {
        Ok(RefBuffer {
            id: registry::alloc(len),
        })
    }
}

unsafe impl BufferWriteImpl<RefFft> for RefFft {
    fn buffer_write_impl(buffer: &RefBuffer, data: &[Complex32]) -> Result<(), FftError> {
        match registry::len(buffer.id) {
            None => Err(err(status::INVALID_BUFFER)),
            Some(len) if len != data.len() => Err(err(status::SIZE_MISMATCH)),
            Some(_) => {
                registry::replace(buffer.id, data.to_vec());
                Ok(())
            }
        }
    }
}

unsafe impl BufferReadImpl<RefFft> for RefFft {
    fn buffer_read_impl(buffer: &RefBuffer) -> Result<Vec<Complex32>, FftError> {
        registry::read(buffer.id).ok_or_else(|| err(status::INVALID_BUFFER))
    }
}

/// Number of live registry buffers, observable by tests.
pub fn live_buffers() -> usize {
    registry::live()
}
