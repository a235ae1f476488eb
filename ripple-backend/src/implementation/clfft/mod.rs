//! Vendor engine: AMD's clFFT library driving OpenCL devices.
//!
//! Everything here is a direct translation of handle plumbing; the engine
//! owns all transform logic. Queues, contexts and buffers are the caller's
//! OpenCL handles and are never owned by this module.

pub mod ffi;

use std::{os::raw::c_void, ptr::NonNull};

use crate::{
    error::FftError,
    hal::{
        layouts::{Direction, Engine, EngineCell, MemLayout, Placement, Plan, Precision},
        oep::{
            PlanNewImpl, PlanSetLayoutImpl, PlanSetPlacementImpl, PlanSetPrecisionImpl,
            TransformEnqueueImpl,
        },
    },
};

use ffi::{
    CL_QUEUE_CONTEXT, CLFFT_1D, CLFFT_2D, CLFFT_3D, CLFFT_BACKWARD, CLFFT_COMPLEX_INTERLEAVED,
    CLFFT_FORWARD, CLFFT_INPLACE, CLFFT_OUTOFPLACE, CLFFT_SINGLE, CLFFT_SUCCESS, cl_command_queue,
    cl_context, cl_mem, clfftPlanHandle, clfftSetupData, clfftStatus,
};

static CELL: EngineCell = EngineCell::new();

/// Opaque stand-in so plan handles fit the pointer-shaped HAL slot; the
/// vendor token round-trips through the cast unchanged.
pub struct ClfftPlan {
    _unused: [u8; 0],
}

fn check(status: clfftStatus) -> Result<(), FftError> {
    if status == CLFFT_SUCCESS {
        Ok(())
    } else {
        Err(FftError::engine(ClFft::NAME, status))
    }
}

pub struct ClFft;

impl Engine for ClFft {
    const NAME: &'static str = "AMD FFT";

    type Handle = ClfftPlan;
    type Buffer = cl_mem;
    type Queue = cl_command_queue;
    type Context = cl_context;

    fn cell() -> &'static EngineCell {
        &CELL
    }

    fn setup() -> Result<(), FftError> {
        let mut data = clfftSetupData::default();
        check(unsafe { ffi::clfftInitSetupData(&mut data) })?;
        check(unsafe { ffi::clfftSetup(&data) })
    }

    fn teardown() -> Result<(), FftError> {
        check(unsafe { ffi::clfftTeardown() })
    }

    fn queue_context(queue: &Self::Queue) -> Result<Self::Context, FftError> {
        let mut context: cl_context = std::ptr::null_mut();
        check(unsafe {
            ffi::clGetCommandQueueInfo(
                *queue,
                CL_QUEUE_CONTEXT,
                size_of::<cl_context>(),
                (&mut context as *mut cl_context).cast::<c_void>(),
                std::ptr::null_mut(),
            )
        })?;
        Ok(context)
    }

    unsafe fn destroy_plan(handle: NonNull<Self::Handle>) -> Result<(), FftError> {
        let mut raw: clfftPlanHandle = handle.as_ptr() as clfftPlanHandle;
        check(unsafe { ffi::clfftDestroyPlan(&mut raw) })
    }
}

unsafe impl PlanNewImpl<ClFft> for ClFft {
    fn plan_new_impl(context: &cl_context, lengths: &[u64]) -> Result<Plan<ClFft>, FftError> {
        let dim = match lengths.len() {
            1 => CLFFT_1D,
            2 => CLFFT_2D,
            3 => CLFFT_3D,
            _ => return Err(FftError::Unsupported("plans are 1- to 3-dimensional")),
        };

        let mut cl_lengths = [0usize; 3];
        cl_lengths
            .iter_mut()
            .zip(lengths)
            .for_each(|(dst, &src)| *dst = src as usize);

        let mut raw: clfftPlanHandle = 0;
        check(unsafe { ffi::clfftCreateDefaultPlan(&mut raw, *context, dim, cl_lengths.as_ptr()) })?;
        Ok(unsafe { Plan::from_raw_parts(raw as *mut ClfftPlan, lengths) })
    }
}

unsafe impl PlanSetPrecisionImpl<ClFft> for ClFft {
    fn plan_set_precision_impl(plan: &Plan<ClFft>, precision: Precision) -> Result<(), FftError> {
        let value = match precision {
            Precision::Single => CLFFT_SINGLE,
        };
        let handle: clfftPlanHandle = unsafe { plan.ptr() } as clfftPlanHandle;
        check(unsafe { ffi::clfftSetPlanPrecision(handle, value) })
    }
}

unsafe impl PlanSetLayoutImpl<ClFft> for ClFft {
    fn plan_set_layout_impl(
        plan: &Plan<ClFft>,
        input: MemLayout,
        output: MemLayout,
    ) -> Result<(), FftError> {
        let input = match input {
            MemLayout::Interleaved => CLFFT_COMPLEX_INTERLEAVED,
        };
        let output = match output {
            MemLayout::Interleaved => CLFFT_COMPLEX_INTERLEAVED,
        };
        let handle: clfftPlanHandle = unsafe { plan.ptr() } as clfftPlanHandle;
        check(unsafe { ffi::clfftSetLayout(handle, input, output) })
    }
}

unsafe impl PlanSetPlacementImpl<ClFft> for ClFft {
    fn plan_set_placement_impl(plan: &Plan<ClFft>, placement: Placement) -> Result<(), FftError> {
        let value = match placement {
            Placement::InPlace => CLFFT_INPLACE,
            Placement::OutOfPlace => CLFFT_OUTOFPLACE,
        };
        let handle: clfftPlanHandle = unsafe { plan.ptr() } as clfftPlanHandle;
        check(unsafe { ffi::clfftSetResultLocation(handle, value) })
    }
}

unsafe impl TransformEnqueueImpl<ClFft> for ClFft {
    fn transform_enqueue_impl(
        plan: &Plan<ClFft>,
        direction: Direction,
        queues: &[cl_command_queue],
        input: &cl_mem,
        output: &cl_mem,
    ) -> Result<(), FftError> {
        let dir = match direction {
            Direction::Forward => CLFFT_FORWARD,
            Direction::Inverse => CLFFT_BACKWARD,
        };

        let mut queues: Vec<cl_command_queue> = queues.to_vec();
        let mut input: cl_mem = *input;
        let mut output: cl_mem = *output;

        let handle: clfftPlanHandle = unsafe { plan.ptr() } as clfftPlanHandle;
        check(unsafe {
            ffi::clfftEnqueueTransform(
                handle,
                dir,
                queues.len() as u32,
                queues.as_mut_ptr(),
                0,
                std::ptr::null(),
                std::ptr::null_mut(),
                &mut input,
                &mut output,
                std::ptr::null_mut(),
            )
        })
    }
}
