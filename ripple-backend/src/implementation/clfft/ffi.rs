#![allow(non_camel_case_types, non_snake_case, dead_code)]

//! Declarations for the clFFT C ABI and the few OpenCL entry points the
//! binding touches. Kept by hand; regenerate against clFFT headers when
//! the vendor ABI moves.

use std::os::raw::c_void;

pub type cl_int = i32;
pub type cl_uint = u32;
pub type cl_ulong = u64;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cl_context {
    _unused: [u8; 0],
}
pub type cl_context = *mut _cl_context;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cl_command_queue {
    _unused: [u8; 0],
}
pub type cl_command_queue = *mut _cl_command_queue;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cl_mem {
    _unused: [u8; 0],
}
pub type cl_mem = *mut _cl_mem;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cl_event {
    _unused: [u8; 0],
}
pub type cl_event = *mut _cl_event;

pub const CL_QUEUE_CONTEXT: cl_uint = 0x1090;

/// Plan handles are integral tokens, not pointers, on the vendor side.
pub type clfftPlanHandle = usize;

pub type clfftStatus = cl_int;
pub const CLFFT_SUCCESS: clfftStatus = 0;

pub type clfftDim = cl_int;
pub const CLFFT_1D: clfftDim = 1;
pub const CLFFT_2D: clfftDim = 2;
pub const CLFFT_3D: clfftDim = 3;

pub type clfftPrecision = cl_int;
pub const CLFFT_SINGLE: clfftPrecision = 1;

pub type clfftLayout = cl_int;
pub const CLFFT_COMPLEX_INTERLEAVED: clfftLayout = 1;

pub type clfftResultLocation = cl_int;
pub const CLFFT_INPLACE: clfftResultLocation = 1;
pub const CLFFT_OUTOFPLACE: clfftResultLocation = 2;

pub type clfftDirection = cl_int;
pub const CLFFT_FORWARD: clfftDirection = -1;
pub const CLFFT_BACKWARD: clfftDirection = 1;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct clfftSetupData {
    pub major: cl_uint,
    pub minor: cl_uint,
    pub patch: cl_uint,
    pub debugFlags: cl_ulong,
}

unsafe extern "C" {
    pub unsafe fn clfftInitSetupData(setupData: *mut clfftSetupData) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftSetup(setupData: *const clfftSetupData) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftTeardown() -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftCreateDefaultPlan(
        plHandle: *mut clfftPlanHandle,
        context: cl_context,
        dim: clfftDim,
        clLengths: *const usize,
    ) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftSetPlanPrecision(plHandle: clfftPlanHandle, precision: clfftPrecision) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftSetLayout(plHandle: clfftPlanHandle, iLayout: clfftLayout, oLayout: clfftLayout) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftSetResultLocation(plHandle: clfftPlanHandle, placeness: clfftResultLocation) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftEnqueueTransform(
        plHandle: clfftPlanHandle,
        dir: clfftDirection,
        numQueuesAndEvents: cl_uint,
        commQueues: *mut cl_command_queue,
        numWaitEvents: cl_uint,
        waitEvents: *const cl_event,
        outEvents: *mut cl_event,
        inputBuffers: *mut cl_mem,
        outputBuffers: *mut cl_mem,
        tmpBuffer: cl_mem,
    ) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clfftDestroyPlan(plHandle: *mut clfftPlanHandle) -> clfftStatus;
}
unsafe extern "C" {
    pub unsafe fn clGetCommandQueueInfo(
        command_queue: cl_command_queue,
        param_name: cl_uint,
        param_value_size: usize,
        param_value: *mut c_void,
        param_value_size_ret: *mut usize,
    ) -> cl_int;
}
