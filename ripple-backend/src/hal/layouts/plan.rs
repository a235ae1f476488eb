use std::{marker::PhantomData, ptr::NonNull};

use crate::hal::layouts::Engine;

/// Owned handle to one configured transform in the engine.
///
/// A plan is created for a fixed execution context and 1–3 per-dimension
/// lengths; precision, layout and result location are configured through
/// the operation traits in [`hal::api`](crate::hal::api). The engine-side
/// object is destroyed on drop.
pub struct Plan<B: Engine> {
    ptr: NonNull<B::Handle>,
    lengths: Vec<u64>,
    _marker: PhantomData<B>,
}

unsafe impl<B: Engine> Send for Plan<B> {}
unsafe impl<B: Engine> Sync for Plan<B> {}

impl<B: Engine> Plan<B> {
    /// Construct from a raw handle returned by the engine.
    /// SAFETY: `ptr` must be a live handle owned by no other `Plan`.
    #[allow(clippy::missing_safety_doc)]
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut B::Handle, lengths: &[u64]) -> Self {
        debug_assert!(
            (1..=3).contains(&lengths.len()),
            "plans are 1- to 3-dimensional, got {} lengths",
            lengths.len()
        );
        Self {
            ptr: NonNull::new(ptr).expect("null plan handle"),
            lengths: lengths.to_vec(),
            _marker: PhantomData,
        }
    }

    /// Returns the raw pointer to the engine handle.
    #[allow(clippy::missing_safety_doc)]
    #[inline]
    pub unsafe fn ptr(&self) -> *mut B::Handle {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn lengths(&self) -> &[u64] {
        &self.lengths
    }

    #[inline]
    pub fn dims(&self) -> usize {
        self.lengths.len()
    }

    /// Total number of complex samples one transform touches.
    #[inline]
    pub fn samples(&self) -> u64 {
        self.lengths.iter().product()
    }
}

impl<B: Engine> Drop for Plan<B> {
    fn drop(&mut self) {
        // Drop cannot propagate; a failing destroy is reported, not hidden.
        match unsafe { B::destroy_plan(self.ptr) } {
            Ok(()) => log::trace!("{} plan destroyed", B::NAME),
            Err(err) => log::error!("{} plan destruction failed: {err}", B::NAME),
        }
    }
}
