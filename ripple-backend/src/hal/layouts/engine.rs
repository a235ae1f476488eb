use std::{
    fmt::Debug,
    marker::PhantomData,
    ptr::NonNull,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::error::FftError;

/// A transform engine: the vendor FFI library, or the in-process reference
/// implementation. Handles are opaque to everything above this trait.
pub trait Engine: Sized + Send + Sync + 'static {
    /// Fixed message tag carried by this engine's error statuses.
    const NAME: &'static str;

    /// Opaque plan handle owned through [`Plan`](super::Plan).
    type Handle: 'static;
    /// Device buffer handle. Only identity comparison is required of it.
    type Buffer: Clone + PartialEq + Debug;
    /// Device command-queue handle.
    type Queue: Clone + Debug;
    /// Device execution context a plan is created against.
    type Context: Clone;

    /// Process-wide reference-count cell for this engine.
    fn cell() -> &'static EngineCell;

    /// Global engine initialization. Called once per 0→1 transition of the
    /// cell, under the cell's lock.
    fn setup() -> Result<(), FftError>;

    /// Global engine shutdown. Called once per 1→0 transition of the cell,
    /// under the cell's lock.
    fn teardown() -> Result<(), FftError>;

    /// Execution context the given queue belongs to.
    fn queue_context(queue: &Self::Queue) -> Result<Self::Context, FftError>;

    #[allow(clippy::missing_safety_doc)]
    unsafe fn destroy_plan(handle: NonNull<Self::Handle>) -> Result<(), FftError>;

    /// Drops the engine-side store backing an adapter-owned buffer. Engines
    /// whose buffers are caller-owned keep the default no-op.
    fn release_buffer(_buffer: &Self::Buffer) {}
}

/// Process-wide live-reference counter for one engine.
///
/// Setup runs on the 0→1 transition, teardown on 1→0. Both transitions and
/// the count updates happen under `lock`, so guards may be acquired and
/// released concurrently from any thread.
pub struct EngineCell {
    live: AtomicUsize,
    lock: Mutex<()>,
}

impl EngineCell {
    pub const fn new() -> Self {
        Self {
            live: AtomicUsize::new(0),
            lock: Mutex::new(()),
        }
    }

    /// Number of live references.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }
}

impl Default for EngineCell {
    fn default() -> Self {
        Self::new()
    }
}

/// One counted reference to a process-wide engine, released on drop.
pub struct EngineGuard<B: Engine> {
    _marker: PhantomData<B>,
}

impl<B: Engine> EngineGuard<B> {
    /// Takes a reference on the engine, running global setup if this is the
    /// first live reference. On error no reference is taken.
    pub fn acquire() -> Result<Self, FftError> {
        let cell: &EngineCell = B::cell();
        let _held = cell.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if cell.live.load(Ordering::Relaxed) == 0 {
            B::setup()?;
            log::debug!("{} global setup", B::NAME);
        }
        cell.live.fetch_add(1, Ordering::Release);
        Ok(Self {
            _marker: PhantomData,
        })
    }
}

impl<B: Engine> Drop for EngineGuard<B> {
    fn drop(&mut self) {
        let cell: &EngineCell = B::cell();
        let _held = cell.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if cell.live.fetch_sub(1, Ordering::Release) == 1 {
            match B::teardown() {
                Ok(()) => log::debug!("{} global teardown", B::NAME),
                Err(err) => log::error!("{} global teardown failed: {err}", B::NAME),
            }
        }
    }
}
