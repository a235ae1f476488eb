use std::{
    collections::HashMap,
    sync::{
        PoisonError, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use once_cell::sync::Lazy;

use crate::hal::layouts::Complex32;

// Host-memory store standing in for device memory. Handles carry only the
// id; all storage lives here, keyed by it.
static BUFFERS: Lazy<RwLock<HashMap<u64, Vec<Complex32>>>> = Lazy::new(|| RwLock::new(HashMap::new()));
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn alloc(len: usize) -> u64 {
    let id: u64 = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    BUFFERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id, vec![Complex32::ZERO; len]);
    id
}

pub(crate) fn len(id: u64) -> Option<usize> {
    BUFFERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .map(Vec::len)
}

pub(crate) fn read(id: u64) -> Option<Vec<Complex32>> {
    BUFFERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .cloned()
}

/// Replaces the full contents of a buffer. The caller checks the length
/// against [`len`] first; a missing buffer returns false.
pub(crate) fn replace(id: u64, data: Vec<Complex32>) -> bool {
    let mut buffers = BUFFERS.write().unwrap_or_else(PoisonError::into_inner);
    match buffers.get_mut(&id) {
        Some(slot) => {
            *slot = data;
            true
        }
        None => false,
    }
}

pub(crate) fn free(id: u64) {
    BUFFERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&id);
}

/// Number of live buffers, observable by tests.
pub(crate) fn live() -> usize {
    BUFFERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}
