//! Live-Heap Accounting
//!
//! A global-allocator interceptor that keeps a running count of live
//! allocated bytes. The engine snapshots the counter before and after a
//! case's timed loop; the difference is the case's memory delta.
//!
//! There is no collector to quiesce in this runtime: allocation and
//! release are deterministic, so a checkpointed counter already reflects a
//! settled heap. The counter is global to the process and starts at zero,
//! which is why deltas (not absolute values) are the unit of reporting.
//!
//! Install in the binary under test:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: pacebench_core::TrackingAllocator = pacebench_core::TrackingAllocator;
//! ```
//!
//! Without the install the counter stays at zero and every delta reads 0 —
//! accounting is best-effort by contract.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicI64, Ordering};

/// Bytes currently live across the whole process.
///
/// Relaxed ordering throughout: the measurement protocol is single-threaded
/// by contract, the atomic exists only because `GlobalAlloc` must be `Sync`.
static LIVE_BYTES: AtomicI64 = AtomicI64::new(0);

/// Allocator wrapper that counts live bytes while delegating to `System`.
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size() as i64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size() as i64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            LIVE_BYTES.fetch_add(new_size as i64 - layout.size() as i64, Ordering::Relaxed);
        }
        new_ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        LIVE_BYTES.fetch_sub(layout.size() as i64, Ordering::Relaxed);
    }
}

/// Current live allocated bytes, as routed through [`TrackingAllocator`].
///
/// A single atomic read; safe to call inside and outside measurement
/// windows. Returns 0 when the tracking allocator is not installed.
#[inline]
pub fn live_bytes() -> i64 {
    LIVE_BYTES.load(Ordering::Relaxed)
}
