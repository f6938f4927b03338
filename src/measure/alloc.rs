//! Per-thread allocation accounting
//!
//! [`TrackingAllocator`] forwards to the system allocator and keeps two
//! counters per thread: live bytes and the high-water mark. A
//! [`PeakProbe`] resets the high-water mark to the current live count, so
//! `peak_bytes` is the largest net growth seen on this thread since the
//! probe started.
//!
//! Accounting is per thread, so allocations made by other threads never
//! show up in a probe. Memory freed here but allocated elsewhere (or the
//! reverse) shifts the live count, so the figure is an upper bound of the
//! calling thread's own usage rather than an exact value.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set once any allocation has gone through [`TrackingAllocator`]
static INSTALLED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static PEAK: Cell<isize> = const { Cell::new(0) };
}

/// System allocator wrapper that counts bytes per thread
///
/// The library never installs it. A binary opts in with:
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: scc_bench::TrackingAllocator = scc_bench::TrackingAllocator;
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

fn record(delta: isize) {
    if !INSTALLED.load(Ordering::Relaxed) {
        INSTALLED.store(true, Ordering::Relaxed);
    }
    // try_with: the thread-locals may already be gone during thread teardown
    let _ = LIVE.try_with(|live| {
        let now = live.get().wrapping_add(delta);
        live.set(now);
        let _ = PEAK.try_with(|peak| {
            if now > peak.get() {
                peak.set(now);
            }
        });
    });
}

// SAFETY: every method forwards to `System` with the caller's arguments
// unchanged; the bookkeeping touches only const-initialised thread-locals
// and never allocates.
#[allow(clippy::cast_possible_wrap)] // Layout sizes never exceed isize::MAX
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

/// Whether [`TrackingAllocator`] is the active global allocator
#[must_use]
pub fn is_tracking() -> bool {
    INSTALLED.load(Ordering::Relaxed)
}

/// High-water-mark probe for the current thread
///
/// Probes nest: when an inner probe is dropped, the outer one still sees
/// the inner peak.
#[derive(Debug)]
pub struct PeakProbe {
    baseline: isize,
    outer_peak: isize,
}

impl PeakProbe {
    /// Start measuring from the current live byte count
    #[must_use]
    pub fn start() -> Self {
        let baseline = LIVE.with(Cell::get);
        let outer_peak = PEAK.with(|peak| peak.replace(baseline));
        Self {
            baseline,
            outer_peak,
        }
    }

    /// Largest net growth of this thread's live bytes since `start`
    #[must_use]
    pub fn peak_bytes(&self) -> usize {
        let peak = PEAK.with(Cell::get);
        usize::try_from(peak.wrapping_sub(self.baseline)).unwrap_or(0)
    }
}

impl Drop for PeakProbe {
    fn drop(&mut self) {
        let outer_peak = self.outer_peak;
        let _ = PEAK.try_with(|peak| {
            if outer_peak > peak.get() {
                peak.set(outer_peak);
            }
        });
    }
}
