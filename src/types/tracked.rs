use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use super::AllocError;
use super::AllocStrategy;
use super::ErrorReason;
use super::VecErr;
use super::VecResult;

/// A snapshot of the counters kept by `Tracked`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Regions handed out by `acquire`.
    pub acquired:    usize,
    /// Regions given back with `release`.
    pub released:    usize,
    /// Elements built by `construct_at` that succeeded.
    pub constructed: usize,
    /// Elements dropped by `destroy_at`.
    pub destroyed:   usize,
}

impl Stats {
    /// Regions acquired but not released yet.
    pub const fn regions_held(&self) -> usize {
        return self.acquired - self.released;
    }

    /// Elements constructed but not destroyed yet.
    ///
    /// Elements moved out of an array, by `Vector::pop`, are never destroyed
    /// through the strategy and so keep counting as live.
    pub const fn live(&self) -> usize {
        return self.constructed - self.destroyed;
    }
}

/// An instrumented strategy. It forwards everything to `S` and counts each
/// typed operation.
///
/// It can also be given a limit on how many regions it will hand out, after
/// which `acquire` fails with `OutOfMemory`. This is handy for driving the
/// failure paths of a `Vector`.
///
/// The counters use `Cell`, so a `Tracked` is single threaded. Share one
/// across several arrays through a reference, `&Tracked<S>` is a strategy too.
#[derive(Debug, Default)]
pub struct Tracked<S> {
    inner:     S,
    stats:     Cell<Stats>,
    remaining: Cell<Option<usize>>,
}

impl<S: AllocStrategy> Tracked<S> {
    const ZEROED: Stats = Stats {
        acquired:    0,
        released:    0,
        constructed: 0,
        destroyed:   0,
    };

    pub const fn new(inner: S) -> Self {
        return Self {
            inner:     inner,
            stats:     Cell::new(Self::ZEROED),
            remaining: Cell::new(None),
        };
    }

    /// Only the first `limit` calls to `acquire` will succeed.
    pub const fn with_acquire_limit(inner: S, limit: usize) -> Self {
        return Self {
            inner:     inner,
            stats:     Cell::new(Self::ZEROED),
            remaining: Cell::new(Some(limit)),
        };
    }

    /// Changes how many more regions can be acquired. `None` removes the limit.
    pub fn set_acquire_limit(&self, limit: Option<usize>) {
        self.remaining.set(limit);
    }

    pub fn stats(&self) -> Stats {
        return self.stats.get();
    }

    pub fn inner(&self) -> &S {
        return &self.inner;
    }

    fn update(&self, f: impl FnOnce(&mut Stats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

unsafe impl<S: AllocStrategy> AllocStrategy for Tracked<S> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return self.inner.allocate(layout);
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.inner.deallocate(ptr, layout) };
    }

    fn acquire<T>(&self, count: usize) -> VecResult<NonNull<T>> {
        let remaining = self.remaining.get();
        if remaining == Some(0) {
            return Err(VecErr::new(ErrorReason::OutOfMemory));
        }
        let region = self.inner.acquire::<T>(count)?;
        self.remaining.set(remaining.map(|r| r - 1));
        self.update(|s| s.acquired += 1);
        return Ok(region);
    }

    unsafe fn release<T>(&self, region: NonNull<T>, count: usize) {
        unsafe { self.inner.release(region, count) };
        self.update(|s| s.released += 1);
    }

    unsafe fn construct_at<T, E, F>(&self, slot: NonNull<T>, init: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        unsafe { self.inner.construct_at(slot, init)? };
        self.update(|s| s.constructed += 1);
        return Ok(());
    }

    unsafe fn destroy_at<T>(&self, slot: NonNull<T>) {
        // Count first so a panicking destructor is still accounted for.
        self.update(|s| s.destroyed += 1);
        unsafe { self.inner.destroy_at(slot) };
    }
}
