use core::mem;
use core::mem::ManuallyDrop;
use core::ptr::NonNull;

use crate::types::AllocStrategy;
use crate::types::ErrorReason;
use crate::types::VecErr;
use crate::types::VecResult;

/// The region a `Vector` owns together with the strategy it came from.
///
/// This knows nothing about which slots are live. Dropping it gives the region
/// back, so the owner has to destroy its elements first.
pub(crate) struct Inner<T, S: AllocStrategy> {
    ptr:      NonNull<T>,
    capacity: usize,
    strategy: S,
}

impl<T, S: AllocStrategy> Inner<T, S> {
    pub(crate) const fn new_in(strategy: S) -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            capacity: 0,
            strategy: strategy,
        };
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr(&self) -> *mut T {
        return self.ptr.as_ptr();
    }

    #[inline]
    pub(crate) const fn strategy(&self) -> &S {
        return &self.strategy;
    }

    /// `index` must be within `[0, capacity]`.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index <= self.capacity);
        return unsafe { self.ptr.add(index) };
    }

    /// Moves the first `live` elements into a fresh region of `capacity` slots.
    ///
    /// If the new region can't be acquired nothing changes. Moves can't fail
    /// so once it is acquired the rest always goes through.
    pub(crate) fn relocate(&mut self, live: usize, capacity: usize) -> VecResult<()> {
        debug_assert!(live <= self.capacity);
        debug_assert!(live <= capacity);

        let fresh = self.strategy.acquire::<T>(capacity)?;
        // The old slots are moved out after this and must not be destroyed.
        unsafe { fresh.copy_from_nonoverlapping(self.ptr, live) };
        self.adopt(fresh, capacity);
        return Ok(());
    }

    /// Takes over `ptr` and gives back the region held before.
    ///
    /// Every element in the old region must already be destroyed or moved out.
    pub(crate) fn adopt(&mut self, ptr: NonNull<T>, capacity: usize) {
        let old = mem::replace(&mut self.ptr, ptr);
        let old_cap = mem::replace(&mut self.capacity, capacity);
        if old_cap > 0 {
            unsafe { self.strategy.release(old, old_cap) };
        }
    }

    pub(crate) fn release(&mut self) {
        self.adopt(NonNull::dangling(), 0);
    }
}

impl<T, S: AllocStrategy> Drop for Inner<T, S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// A region that is still being filled.
///
/// If this is dropped before `finish`, by an early return or a panic out of an
/// element constructor, the elements built so far are destroyed in order and
/// the region is released. The region sits in its own `Inner` so it is still
/// released when one of those destructors panics.
pub(crate) struct Staged<'a, T, S: AllocStrategy> {
    region: Inner<T, &'a S>,
    built:  usize,
}

impl<'a, T, S: AllocStrategy> Staged<'a, T, S> {
    /// Acquires exactly `count` slots and fills slot `i` with `init(i)`.
    pub(crate) fn build<E, F>(strategy: &'a S, count: usize, mut init: F) -> VecResult<Self>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut staged = Self {
            region: Inner::new_in(strategy),
            built:  0,
        };
        if count > 0 {
            let ptr = strategy.acquire::<T>(count)?;
            staged.region.adopt(ptr, count);
        }

        while staged.built < count {
            let index = staged.built;
            let slot = unsafe { staged.region.slot(index) };
            let ret = unsafe { strategy.construct_at(slot, || init(index)) };
            if ret.is_err() {
                return Err(VecErr::new(ErrorReason::ConstructionFailed));
            }
            staged.built += 1;
        }
        return Ok(staged);
    }

    /// Hands over the filled region. It is no longer cleaned up here.
    pub(crate) fn finish(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        return (this.region.ptr, this.region.capacity);
    }
}

impl<T, S: AllocStrategy> Drop for Staged<'_, T, S> {
    fn drop(&mut self) {
        // `region` releases itself once this returns, or unwinds.
        for i in 0..self.built {
            unsafe { self.region.strategy().destroy_at(self.region.slot(i)) };
        }
    }
}
