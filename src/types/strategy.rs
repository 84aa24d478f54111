use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;
use super::ErrorReason;
use super::VecErr;
use super::VecResult;

fn layout_array<T>(count: usize) -> VecResult<Layout> {
    let lay = Layout::new::<T>().pad_to_align();
    let Some(len) = count.checked_mul(lay.size()) else {
        return Err(VecErr::new(ErrorReason::CapacityOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, lay.align()) else {
        return Err(VecErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// The policy a `Vector` uses to get memory and to build and tear down the
/// elements that live in it.
///
/// Only the two byte level primitives, `allocate` and `deallocate`, need to be
/// written. They mirror the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// The typed operations `acquire`, `release`, `construct_at` and `destroy_at`
/// are what the array actually calls. Their provided versions are the default
/// strategy. Override them to instrument or pool, but keep the contract: a
/// strategy never tracks which slots are live, that bookkeeping belongs to
/// the array.
pub unsafe trait AllocStrategy {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// The layout passed in never has a size of zero.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by`ptr`
    ///
    /// This memory must have only been allocated by this allocator.
    /// The layout must match the layout provided when the chunk was
    /// allocated.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Gets an uninitialized region with room for `count` elements of `T`.
    ///
    /// Regions with a zero byte size are never handed to `allocate`, a
    /// dangling aligned pointer is returned for them instead.
    fn acquire<T>(&self, count: usize) -> VecResult<NonNull<T>> {
        let layout = layout_array::<T>(count)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        let Ok(mem) = self.allocate(layout) else {
            return Err(VecErr::new(ErrorReason::OutOfMemory));
        };
        return Ok(mem.cast());
    }

    /// Gives a region from `acquire` back.
    ///
    /// `count` must be the count the region was acquired with. Any live
    /// elements must already have been destroyed by the caller.
    unsafe fn release<T>(&self, region: NonNull<T>, count: usize) {
        // This can't fail for a count that was acquired before.
        let Ok(layout) = layout_array::<T>(count) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }
        unsafe { self.deallocate(region.cast(), layout) };
    }

    /// Builds one element in place at `slot`.
    ///
    /// `init` stands in for the constructor and its arguments. If it errors
    /// nothing is written and `slot` does not hold a live element.
    ///
    /// `slot` must be in bounds of an acquired region and hold no live element.
    unsafe fn construct_at<T, E, F>(&self, slot: NonNull<T>, init: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = init()?;
        unsafe { slot.write(value) };
        return Ok(());
    }

    /// Runs the destructor of the live element at `slot`.
    ///
    /// Calling this on a slot that holds no live element is undefined behavior.
    unsafe fn destroy_at<T>(&self, slot: NonNull<T>) {
        unsafe { slot.drop_in_place() };
    }
}

unsafe impl<S> AllocStrategy for &S
where
    S: AllocStrategy,
{
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return (**self).allocate(layout);
    }
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) };
    }
    fn acquire<T>(&self, count: usize) -> VecResult<NonNull<T>> {
        return (**self).acquire(count);
    }
    unsafe fn release<T>(&self, region: NonNull<T>, count: usize) {
        unsafe { (**self).release(region, count) };
    }
    unsafe fn construct_at<T, E, F>(&self, slot: NonNull<T>, init: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        return unsafe { (**self).construct_at(slot, init) };
    }
    unsafe fn destroy_at<T>(&self, slot: NonNull<T>) {
        unsafe { (**self).destroy_at(slot) };
    }
}
