use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Alloc2;

use super::AllocError;
use super::AllocStrategy;

/// Lets any `allocator-api2` allocator be used as a strategy.
///
/// Memory comes from the wrapped allocator. Elements are built and dropped
/// with the provided `AllocStrategy` methods.
#[derive(Debug, Default, Copy, Clone)]
pub struct Api2<A>(pub A);

unsafe impl<A: Alloc2> AllocStrategy for Api2<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let Ok(mem) = self.0.allocate(layout) else {
            return Err(AllocError);
        };
        return Ok(mem);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.0.deallocate(ptr, layout) };
    }
}
