use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc;

use crate::types::AllocError;
use crate::types::AllocStrategy;

/// The default strategy. A wrapper around the std global allocator, with
/// elements built and dropped in place by the provided `AllocStrategy`
/// methods.
///
/// See:
/// <https://doc.rust-lang.org/std/alloc/struct.Global.html>
#[derive(Debug, Default, Copy, Clone)]
pub struct Global;

unsafe impl AllocStrategy for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // std::alloc::alloc() requires that the layout size be non-zero.
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}
