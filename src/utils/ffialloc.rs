use std::ffi::c_void;
use std::ptr::NonNull;

/// A `malloc`ed buffer handed to Windows APIs that fill caller-provided
/// memory with linked structures. Freed on drop.
pub(crate) struct FFIAlloc<T> {
    ptr: NonNull<T>,
}

impl<T> FFIAlloc<T> {
    /// `None` when the allocation fails.
    pub fn alloc(buffer_size: usize) -> Option<Self> {
        let ptr = unsafe { libc::malloc(buffer_size) as *mut T };
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub const fn as_mut_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for FFIAlloc<T> {
    fn drop(&mut self) {
        unsafe { libc::free(self.ptr.as_ptr() as *mut c_void) }
    }
}
