use core::fmt;

use crate::pointer::Pointer;

/// A non-owning observer of a single `T`.
///
/// `ViewPtr` is the "I can see it, I don't manage it" handle: it is
/// constructible from any value whose type is pointer-like for `T` (see
/// [`Pointer`]) and records the address that value points at. It never
/// drops, frees, or counts the pointee, and holding one does not keep the
/// pointee alive.
///
/// ```
/// use view_ptr::view::ViewPtr;
///
/// let owner = Box::new(10);
/// let view = ViewPtr::new(&owner);
///
/// assert_eq!(view.as_ptr(), &*owner as *const i32);
/// ```
pub struct ViewPtr<T: ?Sized> {
    ptr: *const T,
}

impl<T: ?Sized> ViewPtr<T> {
    /// Observe the pointee of `ptr`.
    ///
    /// The candidate is borrowed, never consumed; its ownership of the
    /// pointee is untouched. The address is captured here and not
    /// re-queried later.
    ///
    /// This only compiles when `U` is pointer-like for exactly `T`; any
    /// other candidate is rejected with an unsatisfied-bound error:
    ///
    /// ```compile_fail
    /// use view_ptr::view::ViewPtr;
    ///
    /// struct Opaque;
    ///
    /// let opaque = Opaque;
    /// let view: ViewPtr<i32> = ViewPtr::new(&opaque);
    /// ```
    pub fn new<U>(ptr: &U) -> Self
    where
        U: Pointer<T>,
    {
        Self { ptr: ptr.as_raw() }
    }

    /// The observed address.
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Return a reference to the observed value.
    ///
    /// # Safety
    ///
    /// The pointee must still be live for `'a`, and the observed address
    /// must be [convertible to a reference](core::ptr#pointer-to-reference-conversion).
    pub unsafe fn as_ref<'a>(&self) -> &'a T {
        // SAFETY: the caller guarantees the pointee outlives 'a
        unsafe { &*self.ptr }
    }
}

impl<T: ?Sized> Clone for ViewPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ViewPtr<T> {}

impl<T: ?Sized> fmt::Pointer for ViewPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}

impl<T: ?Sized> fmt::Debug for ViewPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}
