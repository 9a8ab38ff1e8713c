use core::ops::Deref;
use core::pin::Pin;
use core::ptr::NonNull;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

/// Trait that indicates that this is a pointer or a wrapper for one,
/// exposing the raw address of a `Pointee` it does not necessarily own.
///
/// `U: Pointer<T>` is the compile-time relation "`U` is pointer-like for
/// `T`": a value of `U` can yield a `*const T` through [`as_raw`]. The
/// relation is checked entirely at instantiation time; implementing the
/// trait is what makes a type eligible, there is no runtime registration.
///
/// The pointee has to match exactly. Trait parameters are invariant, so a
/// `Box<Derived>`-style candidate never satisfies `Pointer<Base>`, and the
/// [`Pin`] impl requires `Deref<Target = Pointee>` for the same reason.
///
/// [`as_raw`]: Pointer::as_raw
pub trait Pointer<Pointee: ?Sized>: Sized {
    /// The raw address this value points at.
    fn as_raw(&self) -> *const Pointee;
}

/*
 * Here are the impls for the primitive pointer types from core
 */

impl<T: ?Sized> Pointer<T> for *const T {
    fn as_raw(&self) -> *const T {
        *self
    }
}

impl<T: ?Sized> Pointer<T> for *mut T {
    fn as_raw(&self) -> *const T {
        self.cast_const()
    }
}

impl<'a, T: ?Sized> Pointer<T> for &'a T {
    fn as_raw(&self) -> *const T {
        *self
    }
}

impl<'a, T: ?Sized> Pointer<T> for &'a mut T {
    fn as_raw(&self) -> *const T {
        &**self
    }
}

impl<T: ?Sized> Pointer<T> for NonNull<T> {
    fn as_raw(&self) -> *const T {
        self.as_ptr().cast_const()
    }
}

/*
 * Smart pointers and wrappers
 */

impl<T: ?Sized> Pointer<T> for Box<T> {
    fn as_raw(&self) -> *const T {
        &**self
    }
}

impl<T: ?Sized> Pointer<T> for Rc<T> {
    fn as_raw(&self) -> *const T {
        Rc::as_ptr(self)
    }
}

impl<T: ?Sized> Pointer<T> for Arc<T> {
    fn as_raw(&self) -> *const T {
        Arc::as_ptr(self)
    }
}

// Pinning wraps a pointer without changing what it points at, so the
// relation forwards to the wrapped pointer.
impl<P, T> Pointer<T> for Pin<P>
where
    P: Pointer<T> + Deref<Target = T>,
    T: ?Sized,
{
    fn as_raw(&self) -> *const T {
        self.as_ref().get_ref()
    }
}
