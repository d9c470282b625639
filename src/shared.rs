use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

use crate::not_null::NotNull;

/// The nullable form of the shared-ownership handle wrapped by [`SharedRef`].
pub type SharedHandle<T: ?Sized> = Option<Rc<RefCell<T>>>;

/// A declared is-a relationship between referent types.
///
/// Implementing `Upcast<Y>` for `T` states that a shared `T` referent may be
/// viewed as a shared `Y` referent. The impl body is the built-in unsizing
/// coercion:
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// trait Animal {
///     fn legs(&self) -> u32;
/// }
///
/// struct Dog;
///
/// impl Animal for Dog {
///     fn legs(&self) -> u32 {
///         4
///     }
/// }
///
/// impl sref::Upcast<dyn Animal> for Dog {
///     fn upcast(this: Rc<RefCell<Dog>>) -> Rc<RefCell<dyn Animal>> {
///         this
///     }
/// }
///
/// let dog = sref::SharedRef::new(Dog);
/// let animal: sref::SharedRef<dyn Animal> = dog.upcast();
///
/// assert_eq!(animal.borrow().legs(), 4);
/// ```
pub trait Upcast<Y: ?Sized> {
    /// Reinterprets a shared handle to `Self` as a shared handle to `Y`.
    fn upcast(this: Rc<RefCell<Self>>) -> Rc<RefCell<Y>>;
}

/// A non-nullable shared-ownership handle: always refers to a live referent,
/// co-owned with every clone and upcast view of itself.
///
/// Dereferencing reaches the referent's [`RefCell`], so access reads like
/// the cell's own API:
///
/// ```
/// let a = sref::SharedRef::new(1);
/// let b = a.clone();
///
/// a.replace(2);
///
/// assert_eq!(*b.borrow(), 2);
/// ```
///
/// There is no construction from the null sentinel:
/// ```compile_fail
/// let r: sref::SharedRef<i32> = sref::SharedRef::from(None);
/// ```
#[repr(transparent)]
pub struct SharedRef<T: ?Sized>(NotNull<SharedHandle<T>>);

impl<T> SharedRef<T> {
    /// Creates a handle owning a fresh heap-allocated referent.
    pub fn new(value: T) -> Self {
        Self::from(Rc::new(RefCell::new(value)))
    }

    /// Takes ownership of a heap-allocated referent.
    ///
    /// The pointer is validated like any other construction: in checked mode
    /// a null pointer reaches the violation handler. The value is moved into
    /// a fresh shared cell and the original allocation is freed.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Box::into_raw`] and must not be used or freed
    /// again by the caller. With the `unchecked` feature a null `ptr` is
    /// undefined behaviour.
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        let ptr: NotNull<*mut T> = NotNull::new(ptr);
        Self::new(*Box::from_raw(ptr.into_inner()))
    }
}

impl<T: ?Sized> SharedRef<T> {
    /// Adopts an existing shared handle, co-owning its referent.
    ///
    /// In checked mode a `None` handle reaches the violation handler.
    pub fn from_shared(handle: SharedHandle<T>) -> Self {
        Self(NotNull::new(handle))
    }

    /// Clones the underlying shared handle out of the wrapper.
    ///
    /// This is the interop escape hatch: the returned handle is live, but
    /// its type no longer says so. Prefer keeping the `SharedRef`.
    pub fn to_shared(&self) -> Rc<RefCell<T>> {
        Rc::clone(self.referent())
    }

    /// Copies the value of `source`'s referent into this handle's referent.
    ///
    /// This is assignment with reference semantics: it mutates the
    /// referenced object and never rebinds which referent is pointed to.
    /// When both handles already share one referent it is a no-op.
    pub fn assign(&self, source: &SharedRef<T>)
    where
        T: Clone,
    {
        if Rc::ptr_eq(self.referent(), source.referent()) {
            return;
        }

        self.borrow_mut().clone_from(&source.borrow());
    }

    /// Converts to a handle of a more general referent type, co-owning the
    /// identical referent.
    pub fn upcast<Y: ?Sized>(&self) -> SharedRef<Y>
    where
        T: Upcast<Y>,
    {
        SharedRef::from(T::upcast(self.to_shared()))
    }

    fn referent(&self) -> &Rc<RefCell<T>> {
        match self.0.get() {
            Some(handle) => handle,
            // `get` diverges on a null handle in checked mode; reaching this
            // arm otherwise is the documented undefined behaviour
            None => unsafe { core::hint::unreachable_unchecked() },
        }
    }
}

impl<T: ?Sized> From<Rc<RefCell<T>>> for SharedRef<T> {
    fn from(handle: Rc<RefCell<T>>) -> Self {
        Self::from_shared(Some(handle))
    }
}

impl<T: ?Sized> Clone for SharedRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ?Sized> Deref for SharedRef<T> {
    type Target = RefCell<T>;

    fn deref(&self) -> &RefCell<T> {
        self.referent()
    }
}

impl<T: ?Sized + PartialEq> PartialEq for SharedRef<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.borrow() == *other.borrow()
    }
}

impl<T: ?Sized + Eq> Eq for SharedRef<T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for SharedRef<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (*self.borrow()).partial_cmp(&*other.borrow())
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for SharedRef<T> {
    /// Streams the referent's own textual representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.borrow(), f)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for SharedRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRef").field(self.referent()).finish()
    }
}
