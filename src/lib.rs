#![no_std]

//!
//! # Example
//! ```
//! let a = sref::SharedRef::new(1);
//! let b = a.clone();
//!
//! a.replace(2);
//!
//! assert_eq!(*b.borrow(), 2);
//! ```
//! See more examples in the demos directory

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod check;
mod not_null;
mod nullable;
mod shared;

pub use check::{set_violation_handler, ViolationHandler, CHECKS_ENABLED};
pub use not_null::NotNull;
pub use nullable::Nullable;
pub use shared::{SharedHandle, SharedRef, Upcast};
