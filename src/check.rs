use core::cell::Cell;

use crate::nullable::Nullable;

/// Whether null-invariant validation is compiled in.
///
/// Checked mode is the default. Building with the `unchecked` feature turns
/// every validation site into nothing; violating the invariant then is
/// undefined behaviour.
pub const CHECKS_ENABLED: bool = cfg!(not(feature = "unchecked"));

/// Invoked when a value is found equal to its null sentinel in checked mode.
///
/// The handler must diverge and receives no message.
pub type ViolationHandler = fn() -> !;

#[cfg(feature = "std")]
fn default_handler() -> ! {
    std::process::abort()
}

#[cfg(not(feature = "std"))]
fn default_handler() -> ! {
    panic!("null invariant violated")
}

static HANDLER: critical_section::Mutex<Cell<ViolationHandler>> =
    critical_section::Mutex::new(Cell::new(default_handler));

/// Installs the handler invoked on null-invariant violations, returning the
/// previous one.
///
/// The default handler aborts the process. Tests install a panicking handler
/// so that violations become observable without terminating the test runner.
pub fn set_violation_handler(handler: ViolationHandler) -> ViolationHandler {
    critical_section::with(|cs| HANDLER.borrow(cs).replace(handler))
}

pub(crate) fn violation() -> ! {
    let handler = critical_section::with(|cs| HANDLER.borrow(cs).get());
    handler()
}

/// Validates `value` against its null sentinel in checked mode.
pub(crate) fn ensure_not_null<T: Nullable>(value: &T) {
    if CHECKS_ENABLED && value.is_null() {
        violation();
    }
}
