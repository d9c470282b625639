#![cfg(feature = "unchecked")]

//! Compiled only with `--features unchecked`: the validation sites must
//! perform no sentinel comparison at all.

use core::cell::Cell;

use sref::{NotNull, Nullable};

struct Probe<'a> {
    null: bool,
    checks: &'a Cell<usize>,
}

impl Nullable for Probe<'_> {
    fn is_null(&self) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.null
    }
}

#[test]
fn test_checks_are_compiled_out() {
    assert!(!sref::CHECKS_ENABLED);
}

#[test]
fn test_no_comparison_is_performed() {
    let checks = Cell::new(0);

    let nn = NotNull::new(Probe {
        null: true,
        checks: &checks,
    });
    nn.get();
    nn.get();

    assert_eq!(checks.get(), 0);
}
