//! The standard panic hook prints `thread '...' panicked at ...` to stderr for every panic,
//! including the ones that a wrapped call goes on to capture and hand back as a value.
//!
//! [install_quiet_hook](crate::hook::install_quiet_hook) replaces it with a hook that stays
//! silent while the current thread is inside a wrapped call and defers to the previous hook
//! everywhere else.

use crate::env;
use log::debug;
use std::cell::Cell;
use std::panic;
use std::sync::Once;

thread_local! {
    static DEPTH: Cell<usize> = Cell::new(0);
}

static INSTALL: Once = Once::new();

/// Marks the current thread as being inside a wrapped call for as long as it is alive.
/// Scopes nest.
pub(crate) struct Scope {
    _private: (),
}

impl Scope {
    pub(crate) fn enter() -> Self {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        Scope { _private: () }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Returns true while the current thread is executing a wrapped call.
///
/// ```
/// use wrap::{attempt, hook};
///
/// assert!(!hook::capturing());
/// assert_eq!(true, attempt(hook::capturing).unwrap());
/// ```
pub fn capturing() -> bool {
    DEPTH.with(|depth| depth.get() > 0)
}

/// Installs the quiet panic hook. Only the first call has any effect; every following call
/// is a no-op, so it is safe to call from library initialization and tests alike.
///
/// Panics raised outside of a wrapped call are still reported by whichever hook was
/// installed before this one.
pub fn install_quiet_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capturing() {
                previous(info)
            }
        }));
        debug!("Installed the quiet panic hook");
    });
}

/// Installs the quiet panic hook if, and only if, the `WRAP_QUIET_PANICS` environment
/// variable asks for it. Returns whether it was requested.
pub fn install_from_env() -> bool {
    let quiet = env::quiet_panics();
    if quiet {
        install_quiet_hook();
    }
    quiet
}
