//! Page-wide toolkit instance and mounted widget handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM module runs on the browser main thread only. The toolkit holds
//! `Rc` seams (storage, events, data) and so cannot live in a reactive
//! signal; it sits in a thread-local and widgets reach it through
//! [`with_toolkit`].
//!
//! TRADE-OFFS
//! ==========
//! Re-entrant access, e.g. a `CustomEvent` listener firing while the toolkit
//! is dispatching that event, gets `None` instead of a borrow panic. Callers
//! that need the data afterwards defer their read to the next task.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::OffsetDateTime;
use toolkit::Toolkit;
use toolkit::calendar::Clock;
use toolkit::module::ToolKind;

use crate::util::clock::JsClock;

/// Instance ids are unique per tool only.
type MountKey = (ToolKind, String);

thread_local! {
    static TOOLKIT: RefCell<Option<Toolkit>> = const { RefCell::new(None) };
    static MOUNTED: RefCell<HashMap<MountKey, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Install the page's toolkit. Returns `false` and keeps the existing one if
/// a toolkit is already installed.
pub fn install(toolkit: Toolkit) -> bool {
    TOOLKIT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(toolkit);
        true
    })
}

pub fn is_installed() -> bool {
    TOOLKIT.with(|cell| cell.try_borrow().map_or(true, |slot| slot.is_some()))
}

/// Run `f` against the installed toolkit. `None` when nothing is installed or
/// the toolkit is already borrowed further up the stack.
pub fn with_toolkit<R>(f: impl FnOnce(&mut Toolkit) -> R) -> Option<R> {
    TOOLKIT.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            tracing::warn!("toolkit busy; skipping re-entrant access");
            None
        }
    })
}

/// Map generic class tokens through the active theme.
pub fn classes(tokens: &str) -> String {
    with_toolkit(|toolkit| toolkit.map_classes(tokens)).unwrap_or_else(|| tokens.to_owned())
}

/// Current time from the toolkit's clock, or the browser clock before init.
pub fn now() -> OffsetDateTime {
    with_toolkit(|toolkit| toolkit.context().clock.now()).unwrap_or_else(|| JsClock.now())
}

pub fn now_millis() -> u64 {
    with_toolkit(|toolkit| toolkit.context().clock.now_millis()).unwrap_or_else(|| JsClock.now_millis())
}

/// A widget-owned generator seeded from the toolkit's, so widgets never hold
/// the toolkit borrow while drawing numbers.
pub fn fork_rng() -> StdRng {
    let seed = with_toolkit(|toolkit| toolkit.rng().random::<u64>()).unwrap_or_else(|| JsClock.now_millis());
    StdRng::seed_from_u64(seed)
}

// =============================================================================
// MOUNT HANDLES
// =============================================================================

/// Keep a mounted view alive under its tool and instance id. Dropping the
/// handle unmounts the view; an existing handle for the same key is replaced.
pub fn keep_mounted(kind: ToolKind, id: &str, handle: Box<dyn Any>) {
    let previous = MOUNTED.with(|cell| cell.borrow_mut().insert((kind, id.to_owned()), handle));
    // Drop outside the borrow: unmounting runs cleanups that may touch the map.
    drop(previous);
}

pub fn is_mounted(kind: ToolKind, id: &str) -> bool {
    MOUNTED.with(|cell| cell.borrow().contains_key(&(kind, id.to_owned())))
}

/// Unmount the view for `id`. Returns whether one was mounted.
pub fn unmount(kind: ToolKind, id: &str) -> bool {
    let handle = MOUNTED.with(|cell| cell.borrow_mut().remove(&(kind, id.to_owned())));
    let found = handle.is_some();
    drop(handle);
    found
}

/// Tools and ids with a live view, sorted.
pub fn mounted() -> Vec<MountKey> {
    let mut keys: Vec<MountKey> = MOUNTED.with(|cell| cell.borrow().keys().cloned().collect());
    keys.sort();
    keys
}
