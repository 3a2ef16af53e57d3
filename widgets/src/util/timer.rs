//! Deferred and repeating callbacks on the browser event loop.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser nothing is scheduled: host builds only render, and
//! the simulated delays exist purely for the shopper's benefit.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::Cell;
use std::rc::Rc;

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
            f();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, f);
    }
}

/// Run `f` on the next turn of the event loop.
pub fn defer(f: impl FnOnce() + 'static) {
    after(0, f);
}

/// Cancels a loop started by [`every`]. Cloning shares the same flag; the
/// loop and its handle live on the main thread.
#[derive(Clone, Debug)]
pub struct Interval {
    alive: Rc<Cell<bool>>,
}

impl Interval {
    pub fn cancel(&self) {
        self.alive.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

/// Run `f` every `ms` milliseconds until cancelled. The first run happens
/// after one full period.
pub fn every(ms: u32, mut f: impl FnMut() + 'static) -> Interval {
    let interval = Interval { alive: Rc::new(Cell::new(true)) };
    #[cfg(feature = "csr")]
    {
        let alive = interval.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
                if !alive.is_alive() {
                    break;
                }
                f();
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, &mut f);
    }
    interval
}
