//! Debounced Commit
//!
//! Drives a `Debouncer` with browser timeouts: every push re-arms a
//! `gloo_timers` timeout, and dropping the previous timeout cancels it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use todo_store::Debouncer;

struct Inner<T> {
    debouncer: Debouncer<T>,
    timer: Option<Timeout>,
    commit: Rc<dyn Fn(T)>,
}

/// Hands the last value of each burst to `commit` once the window has passed
pub struct DebouncedCommit<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: 'static> DebouncedCommit<T> {
    pub fn new(window_ms: u64, commit: impl Fn(T) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                debouncer: Debouncer::new(window_ms),
                timer: None,
                commit: Rc::new(commit),
            })),
        }
    }

    /// Record a new value and restart the quiet window
    pub fn push(&self, value: T) {
        let mut inner = self.inner.borrow_mut();
        let now = now_ms();
        inner.debouncer.push(value, now);
        let Some(deadline) = inner.debouncer.deadline() else {
            return;
        };

        let weak = Rc::downgrade(&self.inner);
        let delay = deadline.saturating_sub(now).min(u32::MAX as u64) as u32;
        // Replacing the timer clears the previous timeout
        inner.timer = Some(Timeout::new(delay, move || fire(&weak, deadline)));
    }

    /// Commit the pending value right away, if any
    pub fn flush(&self) {
        let released = {
            let mut inner = self.inner.borrow_mut();
            inner.timer = None;
            inner.debouncer.cancel().map(|value| (value, inner.commit.clone()))
        };
        if let Some((value, commit)) = released {
            commit(value);
        }
    }

    /// Drop the pending value without committing it
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.timer = None;
        inner.debouncer.cancel();
    }
}

/// Timer callback for the push that armed `deadline`. Later pushes drop this
/// timer, so reaching here means no newer value arrived.
fn fire<T>(inner: &Weak<RefCell<Inner<T>>>, deadline: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let released = {
        let mut inner = inner.borrow_mut();
        inner.debouncer.poll(deadline).map(|value| (value, inner.commit.clone()))
    };
    // Commit outside the borrow so the callback may push again
    if let Some((value, commit)) = released {
        commit(value);
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
