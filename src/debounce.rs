//! Debounced Commit
//!
//! Delays committing a value until input settles. A new value replaces the
//! pending one and restarts the timer; `flush` commits right away.
//! Dropping the handle cancels anything pending.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub struct Debounced<T: 'static> {
    delay_ms: u32,
    pending: Rc<RefCell<Option<T>>>,
    timer: Option<Timeout>,
    commit: Rc<dyn Fn(T)>,
}

impl<T: 'static> Debounced<T> {
    pub fn new(delay_ms: u32, commit: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            timer: None,
            commit: Rc::new(commit),
        }
    }

    /// Replace the pending value and restart the delay
    pub fn schedule(&mut self, value: T) {
        self.timer.take();
        *self.pending.borrow_mut() = Some(value);

        let pending = Rc::clone(&self.pending);
        let commit = Rc::clone(&self.commit);
        self.timer = Some(Timeout::new(self.delay_ms, move || {
            let value = pending.borrow_mut().take();
            if let Some(value) = value {
                commit(value);
            }
        }));
    }

    /// Commit the pending value now, if any
    pub fn flush(&mut self) {
        self.timer.take();
        let value = self.pending.borrow_mut().take();
        if let Some(value) = value {
            (self.commit)(value);
        }
    }

    /// Drop the pending value without committing
    pub fn cancel(&mut self) {
        self.timer.take();
        self.pending.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<T: 'static> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
