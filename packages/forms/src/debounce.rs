//! Per-field ownership of debounce timers.
//!
//! A form keeps at most one scheduled validation per field. Scheduling a new
//! one cancels the previous handle before storing the replacement, and the
//! slots cancel whatever is left when they are dropped.

use crate::models::Field;

/// A scheduled task that can be stopped before it fires.
pub trait Cancel {
    fn cancel(self);
}

/// One optional timer handle per [`Field`].
#[derive(Debug)]
pub struct TimerSlots<H: Cancel> {
    slots: [Option<H>; 3],
}

impl<H: Cancel> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            slots: [None, None, None],
        }
    }
}

impl<H: Cancel> TimerSlots<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` for `field`, cancelling the one it replaces.
    pub fn replace(&mut self, field: Field, handle: H) {
        if let Some(previous) = self.slots[field.index()].replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the timer for `field`, if any.
    pub fn cancel(&mut self, field: Field) {
        if let Some(handle) = self.slots[field.index()].take() {
            handle.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        for field in Field::ALL {
            self.cancel(field);
        }
    }

    /// Forget the handle for `field` without cancelling it, typically from
    /// inside the timer itself once it has fired.
    pub fn release(&mut self, field: Field) -> Option<H> {
        self.slots[field.index()].take()
    }

    pub fn is_scheduled(&self, field: Field) -> bool {
        self.slots[field.index()].is_some()
    }
}

impl<H: Cancel> Drop for TimerSlots<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
