//! Pending-call flag shared between a service and the view.
//!
//! The view disables its controls while the flag is set. Taking the flag
//! publishes a start event right away and the guard publishes the matching
//! finish event on every exit path, including early `?` returns.

use std::cell::Cell;
use std::rc::Rc;

use sfm_types::{event::AppEvent, AppError, Result};
use crate::event_bus::EventBus;

#[derive(Clone, Default)]
pub(crate) struct BusyFlag(Rc<Cell<bool>>);

impl BusyFlag {
    pub(crate) fn get(&self) -> bool {
        self.0.get()
    }

    /// Claim the flag, failing with `Busy` if a call is already pending.
    /// `on_acquire` is published immediately, `on_release` when the guard
    /// is dropped.
    pub(crate) fn acquire(
        &self,
        bus: &EventBus,
        on_acquire: AppEvent,
        on_release: AppEvent,
    ) -> Result<BusyGuard> {
        if self.0.replace(true) {
            return Err(AppError::Busy);
        }
        bus.emit(on_acquire);
        Ok(BusyGuard {
            flag: self.0.clone(),
            bus: bus.clone(),
            on_release: Some(on_release),
        })
    }
}

pub(crate) struct BusyGuard {
    flag: Rc<Cell<bool>>,
    bus: EventBus,
    on_release: Option<AppEvent>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.set(false);
        if let Some(event) = self.on_release.take() {
            self.bus.emit(event);
        }
    }
}
