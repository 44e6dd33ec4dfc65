//! Legacy Page Layer
//!
//! Progressive enhancement for the server-rendered pages: validation, suggestions,
//! autosave, date ranges, alerts and weather notifications. Everything attaches
//! to existing DOM through `web-sys` and is skipped when its anchor element is
//! missing.
//!
//! All listeners and timers live in [`LegacyLayer`]; dropping or disposing it
//! detaches them.

mod alerts;
mod autosave;
mod dates;
pub(crate) mod dom;
mod forms;
mod notifications;
mod page;
mod suggestions;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Event, EventTarget};

use crate::browser;
use crate::config::AppConfig;

use dom::Listener;

/// State shared by the layer's handlers. Handlers hold a `Weak` to it so that
/// dropping the layer frees everything.
pub(crate) struct Shared {
    config: AppConfig,
    listeners: RefCell<Vec<Listener>>,
    intervals: RefCell<Vec<Interval>>,
    timeouts: RefCell<Vec<Timeout>>,
    /// Weather alert polling has started
    polling: Cell<bool>,
}

impl Shared {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            listeners: RefCell::default(),
            intervals: RefCell::default(),
            timeouts: RefCell::default(),
            polling: Cell::new(false),
        }
    }

    fn config(&self) -> &AppConfig {
        &self.config
    }

    fn listen(&self, target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) {
        match Listener::new(target, event, handler) {
            Some(listener) => self.listeners.borrow_mut().push(listener),
            None => log::warn!(target: "Legacy", "Could not attach {} listener", event),
        }
    }

    fn keep_interval(&self, interval: Interval) {
        self.intervals.borrow_mut().push(interval);
    }

    fn keep_timeout(&self, timeout: Timeout) {
        self.timeouts.borrow_mut().push(timeout);
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn clear(&self) {
        // Take first so no borrow is held while closures drop
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        let intervals = std::mem::take(&mut *self.intervals.borrow_mut());
        let timeouts = std::mem::take(&mut *self.timeouts.borrow_mut());
        drop(listeners);
        drop(intervals);
        drop(timeouts);
        self.polling.set(false);
    }
}

/// Millisecond setting as a timer delay
fn timer_ms(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// Handle to the attached legacy behaviors
pub struct LegacyLayer {
    shared: Rc<Shared>,
}

impl LegacyLayer {
    /// Attach every behavior whose anchor exists on the current page
    pub fn init(config: AppConfig) -> Option<Self> {
        let document = browser::document()?;
        let shared = Rc::new(Shared::new(config));

        suggestions::inject_styles(&document);
        forms::enhance_forms(&shared, &document);
        forms::restrict_budget_input(&shared, &document);
        suggestions::enhance_destination_input(&shared, &document);
        // After form enhancement so blocked submits are visible to autosave
        autosave::enable_form_autosave(&shared, &document);
        dates::initialize_date_validation(&shared, &document);
        page::animate_progress_bars(&shared, &document);
        page::start_tracking_clock(&shared, &document);
        page::enhance_checkpoint_forms(&shared, &document);
        page::enable_smooth_scroll(&shared, &document);
        notifications::initialize(&shared, &document);

        log::info!(target: "Legacy", "Legacy layer ready with {} listeners", shared.listener_count());
        Some(Self { shared })
    }

    /// Detach all listeners and cancel all timers
    pub fn dispose(self) {
        self.shared.clear();
        log::debug!(target: "Legacy", "Legacy layer disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_ms_saturates() {
        assert_eq!(timer_ms(300), 300);
        assert_eq!(timer_ms(3_600_000), 3_600_000);
        assert_eq!(timer_ms(u64::MAX), u32::MAX);
    }
}
