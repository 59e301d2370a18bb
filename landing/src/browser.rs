//! Browser bindings for the core traits.

use std::rc::Rc;
use std::time::Duration;

use chrono::{Local, NaiveTime};
use growfeed::nav::{self, Section};
use growfeed::store::{KeyValueStore, StoreError};
use growfeed::water::{ScheduleError, Scheduler};
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage). Reads then come back empty and writes
/// fail with [`StoreError::Backend`].
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = window().local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; contact data will not persist");
        }
        Self { storage }
    }

    fn backend_error(key: &str, reason: impl Into<String>) -> StoreError {
        StoreError::Backend {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Self::backend_error(key, "localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| Self::backend_error(key, format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };
        storage
            .remove_item(key)
            .map_err(|e| Self::backend_error(key, format!("{e:?}")))
    }
}

/// Timer created by [`BrowserScheduler`].
pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

/// `setInterval` / `setTimeout` backed scheduler.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule_repeating(
        &mut self,
        period: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<BrowserTimer, ScheduleError> {
        set_interval_with_handle(move || tick(), period)
            .map(BrowserTimer::Interval)
            .map_err(|e| ScheduleError(format!("{e:?}")))
    }

    fn schedule_once(
        &mut self,
        delay: Duration,
        tick: Rc<dyn Fn()>,
    ) -> Result<BrowserTimer, ScheduleError> {
        set_timeout_with_handle(move || tick(), delay)
            .map(BrowserTimer::Timeout)
            .map_err(|e| ScheduleError(format!("{e:?}")))
    }

    fn cancel(&mut self, handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(handle) => handle.clear(),
            BrowserTimer::Timeout(handle) => handle.clear(),
        }
    }
}

pub fn local_time() -> NaiveTime {
    Local::now().time()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Smooth-scroll so `section` sits just below the fixed header.
/// Returns false when the section is not in the document.
pub fn scroll_to_section(section: Section, header_height: f64) -> bool {
    let element = match document().query_selector(&section.selector()) {
        Ok(Some(element)) => element,
        _ => {
            tracing::warn!(anchor = section.anchor(), "scroll target missing");
            return false;
        }
    };

    let top = nav::scroll_offset(
        element.get_bounding_client_rect().top(),
        scroll_y(),
        header_height,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
    true
}
