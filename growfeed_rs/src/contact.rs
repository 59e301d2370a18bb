//! Contact form submissions.
//!
//! Submissions are appended to a JSON array under [`CONTACT_MESSAGES_KEY`]
//! and never removed. A completed submission consumes the pending plan and
//! raises the [`SuccessBanner`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing;
use crate::store::{self, CONTACT_MESSAGES_KEY, KeyValueStore, StoreError};
use crate::water::{ScheduleError, Scheduler};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One persisted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO-8601 UTC timestamp, millisecond precision (`2025-03-01T10:00:00.000Z`).
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

/// Field values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Mirrors the native `required` check: a field is missing only when it
    /// is empty.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// All stored submissions, oldest first. Unreadable data reads as empty.
pub fn load_messages<S>(store: &S) -> Vec<ContactSubmission>
where
    S: KeyValueStore + ?Sized,
{
    store::read_json_or_default(store, CONTACT_MESSAGES_KEY)
}

/// Record `draft`, tagged with the pending plan if there is one, then clear
/// the pending plan. Returns the stored record.
pub fn submit<S>(
    store: &mut S,
    draft: &ContactDraft,
    now: DateTime<Utc>,
) -> Result<ContactSubmission, ContactError>
where
    S: KeyValueStore + ?Sized,
{
    draft.validate()?;

    let record = ContactSubmission {
        name: draft.name.clone(),
        email: draft.email.clone(),
        message: draft.message.clone(),
        date: iso_timestamp(now),
        plan: pricing::pending_plan(store),
    };

    let mut messages = load_messages(store);
    messages.push(record.clone());
    store::write_json(store, CONTACT_MESSAGES_KEY, &messages)?;
    pricing::clear_pending_plan(store)?;

    tracing::info!(
        total = messages.len(),
        plan = record.plan.as_deref().unwrap_or("-"),
        "contact message stored"
    );
    Ok(record)
}

/// "Message sent" notice. It stays up for `duration` after the latest
/// [`SuccessBanner::show`]; showing again restarts the countdown and
/// cancels the earlier hide timer.
pub struct SuccessBanner<S: Scheduler> {
    scheduler: S,
    duration: Duration,
    visible: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn(bool)>,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> SuccessBanner<S> {
    /// Hidden banner. `on_change` receives every visibility update.
    pub fn new(scheduler: S, duration: Duration, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            scheduler,
            duration,
            visible: Rc::new(Cell::new(false)),
            on_change: Rc::new(on_change),
            pending: None,
        }
    }

    pub fn show(&mut self) -> Result<(), ScheduleError> {
        self.cancel();
        self.visible.set(true);
        (self.on_change)(true);

        let visible = Rc::clone(&self.visible);
        let on_change = Rc::clone(&self.on_change);
        let hide = Rc::new(move || {
            visible.set(false);
            on_change(false);
        });
        match self.scheduler.schedule_once(self.duration, hide) {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.hide();
                Err(e)
            }
        }
    }

    pub fn hide(&mut self) {
        self.cancel();
        if self.visible.replace(false) {
            (self.on_change)(false);
        }
    }

    /// Drop the pending hide timer without touching visibility.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<S: Scheduler> Drop for SuccessBanner<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: Scheduler> fmt::Debug for SuccessBanner<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccessBanner")
            .field("duration", &self.duration)
            .field("visible", &self.visible.get())
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
