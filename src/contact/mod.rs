//! Contact form flow: validate, send once, report back through a toast.
//!
//! All state lives in a [`ContactState`] owned by the contact view. The
//! controller reaches it through [`ContactStore`] so the same code drives a
//! reactive signal in the browser and a plain cell in tests.

mod form;
mod notification;
mod transport;
mod validate;

pub use form::{Field, FormData, SubmissionPayload};
pub use notification::{
    Notification, NotificationId, NotificationKind, NotificationState, NOTIFICATION_TTL,
};
pub use transport::{SheetTransport, Transport, TransportError};
pub use validate::{validate, ValidationError};

use chrono::{DateTime, Utc};

pub const SENT_MESSAGE: &str = "Sent! I'll reply soon.";
pub const RETRY_MESSAGE: &str = "Error. Try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: FormData,
    /// Set while a submission is in flight; the submit control is disabled.
    pub busy: bool,
    pub notification: NotificationState,
}

impl ContactState {
    /// First half of a submit. Returns the payload to send, or `Err` with the
    /// reason nothing should be sent.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<SubmissionPayload, SubmitOutcome> {
        if self.busy {
            return Err(SubmitOutcome::Busy);
        }
        if let Err(e) = validate(&self.form) {
            self.notification.show(Notification::error(e.to_string()));
            return Err(SubmitOutcome::Invalid(e));
        }
        self.busy = true;
        Ok(SubmissionPayload::new(self.form.clone(), now))
    }

    /// Second half of a submit, once the transport has returned.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) -> SubmitOutcome {
        self.busy = false;
        match result {
            Ok(()) => {
                self.notification.show(Notification::success(SENT_MESSAGE));
                self.form.clear();
                SubmitOutcome::Sent
            }
            Err(e) => {
                self.notification.show(Notification::error(RETRY_MESSAGE));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Busy,
    Invalid(ValidationError),
    Sent,
    Failed(TransportError),
    /// The owning view went away before the state could be read or updated.
    Detached,
}

/// Access to the [`ContactState`] owned by a view.
pub trait ContactStore {
    /// Runs `f` against the state, or returns `None` if the state is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R>;
}

/// Runs one submit action against `store`, making at most one call to
/// `transport`.
pub async fn submit<S, T>(store: &S, transport: &T, now: DateTime<Utc>) -> SubmitOutcome
where
    S: ContactStore,
    T: Transport,
{
    let payload = match store.modify(|s| s.begin_submit(now)) {
        Some(Ok(payload)) => payload,
        Some(Err(outcome)) => {
            log::debug!("contact submit not sent: {:?}", outcome);
            return outcome;
        }
        None => return SubmitOutcome::Detached,
    };

    let result = transport.send(&payload).await;
    match &result {
        Ok(()) => log::info!("contact submission sent at {}", payload.timestamp),
        Err(e) => log::warn!("contact submission failed: {}", e),
    }

    store
        .modify(|s| s.finish_submit(result))
        .unwrap_or(SubmitOutcome::Detached)
}
