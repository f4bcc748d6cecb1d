use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use folio_core_contact_contracts::ContactService;
use folio_models::{contact::ContactPayload, submission::SubmissionStatus};
use tokio::sync::watch;

/// Client-side state machine for one contact form instance.
///
/// Owns the [`SubmissionStatus`] and turns each submit event into at most one
/// relay invocation. On success the form auto-closes after a fixed delay; the
/// unmount signal fires exactly once per controller, after the exit delay.
#[derive(Debug, Clone)]
pub struct SubmissionController<Contact> {
    contact: Contact,
    config: SubmissionControllerConfig,
    state: Arc<ControllerState>,
}

#[derive(Debug, Clone)]
pub struct SubmissionControllerConfig {
    /// Time the success state stays visible before the form closes itself.
    pub success_close_delay: Duration,
    /// Time between the close action and the unmount signal, covering the
    /// exit animation.
    pub exit_delay: Duration,
}

impl Default for SubmissionControllerConfig {
    fn default() -> Self {
        Self {
            success_close_delay: Duration::from_millis(2000),
            exit_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Debug)]
struct ControllerState {
    status: Mutex<SubmissionStatus>,
    closing: AtomicBool,
    unmount_tx: watch::Sender<bool>,
}

impl ControllerState {
    fn mounted(&self) -> bool {
        !*self.unmount_tx.borrow()
    }

    fn set_status(&self, status: SubmissionStatus) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = status;
    }

    fn begin_close(self: &Arc<Self>, exit_delay: Duration) {
        if self.closing.swap(true, Ordering::SeqCst) {
            return;
        }
        let state = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(exit_delay).await;
            state.unmount_tx.send_replace(true);
        });
    }
}

impl<Contact> SubmissionController<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact, config: SubmissionControllerConfig) -> Self {
        let (unmount_tx, _) = watch::channel(false);
        Self {
            contact,
            config,
            state: Arc::new(ControllerState {
                status: Mutex::new(SubmissionStatus::Idle),
                closing: AtomicBool::new(false),
                unmount_tx,
            }),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        *self
            .state
            .status
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Receiver that switches to `true` once the form has unmounted.
    pub fn unmounted(&self) -> watch::Receiver<bool> {
        self.state.unmount_tx.subscribe()
    }

    /// Handle a submit event.
    ///
    /// Empty fields never reach the relay (the submit event does not fire for
    /// an incomplete form). While a relay call is in flight, further submits
    /// are ignored; resubmitting after an error is allowed.
    pub async fn submit(&self, payload: ContactPayload) {
        if payload.name.is_empty() || payload.email.is_empty() || payload.message.is_empty() {
            return;
        }
        if !self.state.mounted() {
            return;
        }

        {
            let mut status = self.state.status.lock().unwrap_or_else(|e| e.into_inner());
            if *status == SubmissionStatus::Sending {
                return;
            }
            *status = SubmissionStatus::Sending;
        }

        let result = self.contact.send_notification(payload).await;

        // The form may have been closed while the call was in flight.
        if !self.state.mounted() {
            return;
        }

        if result.success {
            self.state.set_status(SubmissionStatus::Success);
            let state = Arc::clone(&self.state);
            let success_close_delay = self.config.success_close_delay;
            let exit_delay = self.config.exit_delay;
            tokio::spawn(async move {
                tokio::time::sleep(success_close_delay).await;
                state.begin_close(exit_delay);
            });
        } else {
            self.state.set_status(SubmissionStatus::Error);
        }
    }

    /// Close the form (close button, overlay click, Escape). Idempotent.
    pub fn close(&self) {
        self.state.begin_close(self.config.exit_delay);
    }
}
