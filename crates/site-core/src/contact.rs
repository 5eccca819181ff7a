//! Local-only contact form submission.
//!
//! There is no outbound request: a submission waits out a fixed latency and
//! then lands in `Sent`. State only moves forward, Idle -> Pending -> Sent.

use crate::constants::SUBMIT_LATENCY_MS;
use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub brief: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("project brief is required")]
    MissingBrief,
}

impl ContactFormData {
    /// Mirrors the `required` attribute: a field is missing only when empty.
    /// Email shape is left to the browser's `type=email` constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.brief.is_empty() {
            return Err(ValidationError::MissingBrief);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid form: {0}")]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    AlreadyPending,
    #[error("the form has already been sent")]
    AlreadySent,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    state: SubmissionState,
    submitted: Option<ContactFormData>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn submitted(&self) -> Option<&ContactFormData> {
        self.submitted.as_ref()
    }

    /// Idle -> Pending. Rejected while pending, after sending, or when the
    /// data fails validation; a rejection never changes state.
    pub fn begin(&mut self, data: ContactFormData) -> Result<(), SubmitError> {
        match self.state {
            SubmissionState::Pending => return Err(SubmitError::AlreadyPending),
            SubmissionState::Sent => return Err(SubmitError::AlreadySent),
            SubmissionState::Idle => {}
        }
        data.validate()?;
        self.state = SubmissionState::Pending;
        self.submitted = Some(data);
        Ok(())
    }

    /// Pending -> Sent. No-op in any other state.
    pub fn complete(&mut self) {
        if self.state == SubmissionState::Pending {
            self.state = SubmissionState::Sent;
        }
    }

    /// The submit control is disabled once a submission has started.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state != SubmissionState::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Idle => "Send message",
            SubmissionState::Pending => "Sending…",
            SubmissionState::Sent => "Sent — we’ll be in touch",
        }
    }
}

/// Run one simulated submission. `delay` supplies the platform timer; it is
/// only awaited when the form actually entered `Pending`.
pub async fn submit<F, Fut>(
    form: &RefCell<ContactForm>,
    data: ContactFormData,
    delay: F,
) -> Result<(), SubmitError>
where
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    form.borrow_mut().begin(data)?;
    log::info!("[contact] submission pending");
    delay(Duration::from_millis(u64::from(SUBMIT_LATENCY_MS))).await;
    form.borrow_mut().complete();
    log::info!("[contact] submission sent");
    Ok(())
}
