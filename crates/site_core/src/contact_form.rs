//! Contact form submission life cycle:
//! `Idle -> Pending -> (Succeeded | Failed) -> Idle`.

use shared::{
    domain::{ContactFormDraft, FormField, SubmissionStatus, Toast},
    error::{SubmissionError, SubmitRejection, ValidationError},
    protocol::{ContactSubmission, RelayReceipt},
};
use tracing::{error, info, warn};

use crate::ContactRelay;

/// Mirrors native `required` plus `type="email"` checks. Whitespace-only
/// values count as filled.
pub fn validate_draft(draft: &ContactFormDraft) -> Result<(), ValidationError> {
    for field in FormField::ALL {
        if draft.field(field).is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    if !looks_like_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn looks_like_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactFormDraft,
    status: SubmissionStatus,
    validation_error: Option<ValidationError>,
    toasts: Vec<Toast>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: ContactFormDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Whether the submit affordance is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Replaces one field of the draft. Last write wins.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
        if self
            .validation_error
            .is_some_and(|err| err.field() == field)
        {
            self.validation_error = None;
        }
        self.acknowledge();
    }

    /// Returns a settled form to `Idle`. No-op while `Pending`.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Succeeded | SubmissionStatus::Failed
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validates the draft and enters `Pending`, returning the payload to
    /// send. Nothing changes when the attempt is rejected.
    pub fn begin_submission(&mut self) -> Result<ContactSubmission, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }
        if let Err(err) = validate_draft(&self.draft) {
            self.validation_error = Some(err);
            return Err(err.into());
        }
        self.validation_error = None;
        self.status = SubmissionStatus::Pending;
        Ok(ContactSubmission::from(&self.draft))
    }

    /// Leaves `Pending` unconditionally and records the matching toast. The
    /// draft is cleared on success only, so a failed message can be resent.
    pub fn settle(&mut self, outcome: Result<RelayReceipt, SubmissionError>) -> SubmissionStatus {
        if !self.is_submitting() {
            warn!("ignoring submission outcome with no submission in flight");
            return self.status;
        }
        match outcome {
            Ok(receipt) => {
                info!(response = %receipt.0, "contact message saved");
                self.toasts.push(Toast::message_sent());
                self.draft.clear();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(err) => {
                error!("contact submission failed: {err}");
                self.toasts.push(Toast::submission_failed());
                self.status = SubmissionStatus::Failed;
            }
        }
        self.status
    }

    /// One full cycle around a single awaited relay call.
    pub async fn submit(
        &mut self,
        relay: &dyn ContactRelay,
    ) -> Result<SubmissionStatus, SubmitRejection> {
        let submission = self.begin_submission()?;
        let mut guard = InFlightGuard { form: self };
        let outcome = relay.submit(&submission).await;
        Ok(guard.form.settle(outcome))
    }
}

/// Clears `Pending` if a submission future is dropped before it settles.
struct InFlightGuard<'a> {
    form: &'a mut ContactForm,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.form.is_submitting() {
            warn!("contact submission dropped before settling");
            self.form.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_form_tests.rs"]
mod tests;
