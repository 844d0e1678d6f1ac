use super::*;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use shared::domain::ToastVariant;

struct RecordingRelay {
    calls: Arc<Mutex<Vec<ContactSubmission>>>,
    outcome: Result<RelayReceipt, SubmissionError>,
}

impl RecordingRelay {
    fn ok() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(RelayReceipt(serde_json::json!({ "status": "ok" }))),
        }
    }

    fn failing(err: SubmissionError) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(err),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl ContactRelay for RecordingRelay {
    async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<RelayReceipt, SubmissionError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(submission.clone());
        self.outcome.clone()
    }
}

struct StalledRelay;

#[async_trait]
impl ContactRelay for StalledRelay {
    async fn submit(
        &self,
        _submission: &ContactSubmission,
    ) -> Result<RelayReceipt, SubmissionError> {
        std::future::pending().await
    }
}

fn filled_form() -> ContactForm {
    ContactForm::with_draft(ContactFormDraft::new("Ann", "a@x.com", "Hi"))
}

#[test]
fn new_form_is_idle_and_empty() {
    let form = ContactForm::new();
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.draft().is_empty());
    assert!(form.can_submit());
    assert!(form.toasts().is_empty());
}

#[test]
fn field_updates_are_last_write_wins() {
    let mut form = ContactForm::new();
    for value in ["A", "An", "Ann", "Anna", "Ann"] {
        form.update_field(FormField::Name, value);
    }
    form.update_field(FormField::Message, "first");
    form.update_field(FormField::Message, "second");

    assert_eq!(form.draft().name, "Ann");
    assert_eq!(form.draft().message, "second");
    assert_eq!(form.draft().email, "");
}

#[tokio::test]
async fn success_resets_draft_and_records_toast() {
    let relay = RecordingRelay::ok();
    let mut form = filled_form();

    let status = form.submit(&relay).await.expect("accepted");

    assert_eq!(status, SubmissionStatus::Succeeded);
    assert!(!form.is_submitting());
    assert_eq!(form.draft(), &ContactFormDraft::default());
    assert_eq!(form.toasts(), &[Toast::message_sent()]);
    assert_eq!(form.toasts()[0].variant, ToastVariant::Default);
    assert_eq!(relay.call_count(), 1);
    assert_eq!(
        relay.calls.lock().expect("calls lock")[0],
        ContactSubmission {
            name: "Ann".into(),
            email: "a@x.com".into(),
            message: "Hi".into(),
        }
    );
}

#[tokio::test]
async fn failure_preserves_draft_and_records_toast() {
    let relay = RecordingRelay::failing(SubmissionError::Transport(
        "network unreachable".into(),
    ));
    let mut form = filled_form();

    let status = form.submit(&relay).await.expect("accepted");

    assert_eq!(status, SubmissionStatus::Failed);
    assert!(!form.is_submitting());
    assert_eq!(
        form.draft(),
        &ContactFormDraft::new("Ann", "a@x.com", "Hi")
    );
    assert_eq!(form.toasts(), &[Toast::submission_failed()]);
    assert!(form.toasts()[0].is_destructive());
}

#[tokio::test]
async fn rejected_status_and_malformed_body_both_fail_the_same_way() {
    for err in [
        SubmissionError::Rejected { status: 503 },
        SubmissionError::MalformedResponse("expected value".into()),
    ] {
        let relay = RecordingRelay::failing(err);
        let mut form = filled_form();
        assert_eq!(
            form.submit(&relay).await.expect("accepted"),
            SubmissionStatus::Failed
        );
        assert_eq!(form.toasts(), &[Toast::submission_failed()]);
        assert!(!form.draft().is_empty());
    }
}

#[tokio::test]
async fn empty_field_never_reaches_the_relay() {
    let relay = RecordingRelay::ok();
    let mut form = ContactForm::with_draft(ContactFormDraft::new("", "b@x.com", "hello"));

    let rejection = form.submit(&relay).await.expect_err("must be rejected");

    assert_eq!(
        rejection,
        SubmitRejection::Invalid(ValidationError::MissingField(FormField::Name))
    );
    assert_eq!(relay.call_count(), 0);
    assert!(!form.is_submitting());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(
        form.validation_error(),
        Some(ValidationError::MissingField(FormField::Name))
    );
    assert!(form.toasts().is_empty());
}

#[tokio::test]
async fn second_submit_while_pending_is_refused() {
    let relay = RecordingRelay::ok();
    let mut form = filled_form();

    let submission = form.begin_submission().expect("first submit accepted");
    assert!(form.is_submitting());
    assert!(!form.can_submit());
    let outcome = relay.submit(&submission).await;

    assert_eq!(form.begin_submission(), Err(SubmitRejection::InFlight));
    assert_eq!(
        form.submit(&relay).await,
        Err(SubmitRejection::InFlight)
    );
    assert_eq!(relay.call_count(), 1);

    assert_eq!(form.settle(outcome), SubmissionStatus::Succeeded);
    assert!(form.can_submit());
}

#[test]
fn settle_without_pending_submission_changes_nothing() {
    let mut form = filled_form();
    let status = form.settle(Err(SubmissionError::Transport("late".into())));

    assert_eq!(status, SubmissionStatus::Idle);
    assert!(form.toasts().is_empty());
    assert!(!form.draft().is_empty());
}

#[test]
fn editing_after_settlement_returns_to_idle() {
    let mut form = filled_form();
    form.begin_submission().expect("accepted");
    form.settle(Err(SubmissionError::Rejected { status: 500 }));
    assert_eq!(form.status(), SubmissionStatus::Failed);

    form.update_field(FormField::Message, "Hi again");
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.draft().message, "Hi again");
}

#[test]
fn editing_while_pending_keeps_pending() {
    let mut form = filled_form();
    form.begin_submission().expect("accepted");
    form.update_field(FormField::Name, "Bea");
    assert!(form.is_submitting());
}

#[test]
fn validation_hint_clears_when_offending_field_changes() {
    let mut form = ContactForm::with_draft(ContactFormDraft::new("Ann", "nope", "Hi"));
    assert_eq!(
        form.begin_submission(),
        Err(SubmitRejection::Invalid(ValidationError::InvalidEmail))
    );
    form.update_field(FormField::Name, "Anne");
    assert_eq!(form.validation_error(), Some(ValidationError::InvalidEmail));

    form.update_field(FormField::Email, "anne@x.com");
    assert_eq!(form.validation_error(), None);
    assert!(form.begin_submission().is_ok());
}

#[test]
fn validation_follows_native_form_rules() {
    let check = |name: &str, email: &str, message: &str| {
        validate_draft(&ContactFormDraft::new(name, email, message))
    };

    assert_eq!(check("Ann", "a@x.com", "Hi"), Ok(()));
    assert_eq!(check("   ", "a@x", " "), Ok(()));
    assert_eq!(
        check("Ann", "", "Hi"),
        Err(ValidationError::MissingField(FormField::Email))
    );
    assert_eq!(
        check("Ann", "a@x.com", ""),
        Err(ValidationError::MissingField(FormField::Message))
    );
    assert_eq!(check("Ann", "ax.com", "Hi"), Err(ValidationError::InvalidEmail));
    assert_eq!(check("Ann", "@x.com", "Hi"), Err(ValidationError::InvalidEmail));
    assert_eq!(check("Ann", "a@", "Hi"), Err(ValidationError::InvalidEmail));
    assert_eq!(check("Ann", "a@b@c", "Hi"), Err(ValidationError::InvalidEmail));
    assert_eq!(check("Ann", "a b@x.com", "Hi"), Err(ValidationError::InvalidEmail));
}

#[tokio::test]
async fn dropped_submission_releases_the_form() {
    let mut form = filled_form();

    let outcome =
        tokio::time::timeout(Duration::from_millis(20), form.submit(&StalledRelay)).await;

    assert!(outcome.is_err(), "stalled relay should never settle");
    assert!(!form.is_submitting());
    assert!(form.toasts().is_empty());
    assert!(!form.draft().is_empty());
}

#[test]
fn take_toasts_drains_the_log() {
    let mut form = filled_form();
    form.begin_submission().expect("accepted");
    form.settle(Ok(RelayReceipt(serde_json::json!({ "status": "ok" }))));

    assert_eq!(form.take_toasts(), vec![Toast::message_sent()]);
    assert!(form.toasts().is_empty());
}
