//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::{SubmissionError, SubmitRejection};
use site_core::ContactForm;

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchFailure {
    QueueFull,
    Disconnected,
}

impl DispatchFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::QueueFull => "UI command queue is full; please retry",
            Self::Disconnected => {
                "Backend command processor disconnected (possible startup/runtime failure)"
            }
        }
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchFailure> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(DispatchFailure::QueueFull),
        Err(TrySendError::Disconnected(_)) => Err(DispatchFailure::Disconnected),
    }
}

/// Starts a submission and hands the payload to the backend worker. A command
/// that cannot be queued settles the form as failed right away so it never
/// stays `Pending`.
pub fn submit_contact_form(
    form: &mut ContactForm,
    cmd_tx: &Sender<BackendCommand>,
) -> Result<(), SubmitRejection> {
    let submission = form.begin_submission()?;
    if let Err(failure) =
        dispatch_backend_command(cmd_tx, BackendCommand::SubmitContact { submission })
    {
        form.settle(Err(SubmissionError::BackendUnavailable(
            failure.message().to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossbeam_channel::bounded;
    use shared::domain::{ContactFormDraft, SubmissionStatus};

    fn filled_form() -> ContactForm {
        ContactForm::with_draft(ContactFormDraft::new(
            "Ada",
            "ada@example.com",
            "Hello there",
        ))
    }

    #[test]
    fn queues_exactly_one_command_per_accepted_submit() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut form = filled_form();

        submit_contact_form(&mut form, &cmd_tx).expect("accepted");
        assert_eq!(form.status(), SubmissionStatus::Pending);
        assert_eq!(
            submit_contact_form(&mut form, &cmd_tx),
            Err(SubmitRejection::InFlight)
        );

        let queued: Vec<_> = cmd_rx.try_iter().collect();
        assert_eq!(queued.len(), 1);
        let BackendCommand::SubmitContact { submission } = &queued[0];
        assert_eq!(submission.email, "ada@example.com");
    }

    #[test]
    fn invalid_draft_queues_nothing() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut form = ContactForm::new();

        assert!(matches!(
            submit_contact_form(&mut form, &cmd_tx),
            Err(SubmitRejection::Invalid(_))
        ));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn full_queue_settles_as_failure() {
        let (cmd_tx, _cmd_rx) = bounded(0);
        let mut form = filled_form();

        submit_contact_form(&mut form, &cmd_tx).expect("accepted");

        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert!(form.toasts()[0].is_destructive());
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn disconnected_backend_settles_as_failure() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut form = filled_form();

        submit_contact_form(&mut form, &cmd_tx).expect("accepted");

        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert!(form.can_submit());
    }
}
