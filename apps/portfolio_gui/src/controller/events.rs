//! Backend-to-UI events.

use shared::{error::SubmissionError, protocol::RelayReceipt};

#[derive(Debug)]
pub enum UiEvent {
    BackendReady,
    BackendStartupFailed(String),
    ContactSubmissionSettled(Result<RelayReceipt, SubmissionError>),
}
