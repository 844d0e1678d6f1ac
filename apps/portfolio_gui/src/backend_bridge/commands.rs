//! Backend commands queued from UI to backend worker.

use shared::protocol::ContactSubmission;

#[derive(Debug)]
pub enum BackendCommand {
    SubmitContact { submission: ContactSubmission },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitContact { .. } => "submit_contact",
        }
    }
}
