use serde::{Deserialize, Serialize};

use crate::domain::ContactFormDraft;

/// Body posted to the form relay: exactly `name`, `email` and `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFormDraft> for ContactSubmission {
    fn from(draft: &ContactFormDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
        }
    }
}

/// Whatever JSON the relay answered with. The shape is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelayReceipt(pub serde_json::Value);

impl RelayReceipt {
    pub fn status_field(&self) -> Option<&str> {
        self.0.get("status").and_then(serde_json::Value::as_str)
    }
}
