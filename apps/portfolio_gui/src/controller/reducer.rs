//! Applies backend events to UI-owned state.

use site_core::ContactForm;

use crate::controller::events::UiEvent;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Starting,
    Ready,
    Failed(String),
}

impl BackendStatus {
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

pub fn apply_ui_event(form: &mut ContactForm, backend: &mut BackendStatus, event: UiEvent) {
    match event {
        UiEvent::BackendReady => {
            tracing::info!("backend worker ready");
            *backend = BackendStatus::Ready;
        }
        UiEvent::BackendStartupFailed(reason) => {
            tracing::error!("backend worker startup failure: {reason}");
            *backend = BackendStatus::Failed(reason);
        }
        UiEvent::ContactSubmissionSettled(outcome) => {
            form.settle(outcome);
        }
    }
}
