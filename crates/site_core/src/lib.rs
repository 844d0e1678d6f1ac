use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::SubmissionError,
    protocol::{ContactSubmission, RelayReceipt},
};
use tracing::debug;
use url::Url;

pub mod bootstrap;
pub mod config;
pub mod contact_form;
pub mod effects;
pub mod navigation;
pub mod preloader;

pub use bootstrap::{BootstrapController, CompletionCallback, PageView, StyleRoot};
pub use config::{load_settings, SiteSettings};
pub use contact_form::ContactForm;

/// Outbound seam for contact submissions. One call per accepted submit.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission)
        -> Result<RelayReceipt, SubmissionError>;
}

/// Posts submissions as JSON to a form-relay endpoint.
pub struct HttpContactRelay {
    http: Client,
    endpoint: Url,
}

impl HttpContactRelay {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &SiteSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.submit_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("failed to build contact relay http client")?;
        Ok(Self {
            http,
            endpoint: settings.form_endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactRelay for HttpContactRelay {
    async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<RelayReceipt, SubmissionError> {
        debug!(endpoint = %self.endpoint, "posting contact submission");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
            });
        }

        response
            .json::<RelayReceipt>()
            .await
            .map_err(|err| SubmissionError::MalformedResponse(err.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
