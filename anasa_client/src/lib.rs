//! Client side of the relay endpoints: form drafts, submission and user
//! feedback.

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{
    feedback::{Feedback, Notification},
    form::Form,
    http::HttpClient,
};

pub mod celebration;
pub mod feedback;
pub mod form;
pub mod http;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    /// The submission failed, the draft has been left untouched.
    Failure { message: String },
}

/// Submits form drafts to the relay endpoints of a site.
#[derive(Debug)]
pub struct SubmissionClient<F> {
    http: HttpClient,
    base_url: Url,
    feedback: F,
    state: SubmissionState,
}

impl<F: Feedback> SubmissionClient<F> {
    pub fn new(base_url: Url, feedback: F) -> anyhow::Result<Self> {
        Ok(Self {
            http: HttpClient::new().context("Failed to build http client")?,
            base_url,
            feedback,
            state: SubmissionState::Idle,
        })
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Validate the draft and send it to the relay endpoint of its form.
    ///
    /// The draft is reset on success and left untouched otherwise. Nothing is
    /// sent if the draft is invalid.
    #[tracing::instrument(skip_all, fields(endpoint = D::ENDPOINT))]
    pub async fn submit<D: Form>(&mut self, draft: &mut D) -> SubmissionOutcome {
        if let Err(message) = draft.validate() {
            debug!(reason = message, "draft rejected");
            return self.fail(message.into());
        }

        self.state = SubmissionState::Submitting;
        self.feedback.set_busy(true);

        let result = self.send(&*draft).await;

        self.state = SubmissionState::Idle;
        self.feedback.set_busy(false);

        match result {
            Ok(()) => {
                debug!("draft submitted");
                self.feedback
                    .notify(Notification::Success(D::SUCCESS_MESSAGE.into()));
                self.feedback.celebrate(D::celebration());
                draft.reset();
                SubmissionOutcome::Success
            }
            Err(err) => {
                warn!("submission failed: {err:#}");
                let message = match err {
                    SubmitError::Rejected {
                        message: Some(message),
                        ..
                    } => message,
                    _ => D::FALLBACK_ERROR.into(),
                };
                self.fail(message)
            }
        }
    }

    fn fail(&self, message: String) -> SubmissionOutcome {
        self.feedback.notify(Notification::Error(message.clone()));
        SubmissionOutcome::Failure { message }
    }

    async fn send<D: Form>(&self, draft: &D) -> Result<(), SubmitError> {
        let url = self
            .base_url
            .join(D::ENDPOINT)
            .context("Failed to build endpoint url")?;

        let response = self
            .http
            .post(url)
            .json(draft)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .json::<ApiMessage>()
            .await
            .context("Failed to deserialize response");

        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: body
                    .ok()
                    .and_then(|body| body.message)
                    .filter(|message| !message.is_empty()),
            });
        }

        body.map(|_| ()).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
enum SubmitError {
    #[error("The server responded with status {status}.")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
}
