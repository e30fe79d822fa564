use gloo_net::http::Request;
use thiserror::Error;

use super::form::Submission;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode submission: {0}")]
    Encode(String),
}

/// Delivers a contact submission somewhere that will answer accepted/rejected.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, submission: &Submission) -> Result<(), SubmissionError>;
}

/// Hosted form endpoint. Any 2xx response counts as accepted.
#[derive(Clone, PartialEq)]
pub struct FormspreeTransport {
    endpoint: String,
}

impl FormspreeTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Transport for FormspreeTransport {
    async fn send(&self, submission: &Submission) -> Result<(), SubmissionError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: response.status(),
            })
        }
    }
}
