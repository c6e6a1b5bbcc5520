//! Unified SDK error types.

use thiserror::Error;

use crate::http::VeroResponse;

/// Result alias used throughout the SDK.
pub type SdkResult<T> = Result<T, SdkError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// Lets `response.json::<T>()?` propagate inside functions returning
    /// `SdkResult`.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// The response attached to a remote rejection, if this error is one.
    pub fn response(&self) -> Option<&VeroResponse> {
        match self {
            SdkError::Http(HttpError::Rejected(response)) => Some(response),
            _ => None,
        }
    }

    /// Whether the call was refused before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::Validation(_))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection, TLS, timeout or body-decoding failure from the transport.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Rejected with status {}: {}", .0.status, .0.body)]
    Rejected(VeroResponse),
}

/// Malformed caller input, raised before any request is dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{what} must not be empty")]
    EmptyBatch { what: &'static str },

    #[error("every identity needs an id (missing at index {index})")]
    MissingId { index: usize },

    #[error("tags must be a string or an array of strings")]
    InvalidTags,
}

/// A batch in which at least one request failed.
///
/// `outcomes` holds one entry per input element, in input order, so the
/// successful siblings stay inspectable.
#[derive(Error, Debug)]
#[error("{} of {} batch requests failed", failure_count(.outcomes), .outcomes.len())]
pub struct BatchError {
    pub outcomes: Vec<SdkResult<VeroResponse>>,
}

impl BatchError {
    pub fn failure_count(&self) -> usize {
        failure_count(&self.outcomes)
    }

    /// Iterate `(index, error)` for every failed element.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &SdkError)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().err().map(|e| (i, e)))
    }

    /// Iterate `(index, response)` for every element that succeeded.
    pub fn successes(&self) -> impl Iterator<Item = (usize, &VeroResponse)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.as_ref().ok().map(|r| (i, r)))
    }
}

fn failure_count(outcomes: &[SdkResult<VeroResponse>]) -> usize {
    outcomes.iter().filter(|o| o.is_err()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> VeroResponse {
        VeroResponse {
            status,
            content_type: None,
            body: String::new(),
        }
    }

    #[test]
    fn test_response_accessor_only_for_rejections() {
        let rejected = SdkError::from(HttpError::Rejected(response(400)));
        assert_eq!(rejected.response().map(|r| r.status), Some(400));

        let invalid = SdkError::from(ValidationError::InvalidTags);
        assert!(invalid.response().is_none());
        assert!(invalid.is_validation());
    }

    #[test]
    fn test_batch_error_partitions_outcomes() {
        let err = BatchError {
            outcomes: vec![
                Ok(response(200)),
                Err(HttpError::Rejected(response(500)).into()),
                Ok(response(201)),
            ],
        };
        assert_eq!(err.failure_count(), 1);
        assert_eq!(err.failures().map(|(i, _)| i).collect::<Vec<_>>(), vec![1]);
        assert_eq!(err.successes().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(err.to_string(), "1 of 3 batch requests failed");
    }

    #[test]
    fn test_json_decode_failure_converts_with_question_mark() {
        fn decode(res: &VeroResponse) -> SdkResult<serde_json::Value> {
            Ok(res.json()?)
        }
        let mut res = response(200);
        res.body = "not json".into();
        assert!(matches!(decode(&res), Err(SdkError::Serde(_))));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingId { index: 2 }.to_string(),
            "every identity needs an id (missing at index 2)"
        );
        assert_eq!(
            ValidationError::EmptyBatch { what: "users" }.to_string(),
            "users must not be empty"
        );
    }
}
