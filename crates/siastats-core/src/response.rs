//! Query result variant returned by every client call.
//!
//! A non-200 HTTP status is a recoverable outcome, not an error: it is
//! reported as [`ApiResponse::Failure`] with the status code attached, so a
//! legitimate JSON `false` payload can never be mistaken for a failed query.
//! Transport faults and undecodable 200 bodies are the [`crate::Error`]
//! cases instead.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Outcome of a single endpoint query.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// HTTP 200; the decoded JSON body, structure preserved as returned.
    Success(Value),
    /// Any other HTTP status.
    Failure { status: u16 },
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The HTTP status of a failed query, `None` on success.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure { status } => Some(*status),
        }
    }

    /// Borrow the JSON body of a successful query.
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Take ownership of the JSON body of a successful query.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure { .. } => None,
        }
    }

    /// Deserialize a successful body into a known shape.
    ///
    /// The client never validates response shapes itself; this is a
    /// convenience for callers that do know the documented structure of an
    /// endpoint. A failed query deserializes to `Ok(None)`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        match self {
            ApiResponse::Success(value) => serde_json::from_value(value).map(Some),
            ApiResponse::Failure { .. } => Ok(None),
        }
    }
}
