//! Error types for the road status client.
//!
//! # Design
//! The upstream API's status codes map onto dedicated variants so the
//! reporting boundary can print each condition's message verbatim. The
//! `Display` text of every variant is the exact line shown to the user.
//! `TransportError` covers faults below HTTP and is never classified further.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors returned by `RoadStatusClient::parse_road_status` and
/// `RoadStatusService::fetch_statuses`.
#[derive(Debug, Error)]
pub enum RoadStatusError {
    /// The request never produced an HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API returned 404 for the requested road list.
    #[error(
        "Error: '{road_ids}' is not a valid road or list of roads. Please check the full list of supported road identifiers and try again."
    )]
    InvalidRoadIdentifier { road_ids: String },

    /// The API returned 429. Upstream uses this code for both rate limiting
    /// and an invalid or expired app key.
    #[error(
        "Error: Too many API requests and/or App Key supplied is invalid and may have expired. Please check the status of your App Key on the TfL API Developer Portal."
    )]
    AuthOrRateLimit,

    /// Any other non-2xx status.
    #[error("Error: API request failed. Reason: {reason}. ErrorCode: {status}.")]
    UpstreamFailure { status: u16, reason: String },

    /// A 2xx body that is not a JSON array of road statuses.
    #[error("Error: API response could not be read. Reason: {0}.")]
    Deserialization(#[from] serde_json::Error),
}

/// A network-level failure raised by a `Transport`.
#[derive(Debug, Error)]
#[error("Error: API request could not be completed. Reason: {message}: {source}.")]
pub struct TransportError {
    message: String,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            message: message.into(),
            source: source.into(),
        }
    }
}
