//! Stateless HTTP request builder and response parser for the Road API.
//!
//! # Design
//! `RoadStatusClient` holds only the base URL and the app key. The road
//! status lookup is split into `build_road_status`, which produces an
//! `HttpRequest`, and `parse_road_status`, which classifies an
//! `HttpResponse`. The transport round-trip happens in between, outside this
//! type, keeping request building and error mapping free of I/O.

use tracing::{debug, warn};

use crate::config::{ApiConfig, APP_KEY_PARAM};
use crate::error::RoadStatusError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::RoadStatus;

/// Synchronous, stateless client for the `/Road/{ids}` endpoint.
#[derive(Debug, Clone)]
pub struct RoadStatusClient {
    base_url: String,
    app_key: String,
}

impl RoadStatusClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_key: config.app_key.clone(),
        }
    }

    /// Build the GET for `road_ids`, a comma-separated list as typed by the
    /// user. An empty list asks for every road. The ids are not validated
    /// here; the API decides.
    pub fn build_road_status(&self, road_ids: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/{road_ids}", self.base_url),
            query: vec![(APP_KEY_PARAM.to_string(), self.app_key.clone())],
        }
    }

    pub fn parse_road_status(
        &self,
        road_ids: &str,
        response: HttpResponse,
    ) -> Result<Vec<RoadStatus>, RoadStatusError> {
        check_status(road_ids, &response)?;
        // Only a 2xx body is decoded; invalid UTF-8 fails here as bad JSON.
        let roads: Vec<RoadStatus> = serde_json::from_slice(&response.body).map_err(|e| {
            warn!(error = %e, "road status payload is not a JSON array of roads");
            RoadStatusError::Deserialization(e)
        })?;
        debug!(count = roads.len(), "parsed road statuses");
        Ok(roads)
    }
}

/// Map non-success status codes to the matching `RoadStatusError` variant.
fn check_status(road_ids: &str, response: &HttpResponse) -> Result<(), RoadStatusError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, reason = %response.reason, "road status request rejected");
    Err(match response.status {
        404 => RoadStatusError::InvalidRoadIdentifier {
            road_ids: road_ids.to_string(),
        },
        429 => RoadStatusError::AuthOrRateLimit,
        status => RoadStatusError::UpstreamFailure {
            status,
            reason: response.reason.clone(),
        },
    })
}
