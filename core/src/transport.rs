//! Blocking `Transport` backed by `ureq`.

use tracing::debug;

use crate::error::TransportError;
use crate::http::{append_query, HttpResponse, Transport};

/// Executes GETs with a single `ureq::Agent` for the life of the value.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
/// back as data for the client to classify. No timeout is configured beyond
/// ureq's defaults.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, target_url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let url = append_query(target_url, query)?;
        debug!(url = %target_url, params = query.len(), "sending GET");

        let mut response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| TransportError::new(format!("GET {target_url} failed"), e))?;

        let status = response.status();
        // Raw bytes, uncapped: decoding belongs to the client, after the
        // status has been classified.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| TransportError::new(format!("reading body of GET {target_url} failed"), e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            // Canonical phrase only; codes `http` has no name for (e.g. 599)
            // get an empty reason.
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
