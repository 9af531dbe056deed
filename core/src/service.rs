//! Road status retrieval: one request, one classification, one report.
//!
//! # Design
//! `RoadStatusService` pairs the stateless `RoadStatusClient` with a
//! `Transport`, both passed in at construction. `fetch_statuses` propagates
//! every failure; `report_statuses` is the single boundary that turns any
//! failure into its message line and a `ReportOutcome`. Nothing is retried.

use std::io::Write;

use tracing::{error, info};

use crate::client::RoadStatusClient;
use crate::config::ApiConfig;
use crate::error::RoadStatusError;
use crate::http::Transport;
use crate::report::{format_road_status, ReportOutcome};
use crate::types::RoadStatus;

pub struct RoadStatusService<T> {
    client: RoadStatusClient,
    transport: T,
}

impl<T: Transport> RoadStatusService<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            client: RoadStatusClient::new(config),
            transport,
        }
    }

    /// Fetch the statuses of `road_ids` in the order the API returns them.
    pub fn fetch_statuses(&self, road_ids: &str) -> Result<Vec<RoadStatus>, RoadStatusError> {
        let request = self.client.build_road_status(road_ids);
        let query: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let response = self.transport.get(&request.url, &query)?;
        self.client.parse_road_status(road_ids, response)
    }

    /// Write a summary of each road to `out`, or the failure message if the
    /// lookup fails. Never returns an error.
    pub fn report_statuses<W: Write>(&self, road_ids: &str, out: &mut W) -> ReportOutcome {
        let roads = match self.fetch_statuses(road_ids) {
            Ok(roads) => roads,
            Err(e) => {
                if let Err(io) = writeln!(out, "{e}") {
                    error!(error = %io, "failed to write error message");
                }
                return ReportOutcome::Failure;
            }
        };

        info!(road_ids, count = roads.len(), "reporting road statuses");
        for road in &roads {
            if let Err(io) = writeln!(out, "{}", format_road_status(road)) {
                error!(error = %io, "failed to write road status");
                return ReportOutcome::Failure;
            }
        }
        ReportOutcome::Success
    }
}
