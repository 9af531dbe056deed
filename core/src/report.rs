//! Console rendering of road statuses.

use crate::types::RoadStatus;

/// Result of a report run, translated into the process exit status by the
/// binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Success,
    Failure,
}

impl ReportOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            ReportOutcome::Success => 0,
            ReportOutcome::Failure => 1,
        }
    }
}

/// Render one road as a three-line summary, without the final newline.
/// Missing fields render as empty text.
pub fn format_road_status(road: &RoadStatus) -> String {
    format!(
        "The status of the {} is as follows:\n\tRoad Status is: {}\n\tRoad Status Description is: {}.",
        road.display_name.as_deref().unwrap_or_default(),
        road.status_severity.as_deref().unwrap_or_default(),
        road.status_severity_description.as_deref().unwrap_or_default(),
    )
}
