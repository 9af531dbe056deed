//! Domain DTOs for the road status API.
//!
//! # Design
//! `RoadStatus` mirrors one element of the `/Road/{ids}` response array.
//! Every field is optional because the upstream payload may omit any of
//! them or send `null`; absent values stay `None` rather than being
//! defaulted. Unknown fields such as `$type` are ignored.

use serde::Deserialize;

/// Current status of a single road as reported by the API.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoadStatus {
    /// Lowercase road code, e.g. `a2`.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub status_severity: Option<String>,
    #[serde(default)]
    pub status_severity_description: Option<String>,
    /// Bounding box as a serialized coordinate-pair string.
    #[serde(default)]
    pub bounds: Option<String>,
    /// Bounding polygon as a serialized coordinate string.
    #[serde(default)]
    pub envelope: Option<String>,
    #[serde(default)]
    pub status_aggregation_start_date: Option<String>,
    #[serde(default)]
    pub status_aggregation_end_date: Option<String>,
    /// Resource path relative to the API root, e.g. `/Road/a2`.
    #[serde(default)]
    pub url: Option<String>,
}
