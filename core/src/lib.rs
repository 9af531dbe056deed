//! Synchronous client core for the TfL road status API.
//!
//! # Overview
//! Looks up the current status of one or more major roads and renders a
//! short summary per road. Requests are built and responses classified as
//! plain data (host-does-IO pattern); a `Transport` performs the single GET
//! in between.
//!
//! # Design
//! - `RoadStatusClient` is stateless: base URL and app key only. It splits
//!   the lookup into `build_road_status` and `parse_road_status`.
//! - `RoadStatusService` wires a client to a `Transport` through its
//!   constructor and owns the reporting boundary.
//! - `UreqTransport` is the production transport; tests substitute their own.
//! - HTTP failures map onto `RoadStatusError` variants whose `Display` text
//!   is the user-facing message.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod report;
pub mod service;
pub mod transport;
pub mod types;

pub use client::RoadStatusClient;
pub use config::{ApiConfig, APP_KEY_PARAM, DEFAULT_BASE_URL};
pub use error::{RoadStatusError, TransportError};
pub use http::{append_query, HttpRequest, HttpResponse, Transport};
pub use report::{format_road_status, ReportOutcome};
pub use service::RoadStatusService;
pub use transport::UreqTransport;
pub use types::RoadStatus;
