//! In-process stand-in for the TfL `/Road` endpoint.
//!
//! Serves a fixed catalog of roads. Unknown road ids answer 404, a missing
//! or wrong `appKey` answers 429 (as the real API does), and the reserved id
//! `FAIL` answers 500.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Road id that makes the server answer 500.
pub const FAILING_ROAD_ID: &str = "FAIL";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Road {
    #[serde(rename = "$type")]
    pub type_name: String,
    pub id: String,
    pub display_name: String,
    pub group: Option<String>,
    pub status_severity: String,
    pub status_severity_description: String,
    pub bounds: String,
    pub envelope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_aggregation_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_aggregation_end_date: Option<String>,
    pub url: String,
}

/// Error body in the shape the API uses for 4xx/5xx responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub exception_type: String,
    pub http_status_code: u16,
    pub http_status: String,
    pub relative_uri: String,
    pub message: String,
}

struct MockState {
    app_key: String,
    roads: Vec<Road>,
}

type Shared = Arc<MockState>;
type ApiResult = Result<Json<Vec<Road>>, (StatusCode, Json<ApiErrorBody>)>;

fn road(id: &str, severity: &str, description: &str, bounds: &str, envelope: &str) -> Road {
    Road {
        type_name: "Tfl.Api.Presentation.Entities.RoadCorridor, Tfl.Api.Presentation.Entities".to_string(),
        id: id.to_lowercase(),
        display_name: id.to_string(),
        group: None,
        status_severity: severity.to_string(),
        status_severity_description: description.to_string(),
        bounds: bounds.to_string(),
        envelope: envelope.to_string(),
        status_aggregation_start_date: None,
        status_aggregation_end_date: None,
        url: format!("/Road/{}", id.to_lowercase()),
    }
}

/// The roads served by the mock, in catalog order.
pub fn catalog() -> Vec<Road> {
    vec![
        road(
            "A1",
            "Good",
            "No Exceptional Delays",
            "[[-0.25616,51.5319],[-0.10234,51.6562]]",
            "[[-0.25616,51.5319],[-0.25616,51.6562],[-0.10234,51.6562],[-0.10234,51.5319],[-0.25616,51.5319]]",
        ),
        road(
            "A2",
            "Serious",
            "Serious Delays",
            "[[-0.0857,51.44091],[0.17118,51.49438]]",
            "[[-0.0857,51.44091],[-0.0857,51.49438],[0.17118,51.49438],[0.17118,51.44091],[-0.0857,51.44091]]",
        ),
        road(
            "A20",
            "Serious",
            "Serious Delays",
            "[[-0.11925,51.40825],[0.14918,51.48643]]",
            "[[-0.11925,51.40825],[-0.11925,51.48643],[0.14918,51.48643],[0.14918,51.40825],[-0.11925,51.40825]]",
        ),
    ]
}

pub fn app(app_key: &str) -> Router {
    let state: Shared = Arc::new(MockState {
        app_key: app_key.to_string(),
        roads: catalog(),
    });
    Router::new()
        .route("/Road", get(all_roads))
        .route("/Road/", get(all_roads))
        .route("/Road/{ids}", get(roads_by_id))
        .with_state(state)
}

pub async fn run(listener: TcpListener, app_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(app_key)).await
}

fn api_error(status: StatusCode, exception_type: &str, relative_uri: String, message: String) -> (StatusCode, Json<ApiErrorBody>) {
    let body = ApiErrorBody {
        exception_type: exception_type.to_string(),
        http_status_code: status.as_u16(),
        http_status: status.canonical_reason().unwrap_or_default().replace(' ', ""),
        relative_uri,
        message,
    };
    (status, Json(body))
}

fn check_key(state: &MockState, query: &HashMap<String, String>, relative_uri: &str) -> Result<(), (StatusCode, Json<ApiErrorBody>)> {
    match query.get("appKey") {
        Some(key) if *key == state.app_key => Ok(()),
        _ => Err(api_error(
            StatusCode::TOO_MANY_REQUESTS,
            "ApiKeyException",
            relative_uri.to_string(),
            "Invalid app_key provided.".to_string(),
        )),
    }
}

async fn all_roads(State(state): State<Shared>, Query(query): Query<HashMap<String, String>>) -> ApiResult {
    check_key(&state, &query, "/Road")?;
    Ok(Json(state.roads.clone()))
}

async fn roads_by_id(
    State(state): State<Shared>,
    Path(ids): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult {
    let relative_uri = format!("/Road/{ids}");
    check_key(&state, &query, &relative_uri)?;

    let mut found = Vec::new();
    for id in ids.split(',').map(str::trim) {
        if id.eq_ignore_ascii_case(FAILING_ROAD_ID) {
            return Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalServerErrorException",
                relative_uri,
                "An unexpected error occurred.".to_string(),
            ));
        }
        match state.roads.iter().find(|r| r.id.eq_ignore_ascii_case(id)) {
            Some(road) => found.push(road.clone()),
            None => {
                return Err(api_error(
                    StatusCode::NOT_FOUND,
                    "EntityNotFoundException",
                    relative_uri,
                    format!("The following road id is not recognised: {id}"),
                ))
            }
        }
    }
    Ok(Json(found))
}
