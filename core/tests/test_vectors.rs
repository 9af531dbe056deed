//! Verify request building, response classification and report rendering
//! against the JSON test vectors in `test-vectors/`.
//!
//! Each case lists the road input, the expected request, a simulated
//! response, and either the parsed roads or the expected error, plus the
//! exact report text and exit code. Parsed roads are compared as values so
//! field order in the vector file does not matter.

use std::cell::Cell;

use road_status_core::{
    append_query, ApiConfig, HttpResponse, RoadStatus, RoadStatusClient, RoadStatusError, RoadStatusService,
    Transport, TransportError,
};
use serde_json::Value;

fn vectors() -> Value {
    let raw = include_str!("../../test-vectors/road_status.json");
    serde_json::from_str(raw).unwrap()
}

fn config(vectors: &Value) -> ApiConfig {
    ApiConfig::new(
        vectors["base_url"].as_str().unwrap(),
        vectors["app_key"].as_str().unwrap(),
    )
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        reason: sim["reason"].as_str().unwrap().to_string(),
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    }
}

fn error_name(err: &RoadStatusError) -> &'static str {
    match err {
        RoadStatusError::Transport(_) => "Transport",
        RoadStatusError::InvalidRoadIdentifier { .. } => "InvalidRoadIdentifier",
        RoadStatusError::AuthOrRateLimit => "AuthOrRateLimit",
        RoadStatusError::UpstreamFailure { .. } => "UpstreamFailure",
        RoadStatusError::Deserialization(_) => "Deserialization",
    }
}

/// Replays one canned response and counts the calls.
struct Replay {
    response: HttpResponse,
    calls: Cell<usize>,
}

impl Transport for Replay {
    fn get(&self, _target_url: &str, _query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.response.clone())
    }
}

// ---------------------------------------------------------------------------
// Build + parse
// ---------------------------------------------------------------------------

#[test]
fn client_test_vectors() {
    let vectors = vectors();
    let base_url = vectors["base_url"].as_str().unwrap();
    let client = RoadStatusClient::new(&config(&vectors));

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let road_ids = case["road_ids"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = client.build_road_status(road_ids);
        assert_eq!(req.url, format!("{base_url}{}", expected_req["url"].as_str().unwrap()), "{name}: url");

        let expected_query: Vec<(String, String)> = expected_req["query"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| {
                let arr = pair.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.query, expected_query, "{name}: query");
        let pairs: Vec<(&str, &str)> = req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            append_query(&req.url, &pairs).unwrap(),
            format!("{base_url}{}", expected_req["full_url"].as_str().unwrap()),
            "{name}: full url"
        );

        // Verify parse
        let result = client.parse_road_status(road_ids, simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(error_name(&err), expected_error.as_str().unwrap(), "{name}: error kind");
        } else {
            let roads = result.unwrap();
            let expected: Vec<RoadStatus> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(roads, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[test]
fn report_test_vectors() {
    let vectors = vectors();
    let config = config(&vectors);

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let road_ids = case["road_ids"].as_str().unwrap();
        let transport = Replay {
            response: simulated_response(case),
            calls: Cell::new(0),
        };
        let service = RoadStatusService::new(&transport, &config);

        let mut out = Vec::new();
        let outcome = service.report_statuses(road_ids, &mut out);
        let out = String::from_utf8(out).unwrap();

        assert_eq!(transport.calls.get(), 1, "{name}: exactly one request");
        assert_eq!(
            u64::from(outcome.exit_code()),
            case["expected_exit_code"].as_u64().unwrap(),
            "{name}: exit code"
        );
        match case.get("expected_report") {
            Some(expected) => assert_eq!(out, expected.as_str().unwrap(), "{name}: report"),
            // Parser messages are not pinned; only the single-line shape is.
            None => {
                assert!(out.starts_with("Error: "), "{name}: report");
                assert_eq!(out.lines().count(), 1, "{name}: one line");
            }
        }
    }
}
