use std::collections::HashSet;

use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("/developer/info"), "https://api.developer-portfolio.dev/developer/info");
    assert_eq!(
        find_endpoint("resume").map(Endpoint::url).as_deref(),
        Some("https://api.developer-portfolio.dev/developer/resume")
    );
}

#[test]
fn endpoint_ids_and_paths_are_unique() {
    let ids = ENDPOINTS.iter().map(|e| e.id).collect::<HashSet<_>>();
    let paths = ENDPOINTS.iter().map(|e| e.path).collect::<HashSet<_>>();
    assert_eq!(ids.len(), ENDPOINTS.len());
    assert_eq!(paths.len(), ENDPOINTS.len());
}

#[test]
fn every_body_is_valid_pretty_json() {
    for endpoint in ENDPOINTS {
        let body = endpoint.response_body().unwrap();
        assert!(body.starts_with("{\n  \""), "{} body is not pretty-printed", endpoint.id);
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(parsed.is_object(), "{} body is not a JSON object", endpoint.id);
    }
}

#[test]
fn info_body_carries_profile_fields() {
    let body = find_endpoint("info").unwrap().response_body().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["name"], "Sunil Poudel");
    assert_eq!(parsed["timezone"], "GMT+5:45");
    assert_eq!(parsed["years_experience"], 1);
}

#[test]
fn current_position_serializes_null_end_date() {
    let body = find_endpoint("experience").unwrap().response_body().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(parsed["positions"][0]["end_date"].is_null());
    assert_eq!(parsed["positions"][0]["current"], true);
}

#[test]
fn every_typing_phrase_names_a_catalogued_endpoint() {
    let lines = ENDPOINTS.iter().map(Endpoint::request_line).collect::<Vec<_>>();
    for phrase in TYPING_PHRASES {
        assert!(lines.iter().any(|line| line == phrase), "{phrase} is not catalogued");
    }
    assert_eq!(typing_phrases().len(), TYPING_PHRASES.len());
}

#[test]
fn query_param_annotation_marks_optional() {
    let projects = find_endpoint("projects").unwrap();
    let names = projects.query_params.iter().map(|p| p.name).collect::<Vec<_>>();
    assert_eq!(names, ["limit", "category"]);
    assert_eq!(projects.query_params[0].annotation(), "(integer, optional)");

    let required = QueryParam { required: true, ..projects.query_params[1] };
    assert_eq!(required.annotation(), "(string)");
}

#[test]
fn find_endpoint_misses_unknown_ids() {
    assert!(find_endpoint("salary").is_none());
}
