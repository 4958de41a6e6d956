use passplot::geometry::limits::MAX_TRACK_POINTS;
use passplot::{parse_pass_payload, skyplot, SkyplotStyle};
use serde_json::{json, Value};

#[test]
fn track_cap_exceeded() {
    let pts: Vec<Value> = (0..MAX_TRACK_POINTS + 1).map(|_| json!({"az": 0.0, "el": 0.0})).collect();
    let err = parse_pass_payload(json!({ "points": pts })).unwrap_err();
    assert_eq!(err.code(), "caps_exceeded");
}

#[test]
fn no_pass_response_is_rejected_at_render() {
    let pass = parse_pass_payload(json!({"message": "No pass found within duration."})).unwrap();
    let err = skyplot::render(&pass.points, &SkyplotStyle::default()).unwrap_err();
    assert_eq!(err.code(), "invalid_input");
}

#[test]
fn malformed_track_record() {
    let err = parse_pass_payload(json!({"points": [{"az": "north", "el": 10.0}]})).unwrap_err();
    assert_eq!(err.code(), "json_parse");
}
