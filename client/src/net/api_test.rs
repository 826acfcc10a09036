use super::*;

#[test]
fn trajectories_endpoint_adds_session_filter() {
    assert_eq!(trajectories_endpoint(None), "/api/trajectories");
    assert_eq!(trajectories_endpoint(Some(3)), "/api/trajectories?session_id=3");
}

#[test]
fn fetch_failed_message_includes_status() {
    assert_eq!(fetch_failed_message(503), "trajectory request failed: 503");
}
