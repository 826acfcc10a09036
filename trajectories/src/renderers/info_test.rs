use serde_json::json;

use super::*;
use crate::render_card;

#[test]
fn string_message_is_summary_body_and_copy() {
    let t = Trajectory {
        record_type: "stage_transition".to_owned(),
        step_data: Some(json!({ "message": "Entering implementation" })),
        ..Trajectory::default()
    };
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.title, "Stage Transition");
    assert_eq!(card.icon, CardIcon::Info);
    assert_eq!(card.summary.as_deref(), Some("Entering implementation"));
    assert_eq!(card.copy_text.as_deref(), Some("Entering implementation"));
    assert_eq!(card.body, vec![Section::Text("Entering implementation".to_owned())]);
}

#[test]
fn structured_message_copies_pretty_json() {
    let t = Trajectory {
        record_type: "model_usage".to_owned(),
        step_data: Some(json!({ "title": "Usage", "message": { "calls": 3 } })),
        ..Trajectory::default()
    };
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.title, "Usage");
    assert_eq!(card.summary, None);
    assert_eq!(card.copy_text.as_deref(), Some("{\n  \"calls\": 3\n}"));
    assert_eq!(card.body, vec![Section::Json("{\n  \"calls\": 3\n}".to_owned())]);
}

#[test]
fn error_record_without_tool_uses_warning_icon() {
    let t = Trajectory {
        record_type: "error".to_owned(),
        is_error: true,
        error_message: Some("Quota exceeded".to_owned()),
        error_type: Some("RateLimit".to_owned()),
        ..Trajectory::default()
    };
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.title, "Error");
    assert_eq!(card.icon, CardIcon::Error);
    assert_eq!(card.copy_text, None);
    assert_eq!(
        card.error_block().map(crate::ErrorBlock::text).as_deref(),
        Some("Quota exceeded (RateLimit)")
    );
}

#[test]
fn empty_info_has_no_copy_and_no_body() {
    let card = render_card(&Trajectory::default(), &Clock::utc());
    assert_eq!(card.title, "Information");
    assert_eq!(card.copy_text, None);
    assert!(card.body.is_empty());
}
