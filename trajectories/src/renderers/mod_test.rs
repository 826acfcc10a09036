use serde_json::json;

use super::*;
use crate::samples::sample_trajectories;

fn sample_now() -> time::OffsetDateTime {
    time::macros::datetime!(2025-04-01 12:00:00 UTC)
}

#[test]
fn every_error_card_has_error_block_and_no_success_block() {
    for mut t in sample_trajectories(sample_now()) {
        t.is_error = true;
        t.tool_result = Some(json!({ "output": "ok", "value": 1 }));
        let card = render_card(&t, &Clock::utc());
        assert!(card.error_block().is_some(), "record {}", t.id);
        assert!(!card.sections().any(Section::is_success_result), "record {}", t.id);
    }
}

#[test]
fn cost_line_only_when_cost_defined() {
    for t in sample_trajectories(sample_now()) {
        let card = render_card(&t, &Clock::utc());
        let cost = card.usage().and_then(|usage| usage.cost.clone());
        match t.current_cost {
            Some(value) => assert_eq!(cost, Some(format!("Cost: ${value:.6}"))),
            None => assert_eq!(cost, None),
        }
    }
}

#[test]
fn toggle_state_matches_card_kind() {
    let expanded = render_card(
        &Trajectory {
            record_type: "user_query".to_owned(),
            ..Trajectory::default()
        },
        &Clock::utc(),
    );
    assert_eq!(expanded.expansion, Expansion::Expanded);

    let fixed = render_card(
        &Trajectory {
            record_type: "file_write".to_owned(),
            ..Trajectory::default()
        },
        &Clock::utc(),
    );
    assert_eq!(fixed.expansion.toggled(), Expansion::Static);
}

#[test]
fn card_time_uses_clock_offset() {
    let t = Trajectory {
        created: Some("2025-04-01T08:45:00Z".to_owned()),
        ..Trajectory::default()
    };
    let card = render_card(&t, &Clock::from_minutes_east(-60));
    assert_eq!(card.time, "07:45");
    assert_eq!(card.icon, CardIcon::Info);
}

#[test]
fn parameters_section_skips_empty_and_non_objects() {
    assert_eq!(parameters_section(None), None);
    assert_eq!(parameters_section(Some(&json!({}))), None);
    assert_eq!(parameters_section(Some(&json!([1]))), None);
    assert_eq!(
        parameters_section(Some(&json!({ "a": null }))),
        Some(Section::Parameters(vec![("a".to_owned(), "null".to_owned())]))
    );
}
