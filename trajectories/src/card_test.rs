use serde_json::json;

use super::*;

#[test]
fn expansion_toggle_leaves_static_alone() {
    assert_eq!(Expansion::Static.toggled(), Expansion::Static);
    assert_eq!(Expansion::Collapsed.toggled(), Expansion::Expanded);
    assert_eq!(Expansion::Expanded.toggled(), Expansion::Collapsed);
    assert!(!Expansion::Static.is_collapsible());
    assert!(Expansion::Expanded.is_expanded());
}

#[test]
fn error_block_defaults_message_and_appends_type_and_details() {
    let t = Trajectory {
        is_error: true,
        error_type: Some("Timeout".to_owned()),
        error_details: Some(json!({ "after_ms": 3000 })),
        ..Trajectory::default()
    };
    let block = ErrorBlock::from_trajectory(&t);
    assert_eq!(block.message, "Unknown error");
    assert_eq!(
        block.text(),
        "Unknown error (Timeout)\nDetails: {\n  \"after_ms\": 3000\n}"
    );
}

#[test]
fn error_block_shows_string_details_verbatim() {
    let t = Trajectory {
        is_error: true,
        error_message: Some("boom".to_owned()),
        error_details: Some(json!("stack trace")),
        ..Trajectory::default()
    };
    assert_eq!(ErrorBlock::from_trajectory(&t).text(), "boom\nDetails: stack trace");
}

#[test]
fn usage_footer_hides_cost_line_without_cost() {
    let tokens_only = Trajectory {
        input_tokens: Some(5),
        ..Trajectory::default()
    };
    let footer = UsageFooter::from_trajectory(&tokens_only).expect("footer");
    assert_eq!(footer.cost, None);
    assert_eq!(footer.tokens.as_deref(), Some("Tokens: 5 in / 0 out"));

    assert_eq!(UsageFooter::from_trajectory(&Trajectory::default()), None);
}

#[test]
fn usage_footer_formats_cost_to_six_decimals() {
    let t = Trajectory {
        current_cost: Some(0.5),
        ..Trajectory::default()
    };
    let footer = UsageFooter::from_trajectory(&t).expect("footer");
    assert_eq!(footer.cost.as_deref(), Some("Cost: $0.500000"));
    assert_eq!(footer.tokens, None);
}

#[test]
fn outcome_sections_order_error_before_usage() {
    let t = Trajectory {
        is_error: true,
        current_cost: Some(0.1),
        ..Trajectory::default()
    };
    let sections = outcome_sections(&t);
    assert!(matches!(sections.as_slice(), [Section::Error(_), Section::Usage(_)]));
}

#[test]
fn error_records_drop_success_blocks() {
    let t = Trajectory {
        is_error: true,
        ..Trajectory::default()
    };
    let mut sections = vec![
        Section::Parameters(vec![("a".to_owned(), "1".to_owned())]),
        Section::Result("ok".to_owned()),
        Section::Output("done".to_owned()),
    ];
    enforce_error_exclusivity(&t, &mut sections);
    assert_eq!(sections.len(), 1);
    assert!(matches!(sections[0], Section::Parameters(_)));
}
