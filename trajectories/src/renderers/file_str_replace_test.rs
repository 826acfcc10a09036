use serde_json::json;

use super::*;
use crate::render_card;

fn replace_record(step_data: serde_json::Value) -> Trajectory {
    Trajectory {
        record_type: "file_str_replace".to_owned(),
        step_data: Some(step_data),
        ..Trajectory::default()
    }
}

#[test]
fn long_strings_are_previewed_but_title_copy_is_full() {
    let old = "o".repeat(75);
    let t = replace_record(json!({
        "filepath": "src/lib.rs",
        "old_str": old,
        "new_str": "short",
        "count": 2,
        "diff": "-a\n+b"
    }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.title, "Replaced string in src/lib.rs");
    assert_eq!(card.copy_text.as_deref(), Some("Replaced string in src/lib.rs"));

    let Section::Fields(fields) = &card.header[0] else {
        panic!("expected fields");
    };
    assert_eq!(fields[1].value, format!("{}...", "o".repeat(47)));
    assert_eq!(fields[2].value, "short");
    assert_eq!(card.header[1], Section::Badge("2 replacement(s)".to_owned()));
    assert_eq!(card.header[2], Section::Diff("-a\n+b".to_owned()));
}

#[test]
fn defaults_hide_diff_and_count_zero() {
    let card = render_card(&replace_record(json!({})), &Clock::utc());
    assert_eq!(card.title, "Replaced string in N/A");
    assert_eq!(card.header.len(), 2);
    assert_eq!(card.header[1], Section::Badge("0 replacement(s)".to_owned()));
}

#[test]
fn display_title_overrides_generated_title() {
    let mut t = replace_record(json!({ "filepath": "a.rs" }));
    t.display_title = Some("Renamed helper".to_owned());
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.title, "Renamed helper");
    assert_eq!(card.copy_text.as_deref(), Some("Renamed helper"));
}
