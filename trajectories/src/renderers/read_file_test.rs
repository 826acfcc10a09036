use serde_json::json;

use super::*;
use crate::render_card;
use crate::card::Section;

#[test]
fn summary_and_copy_describe_the_read() {
    let t = Trajectory {
        record_type: "read_file".to_owned(),
        step_data: Some(json!({ "filepath": "a.py", "line_count": 10, "total_bytes": 200 })),
        ..Trajectory::default()
    };
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.summary.as_deref(), Some("Read 10 lines (200 bytes) from a.py"));
    assert_eq!(card.copy_text.as_deref(), Some("Read 10 lines (200 bytes) from a.py"));
    assert_eq!(card.expansion, Expansion::Static);
}

#[test]
fn missing_fields_use_placeholders() {
    let card = render(&Trajectory::default(), ReadFileStep::default(), &Clock::utc());
    assert_eq!(card.summary.as_deref(), Some("Read ? lines (? bytes) from Unknown file"));
}

#[test]
fn static_card_shows_error_in_header() {
    let t = Trajectory {
        record_type: "read_file".to_owned(),
        is_error: true,
        error_message: Some("permission denied".to_owned()),
        ..Trajectory::default()
    };
    let card = render_card(&t, &Clock::utc());
    assert!(matches!(card.header.as_slice(), [Section::Error(_)]));
    assert!(card.body.is_empty());
}
