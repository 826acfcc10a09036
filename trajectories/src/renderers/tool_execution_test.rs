use serde_json::json;

use super::*;
use crate::render_card;

fn tool_record(tool: &str) -> Trajectory {
    Trajectory {
        id: 7,
        record_type: "tool_execution".to_owned(),
        tool_name: Some(tool.to_owned()),
        ..Trajectory::default()
    }
}

// =============================================================
// Titles
// =============================================================

#[test]
fn generic_titles_strip_tool_word() {
    let card = render_card(&tool_record("list_directory_tool"), &Clock::utc());
    assert_eq!(card.title, "List Directory");
    assert_eq!(card.icon, CardIcon::Tool);
    assert_eq!(card.expansion, Expansion::Collapsed);
}

#[test]
fn expert_title_depends_on_response() {
    let mut t = tool_record("ask_expert");
    assert_eq!(render_card(&t, &Clock::utc()).title, "Ask Expert");
    t.step_data = Some(json!({ "response_content": "Use a mutex." }));
    assert_eq!(render_card(&t, &Clock::utc()).title, "Expert Response");
}

// =============================================================
// Shell
// =============================================================

#[test]
fn shell_output_renders_verbatim_and_is_copied() {
    let mut t = tool_record("run_shell_command");
    t.tool_parameters = Some(json!({ "command": "make" }));
    t.tool_result = Some(json!({ "output": "done" }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.copy_text.as_deref(), Some("done"));
    assert_eq!(
        card.body,
        vec![
            Section::Parameters(vec![("command".to_owned(), "make".to_owned())]),
            Section::Output("done".to_owned()),
        ]
    );
}

#[test]
fn shell_without_output_copies_command() {
    let mut t = tool_record("run_shell_command");
    t.tool_parameters = Some(json!({ "command": "ls -la" }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.copy_text.as_deref(), Some("ls -la"));
    assert!(!card.body.iter().any(Section::is_success_result));
}

// =============================================================
// Results and copy text
// =============================================================

#[test]
fn object_result_copies_pretty_json_with_heading() {
    let mut t = tool_record("list_directory");
    t.tool_parameters = Some(json!({ "path": "src" }));
    t.tool_result = Some(json!({ "entries": ["lib.rs"] }));
    let card = render_card(&t, &Clock::utc());
    let pretty = "{\n  \"entries\": [\n    \"lib.rs\"\n  ]\n}";
    assert_eq!(
        card.copy_text.as_deref(),
        Some(format!("# List Directory\n\n{pretty}").as_str())
    );
    assert!(card.body.contains(&Section::Result(pretty.to_owned())));
}

#[test]
fn empty_string_result_still_renders() {
    let mut t = tool_record("noop");
    t.tool_result = Some(json!(""));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.body, vec![Section::Result(String::new())]);
    assert_eq!(card.copy_text, None);
}

#[test]
fn empty_result_falls_back_to_parameters_for_copy() {
    let mut t = tool_record("fetch_page");
    t.tool_parameters = Some(json!({ "url": "https://example.com" }));
    t.tool_result = Some(json!({}));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(
        card.copy_text.as_deref(),
        Some("# Fetch Page\n\n{\n  \"url\": \"https://example.com\"\n}")
    );
}

#[test]
fn nothing_to_copy_hides_control() {
    let card = render_card(&tool_record("ping"), &Clock::utc());
    assert_eq!(card.copy_text, None);
    assert!(card.body.is_empty());
}

#[test]
fn search_copies_query_without_heading() {
    let mut t = tool_record("web_search_tavily");
    t.tool_parameters = Some(json!({ "query": "rust leptos" }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.copy_text.as_deref(), Some("rust leptos"));
}

#[test]
fn summary_comes_from_display() {
    let mut t = tool_record("fuzzy_find");
    t.step_data = Some(json!({ "display": "Searching for main.rs" }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.summary.as_deref(), Some("Searching for main.rs"));
}

// =============================================================
// Expert
// =============================================================

#[test]
fn expert_response_replaces_question_block() {
    let mut t = tool_record("ask_expert");
    t.tool_parameters = Some(json!({ "question": "Lock or channel?" }));
    t.step_data = Some(json!({ "response_content": "Use a channel." }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(
        card.body,
        vec![Section::Markdown {
            heading: Some("Expert Response:".to_owned()),
            source: "Use a channel.".to_owned()
        }]
    );
    assert_eq!(
        card.copy_text.as_deref(),
        Some("# Parameters:\n\nLock or channel?\n\n---\n\n# Expert Response:\n\nUse a channel.")
    );
}

#[test]
fn expert_question_shows_when_unanswered() {
    let mut t = tool_record("ask_expert");
    t.tool_parameters = Some(json!({ "question": "Lock or channel?" }));
    let card = render_card(&t, &Clock::utc());
    assert_eq!(
        card.body,
        vec![Section::Markdown {
            heading: Some("Parameters:".to_owned()),
            source: "Lock or channel?".to_owned()
        }]
    );
}

// =============================================================
// Errors
// =============================================================

#[test]
fn error_hides_result_and_copies_message() {
    let mut t = tool_record("run_shell_command");
    t.is_error = true;
    t.error_message = Some("exit status 1".to_owned());
    t.error_type = Some("CommandError".to_owned());
    t.tool_parameters = Some(json!({ "command": "make" }));
    t.tool_result = Some(json!({ "output": "partial" }));
    t.current_cost = Some(0.001);
    let card = render_card(&t, &Clock::utc());

    assert_eq!(card.copy_text.as_deref(), Some("exit status 1"));
    assert!(!card.sections().any(Section::is_success_result));
    assert_eq!(
        card.error_block().map(crate::ErrorBlock::text).as_deref(),
        Some("exit status 1 (CommandError)")
    );
    assert!(matches!(card.body.first(), Some(Section::Parameters(_))));
    assert_eq!(
        card.usage().and_then(|u| u.cost.as_deref()),
        Some("Cost: $0.001000")
    );
}

#[test]
fn error_record_type_with_tool_renders_tool_card() {
    let mut t = tool_record("list_directory");
    t.record_type = "error".to_owned();
    t.is_error = true;
    t.error_message = Some("no such dir".to_owned());
    let card = render_card(&t, &Clock::utc());
    assert_eq!(card.icon, CardIcon::Tool);
    assert_eq!(card.copy_text.as_deref(), Some("# List Directory\n\nno such dir"));
}
