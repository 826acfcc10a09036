//! Deterministic demonstration records.
//!
//! Timestamps are relative to a caller-supplied `now` so tests can pin them.
//! Sessions 1-3 carry status, stage and quota-error records; session 4 holds
//! one record for every card kind.

use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::model::Trajectory;

const QUOTA_ERROR: &str = "Encountered ResourceExhausted: 429 Gemini 2.5 Pro Preview doesn't have a free quota tier. \
Please use Gemini 2.5 Pro Experimental (models/gemini-2.5-pro-exp-03-25) instead. For more information on this error, \
head to: https://ai.google.dev/gemini-api/docs/rate-limits. [violations {\n  \
quota_metric: \"generativelanguage.googleapis.com/generate_content_free_tier_input_token_count\"\n  \
quota_id: \"GenerateContentInputTokensPerModelPerDay-FreeTier\"\n}\n, retry_delay {\n  seconds: 41\n}\n\
]. Retrying in 1s... (Attempt 1/20)";

fn minutes_ago(now: OffsetDateTime, minutes: i64) -> Option<String> {
    (now - Duration::minutes(minutes)).format(&Rfc3339).ok()
}

fn record(id: i64, session: i64, now: OffsetDateTime, age: i64, record_type: &str) -> Trajectory {
    Trajectory {
        id,
        session_id: Some(session),
        created: minutes_ago(now, age),
        updated: minutes_ago(now, (age - 5).max(0)),
        record_type: record_type.to_owned(),
        tool_name: Some(String::new()),
        ..Trajectory::default()
    }
}

fn tool(id: i64, now: OffsetDateTime, age: i64, tool_name: &str) -> Trajectory {
    Trajectory {
        tool_name: Some(tool_name.to_owned()),
        ..record(id, 4, now, age, "tool_execution")
    }
}

/// Demonstration records covering every renderer.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_trajectories(now: OffsetDateTime) -> Vec<Trajectory> {
    vec![
        record(1, 1, now, 30, "project_status"),
        record(2, 1, now, 25, "project_status"),
        record(3, 1, now, 20, "stage_transition"),
        Trajectory {
            is_error: true,
            error_message: Some(QUOTA_ERROR.to_owned()),
            ..record(4, 2, now, 15, "error")
        },
        record(5, 3, now, 10, "project_status"),
        record(6, 3, now, 5, "stage_transition"),
        record(7, 3, now, 2, "stage_transition"),
        record(8, 3, now, 0, "project_status"),
        Trajectory {
            step_data: Some(json!({ "query": "Add a dark mode toggle to the settings page." })),
            ..record(9, 4, now, 60, "user_query")
        },
        Trajectory {
            tool_parameters: Some(json!({ "files": ["src/settings.rs", "src/theme.rs"] })),
            step_data: Some(json!({ "display": "Marked 2 related files" })),
            ..tool(10, now, 58, "emit_related_files")
        },
        Trajectory {
            step_data: Some(json!({ "fact": "Themes are stored in `settings.theme` as a **string**." })),
            ..tool(11, now, 57, "emit_key_facts")
        },
        Trajectory {
            tool_parameters: Some(json!({ "filepath": "src/theme.rs" })),
            step_data: Some(json!({ "filepath": "src/theme.rs", "line_count": 42, "total_bytes": 1337 })),
            ..tool(12, now, 55, "read_file_tool")
        },
        Trajectory {
            tool_parameters: Some(json!({ "question": "Should the toggle persist per device or per account?" })),
            step_data: Some(json!({
                "response_content": "Persist **per account**:\n\n```rust\nsettings.theme = Theme::Dark;\n```"
            })),
            current_cost: Some(0.012_5),
            input_tokens: Some(812),
            output_tokens: Some(164),
            ..tool(13, now, 52, "ask_expert")
        },
        Trajectory {
            tool_parameters: Some(json!({ "query": "css prefers-color-scheme" })),
            tool_result: Some(json!({ "results": [{ "title": "prefers-color-scheme - MDN" }] })),
            step_data: Some(json!({ "display": "Searching the web" })),
            ..tool(14, now, 50, "web_search_tavily")
        },
        Trajectory {
            step_data: Some(json!({
                "filepath": "src/settings.rs",
                "old_str": "pub struct Settings { pub language: String }",
                "new_str": "pub struct Settings { pub language: String, pub theme: Theme, pub high_contrast: bool }",
                "count": 1,
                "diff": "-pub struct Settings { pub language: String }\n+pub struct Settings { pub language: String, pub theme: Theme, pub high_contrast: bool }"
            })),
            ..tool(15, now, 47, "file_str_replace")
        },
        Trajectory {
            step_data: Some(json!({ "filepath": "src/theme.rs", "bytes_written": 2048 })),
            ..tool(16, now, 45, "put_complete_file_contents")
        },
        Trajectory {
            tool_parameters: Some(json!({ "command": "cargo test -p settings" })),
            tool_result: Some(json!({ "output": "test result: ok. 12 passed; 0 failed", "return_code": 0 })),
            step_data: Some(json!({ "display": "cargo test -p settings" })),
            current_cost: Some(0.000_84),
            ..tool(17, now, 42, "run_shell_command")
        },
        Trajectory {
            tool_parameters: Some(json!({ "command": "cargo clippy" })),
            is_error: true,
            error_message: Some("Command exited with status 101".to_owned()),
            error_type: Some("ShellError".to_owned()),
            error_details: Some(json!({ "return_code": 101 })),
            ..tool(18, now, 40, "run_shell_command")
        },
        Trajectory {
            tool_parameters: Some(json!({ "snippet": "fn toggle_theme()", "filepath": "src/theme.rs" })),
            tool_result: Some(json!({ "snippet_id": 3 })),
            step_data: Some(json!({ "display": "Stored toggle_theme snippet" })),
            ..tool(19, now, 38, "emit_key_snippet")
        },
        Trajectory {
            tool_parameters: Some(json!({ "path": "src", "max_depth": 2 })),
            tool_result: Some(json!(["settings.rs", "theme.rs", "main.rs"])),
            ..tool(20, now, 36, "list_directory_tool")
        },
        Trajectory {
            step_data: Some(json!({ "title": "Model Usage", "message": { "calls": 9, "cost": 0.031 } })),
            current_cost: Some(0.031),
            input_tokens: Some(5120),
            output_tokens: Some(940),
            ..record(21, 4, now, 34, "model_usage")
        },
        Trajectory {
            step_data: Some(json!({ "message": "Dark mode toggle implemented and tested." })),
            ..record(22, 4, now, 32, "plan_completed")
        },
    ]
}

#[cfg(test)]
#[path = "samples_test.rs"]
mod tests;
