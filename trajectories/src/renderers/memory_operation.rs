//! Cards for the agent's memory tools: key facts, related files and the
//! snippet/note stores.

use super::{base, finish, parameters_section, with_heading};
use crate::card::{CardIcon, Expansion, Section, TrajectoryCard};
use crate::format::{Clock, capitalize_words};
use crate::model::Trajectory;
use crate::payload::{format_value, has_result};
use crate::steps::{MemoryKind, MemoryOp, ToolCall};

const KEY_FACT: &str = "Key Fact";
const RELATED_FILES: &str = "Emit Related Files";

#[must_use]
pub fn render(t: &Trajectory, op: MemoryOp, clock: &Clock) -> TrajectoryCard {
    match op.kind {
        MemoryKind::KeyFact { fact } => key_fact(t, fact, clock),
        MemoryKind::RelatedFiles { files } => related_files(t, files, &op.call, clock),
        MemoryKind::Other => other(t, &op.call, clock),
    }
}

/// Title for snippet/note operations.
#[must_use]
pub fn operation_title(tool_name: &str) -> String {
    match tool_name {
        "emit_key_snippet" => "Store Code Snippet".to_owned(),
        "emit_research_note" => "Store Research Note".to_owned(),
        "read_key_facts" => "Retrieve Key Facts".to_owned(),
        "read_key_snippets" => "Retrieve Code Snippets".to_owned(),
        "read_research_notes" => "Retrieve Research Notes".to_owned(),
        other => capitalize_words(other),
    }
}

fn key_fact(t: &Trajectory, fact: Option<String>, clock: &Clock) -> TrajectoryCard {
    let mut card = base(t, clock, CardIcon::KeyFact, KEY_FACT, Expansion::Static);
    card.copy_text = Some(with_heading(KEY_FACT, fact.as_deref().unwrap_or_default()));
    card.header.push(match fact {
        Some(source) => Section::Markdown { heading: None, source },
        None => Section::Placeholder("(No fact text available)".to_owned()),
    });
    finish(card, t)
}

fn related_files(t: &Trajectory, files: Option<Vec<String>>, call: &ToolCall, clock: &Clock) -> TrajectoryCard {
    let list = files
        .filter(|files| !files.is_empty())
        .map_or_else(|| "(No files listed)".to_owned(), |files| files.join("\n"));

    let mut card = base(t, clock, CardIcon::Files, RELATED_FILES, Expansion::Collapsed);
    card.summary = call.display.clone();
    card.copy_text = Some(with_heading(RELATED_FILES, &list));
    card.body.push(Section::FileList(list));
    push_call_sections(t, call, &mut card);
    finish(card, t)
}

fn other(t: &Trajectory, call: &ToolCall, clock: &Clock) -> TrajectoryCard {
    let title = operation_title(&call.tool_name);
    let mut card = base(t, clock, CardIcon::Memory, title.clone(), Expansion::Collapsed);
    card.summary = call.display.clone();
    let text = call
        .display
        .as_deref()
        .filter(|d| !d.is_empty() && t.step_field("display").is_some_and(serde_json::Value::is_string))
        .unwrap_or(title.as_str());
    card.copy_text = Some(with_heading(&title, text));
    push_call_sections(t, call, &mut card);
    finish(card, t)
}

fn push_call_sections(t: &Trajectory, call: &ToolCall, card: &mut TrajectoryCard) {
    card.body.extend(parameters_section(call.parameters.as_ref()));
    if !t.is_error
        && has_result(call.result.as_ref())
        && let Some(result) = &call.result
    {
        card.body.push(Section::Result(format_value(result)));
    }
}

#[cfg(test)]
#[path = "memory_operation_test.rs"]
mod tests;
