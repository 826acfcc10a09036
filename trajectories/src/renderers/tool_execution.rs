//! Collapsible card for generic tool calls, with special cases for shell,
//! web search and expert consultation.

use serde_json::Value;

use super::{base, finish, parameters_section, with_heading};
use crate::card::{CardIcon, Expansion, Section, TrajectoryCard};
use crate::format::{Clock, tool_title};
use crate::model::Trajectory;
use crate::payload::{format_value, has_entries, has_result, pretty_json, scalar_text, str_at};
use crate::steps::{EXPERT_TOOL, SEARCH_TOOL, SHELL_TOOL, ToolCall};

#[must_use]
pub fn render(t: &Trajectory, call: ToolCall, clock: &Clock) -> TrajectoryCard {
    let title = title(&call);
    let mut card = base(t, clock, CardIcon::Tool, title.clone(), Expansion::Collapsed);
    card.summary = call.display.clone();
    card.copy_text = copy_text(t, &call, &title);

    let tool = call.tool_name.as_str();
    if tool != EXPERT_TOOL {
        card.body.extend(parameters_section(call.parameters.as_ref()));
    }
    if !t.is_error
        && tool != SHELL_TOOL
        && tool != EXPERT_TOOL
        && has_result(call.result.as_ref())
        && let Some(result) = &call.result
    {
        card.body.push(Section::Result(format_value(result)));
    }
    if !t.is_error
        && tool == SHELL_TOOL
        && let Some(output) = str_at(t.result_field("output")).filter(|s| !s.is_empty())
    {
        card.body.push(Section::Output(output.to_owned()));
    }
    if tool == EXPERT_TOOL {
        card.body.extend(expert_section(t, &call));
    }
    finish(card, t)
}

/// Display title for a tool call.
#[must_use]
pub fn title(call: &ToolCall) -> String {
    if call.tool_name == EXPERT_TOOL {
        let title = if call.response_content.is_some() {
            "Expert Response"
        } else {
            "Ask Expert"
        };
        return title.to_owned();
    }
    let title = tool_title(&call.tool_name);
    if title.is_empty() { "Tool".to_owned() } else { title }
}

/// Response as markdown when the expert answered, the question otherwise.
fn expert_section(t: &Trajectory, call: &ToolCall) -> Option<Section> {
    match call.response_content.as_deref() {
        Some("") => None,
        Some(response) => Some(Section::Markdown {
            heading: Some("Expert Response:".to_owned()),
            source: response.to_owned(),
        }),
        None => scalar_text(t.parameter("question"))
            .filter(|q| !q.is_empty())
            .map(|question| Section::Markdown {
                heading: Some("Parameters:".to_owned()),
                source: question,
            }),
    }
}

fn copy_text(t: &Trajectory, call: &ToolCall, title: &str) -> Option<String> {
    let error = t
        .error_message
        .as_deref()
        .filter(|m| t.is_error && !m.is_empty());
    let raw = match error {
        Some(message) => message.to_owned(),
        None => raw_copy_text(t, call),
    };
    if raw.is_empty() {
        return None;
    }
    match call.tool_name.as_str() {
        SHELL_TOOL | SEARCH_TOOL | EXPERT_TOOL => Some(raw),
        _ => Some(with_heading(title, &raw)),
    }
}

fn raw_copy_text(t: &Trajectory, call: &ToolCall) -> String {
    match call.tool_name.as_str() {
        SHELL_TOOL => scalar_text(t.result_field("output"))
            .or_else(|| scalar_text(t.parameter("command")))
            .unwrap_or_default(),
        SEARCH_TOOL => scalar_text(t.parameter("query")).unwrap_or_default(),
        EXPERT_TOOL => {
            let question = scalar_text(t.parameter("question")).unwrap_or_default();
            let response = call.response_content.as_deref().unwrap_or_default();
            format!("# Parameters:\n\n{question}\n\n---\n\n# Expert Response:\n\n{response}")
        }
        _ => match &call.result {
            Some(result @ (Value::Object(_) | Value::Array(_))) if has_entries(Some(result)) => pretty_json(result),
            Some(result) if !result.is_null() && !result.is_object() && !result.is_array() => format_value(result),
            _ if has_entries(call.parameters.as_ref()) => call.parameters.as_ref().map(pretty_json).unwrap_or_default(),
            _ => String::new(),
        },
    }
}

#[cfg(test)]
#[path = "tool_execution_test.rs"]
mod tests;
