//! Typed per-variant views over a trajectory's untyped payloads.
//!
//! [`Step::from_trajectory`] is the single dispatch point: it classifies a
//! record by `recordType` / `toolName` and reads the payload fields that
//! variant uses, filling explicit defaults for anything absent or mistyped.

use serde_json::Value;

use crate::model::Trajectory;
use crate::payload::{scalar_text, str_at};

/// Memory tools rendered by the memory-operation card.
pub const MEMORY_TOOLS: &[&str] = &[
    "emit_key_facts",
    "emit_related_files",
    "emit_key_snippet",
    "emit_research_note",
    "read_key_facts",
    "read_key_snippets",
    "read_research_notes",
];

pub const SHELL_TOOL: &str = "run_shell_command";
pub const SEARCH_TOOL: &str = "web_search_tavily";
pub const EXPERT_TOOL: &str = "ask_expert";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQueryStep {
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanCompletedStep {
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadFileStep {
    pub filepath: Option<String>,
    pub line_count: Option<String>,
    pub total_bytes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileWriteStep {
    pub filepath: Option<String>,
    pub bytes_written: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrReplaceStep {
    pub filepath: Option<String>,
    pub old_str: String,
    pub new_str: String,
    pub count: String,
    pub diff: Option<String>,
    /// Title from the record or its payload, when either carries one.
    pub display_title: Option<String>,
}

/// A generic tool invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolCall {
    pub tool_name: String,
    pub parameters: Option<Value>,
    pub result: Option<Value>,
    /// Short description shown under the title.
    pub display: Option<String>,
    /// Expert answer for `ask_expert`, when the payload carries a string.
    pub response_content: Option<String>,
}

impl ToolCall {
    fn from_trajectory(t: &Trajectory) -> Self {
        Self {
            tool_name: t.tool().to_owned(),
            parameters: t.tool_parameters.clone(),
            result: t.tool_result.clone(),
            display: scalar_text(t.step_field("display")),
            response_content: str_at(t.step_field("response_content")).map(str::to_owned),
        }
    }
}

/// Which memory tool a record invokes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryKind {
    KeyFact { fact: Option<String> },
    RelatedFiles { files: Option<Vec<String>> },
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryOp {
    pub kind: MemoryKind,
    pub call: ToolCall,
}

/// Flavour of an informational record, used for its default title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoKind {
    ProjectStatus,
    StageTransition,
    ModelUsage,
    Error,
    General,
}

impl InfoKind {
    fn from_record_type(record_type: &str) -> Self {
        match record_type {
            "project_status" => Self::ProjectStatus,
            "stage_transition" => Self::StageTransition,
            "model_usage" => Self::ModelUsage,
            "error" => Self::Error,
            _ => Self::General,
        }
    }

    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::ProjectStatus => "Project Status",
            Self::StageTransition => "Stage Transition",
            Self::ModelUsage => "Model Usage",
            Self::Error => "Error",
            Self::General => "Information",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoStep {
    pub kind: InfoKind,
    pub title: String,
    /// String message (`message`, then `content`).
    pub message: Option<String>,
    /// First structured `message`/`content` value.
    pub object: Option<Value>,
}

/// A trajectory classified into its renderer variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    UserQuery(UserQueryStep),
    PlanCompleted(PlanCompletedStep),
    ReadFile(ReadFileStep),
    FileWrite(FileWriteStep),
    FileStrReplace(StrReplaceStep),
    MemoryOperation(MemoryOp),
    ToolExecution(ToolCall),
    Info(InfoStep),
}

impl Step {
    #[must_use]
    pub fn from_trajectory(t: &Trajectory) -> Self {
        let record_type = t.record_type.as_str();
        let tool = t.tool();

        if record_type == "user_query" {
            return Self::UserQuery(UserQueryStep {
                query: str_at(t.step_field("query")).unwrap_or_default().to_owned(),
            });
        }
        if record_type == "plan_completed" {
            return Self::PlanCompleted(plan_completed(t));
        }
        if record_type == "memory_operation" || MEMORY_TOOLS.contains(&tool) {
            return Self::MemoryOperation(memory_op(t));
        }
        if record_type == "error" {
            if tool.is_empty() {
                return Self::Info(info(t));
            }
            return Self::ToolExecution(ToolCall::from_trajectory(t));
        }
        if record_type == "read_file" || tool == "read_file_tool" {
            return Self::ReadFile(ReadFileStep {
                filepath: non_empty(scalar_text(t.step_field("filepath"))),
                line_count: scalar_text(t.step_field("line_count")),
                total_bytes: scalar_text(t.step_field("total_bytes")),
            });
        }
        if record_type == "file_write" || matches!(tool, "write_file_tool" | "put_complete_file_contents") {
            return Self::FileWrite(FileWriteStep {
                filepath: non_empty(scalar_text(t.step_field("filepath"))),
                bytes_written: scalar_text(t.step_field("bytes_written")),
            });
        }
        if record_type == "file_str_replace" || tool == "file_str_replace" {
            return Self::FileStrReplace(str_replace(t));
        }
        if record_type == "tool_execution" || !tool.is_empty() {
            return Self::ToolExecution(ToolCall::from_trajectory(t));
        }
        Self::Info(info(t))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn plan_completed(t: &Trajectory) -> PlanCompletedStep {
    let message = str_at(t.step_field("message"))
        .or_else(|| str_at(t.step_field("completion_message")))
        .unwrap_or("(No plan completion message)");
    PlanCompletedStep {
        message: message.to_owned(),
    }
}

fn memory_op(t: &Trajectory) -> MemoryOp {
    let kind = match t.tool() {
        "emit_key_facts" => MemoryKind::KeyFact {
            fact: non_empty(str_at(t.step_field("fact")).map(str::to_owned)),
        },
        "emit_related_files" => MemoryKind::RelatedFiles {
            files: t.parameter("files").and_then(Value::as_array).map(|items| {
                items
                    .iter()
                    .filter_map(|item| scalar_text(Some(item)))
                    .collect()
            }),
        },
        _ => MemoryKind::Other,
    };
    MemoryOp {
        kind,
        call: ToolCall::from_trajectory(t),
    }
}

fn str_replace(t: &Trajectory) -> StrReplaceStep {
    StrReplaceStep {
        filepath: non_empty(scalar_text(t.step_field("filepath"))),
        old_str: scalar_text(t.step_field("old_str")).unwrap_or_default(),
        new_str: scalar_text(t.step_field("new_str")).unwrap_or_default(),
        count: scalar_text(t.step_field("count")).unwrap_or_else(|| "0".to_owned()),
        diff: non_empty(scalar_text(t.step_field("diff"))),
        display_title: t
            .display_title
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| non_empty(str_at(t.step_field("display_title")).map(str::to_owned))),
    }
}

fn info(t: &Trajectory) -> InfoStep {
    let kind = InfoKind::from_record_type(&t.record_type);
    let title = str_at(t.step_field("title"))
        .filter(|s| !s.is_empty())
        .or_else(|| str_at(t.step_field("display_title")).filter(|s| !s.is_empty()))
        .unwrap_or(kind.default_title())
        .to_owned();
    let candidates = [t.step_field("message"), t.step_field("content")];
    let message = candidates
        .iter()
        .find_map(|value| str_at(*value))
        .filter(|s| !s.is_empty())
        .map(str::to_owned);
    let object = candidates
        .iter()
        .flatten()
        .find(|value| !value.is_string() && !value.is_null())
        .map(|value| (*value).clone());
    InfoStep {
        kind,
        title,
        message,
        object,
    }
}

#[cfg(test)]
#[path = "steps_test.rs"]
mod tests;
