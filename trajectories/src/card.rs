//! Framework-neutral description of a rendered trajectory card.
//!
//! DESIGN
//! ======
//! Renderers produce a [`TrajectoryCard`]; the client maps it onto DOM. Keeping
//! the tree here lets every renderer rule be asserted without a browser. The
//! outcome helpers ([`outcome_sections`]) are shared by all variants so the
//! error block and usage footer behave identically on every card.

use crate::format::{cost_line, token_line};
use crate::model::Trajectory;
use crate::payload::format_value;

/// Leading glyph of a card header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIcon {
    Query,
    PlanCompleted,
    ReadFile,
    FileWrite,
    Replace,
    Tool,
    KeyFact,
    Files,
    Memory,
    Info,
    Error,
}

impl CardIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Query => "❔",
            Self::PlanCompleted => "✅",
            Self::ReadFile => "📄",
            Self::FileWrite => "📝",
            Self::Replace => "🔁",
            Self::Tool => "🛠️",
            Self::KeyFact => "🔑",
            Self::Files => "🗂️",
            Self::Memory => "💾",
            Self::Info => "ℹ️",
            Self::Error => "⚠️",
        }
    }

    /// BEM modifier for icon colouring.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::PlanCompleted => "plan",
            Self::ReadFile => "read",
            Self::FileWrite => "write",
            Self::Replace => "replace",
            Self::Tool => "tool",
            Self::KeyFact => "fact",
            Self::Files => "files",
            Self::Memory => "memory",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Open/closed state of a card body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// No toggle; everything renders in the header area.
    Static,
    Collapsed,
    Expanded,
}

impl Expansion {
    /// State after the header trigger fires. `Static` never changes.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Static => Self::Static,
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub fn is_collapsible(self) -> bool {
        self != Self::Static
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Labelled value in a field list (`File: a.py`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
    /// Render the value in monospace.
    pub code: bool,
}

impl Field {
    #[must_use]
    pub fn text(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            value: value.into(),
            code: false,
        }
    }

    #[must_use]
    pub fn code(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            value: value.into(),
            code: true,
        }
    }
}

/// Error block content for records flagged `isError`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBlock {
    pub message: String,
    pub error_type: Option<String>,
    pub details: Option<String>,
}

impl ErrorBlock {
    #[must_use]
    pub fn from_trajectory(t: &Trajectory) -> Self {
        Self {
            message: t
                .error_message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Unknown error".to_owned()),
            error_type: t.error_type.clone().filter(|s| !s.is_empty()),
            details: t
                .error_details
                .as_ref()
                .filter(|v| !v.is_null())
                .map(format_value)
                .filter(|s| !s.is_empty()),
        }
    }

    /// `message (type)\nDetails: details`
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = self.message.clone();
        if let Some(kind) = &self.error_type {
            out.push_str(&format!(" ({kind})"));
        }
        if let Some(details) = &self.details {
            out.push_str(&format!("\nDetails: {details}"));
        }
        out
    }
}

/// Cost and token usage footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageFooter {
    pub cost: Option<String>,
    pub tokens: Option<String>,
}

impl UsageFooter {
    /// `None` when the record carries neither cost nor token counts.
    #[must_use]
    pub fn from_trajectory(t: &Trajectory) -> Option<Self> {
        let cost = t.current_cost.map(cost_line);
        let tokens = token_line(t.input_tokens, t.output_tokens);
        if cost.is_none() && tokens.is_none() {
            return None;
        }
        Some(Self { cost, tokens })
    }
}

/// One block of card content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    /// `Parameters:` block of `key: value` lines.
    Parameters(Vec<(String, String)>),
    /// `Result:` block, preformatted.
    Result(String),
    /// `Output:` block with shell output verbatim.
    Output(String),
    /// Markdown body with an optional heading.
    Markdown {
        heading: Option<String>,
        source: String,
    },
    /// Preformatted text, wrapped.
    Preformatted(String),
    /// Plain paragraph text with preserved line breaks.
    Text(String),
    /// Pretty JSON of a structured payload.
    Json(String),
    /// `Files:` list of related file paths.
    FileList(String),
    Fields(Vec<Field>),
    Badge(String),
    /// Nested "Show Diff" disclosure.
    Diff(String),
    /// Muted italic text for absent data.
    Placeholder(String),
    Error(ErrorBlock),
    Usage(UsageFooter),
}

impl Section {
    /// Whether this section shows a successful tool result.
    #[must_use]
    pub fn is_success_result(&self) -> bool {
        matches!(self, Self::Result(_) | Self::Output(_))
    }
}

/// The full visual tree for one trajectory.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryCard {
    pub id: i64,
    pub icon: CardIcon,
    pub title: String,
    /// Short muted line under the title.
    pub summary: Option<String>,
    /// Local `HH:MM` creation time.
    pub time: String,
    /// Text handed to the copy control; `None` hides the control.
    pub copy_text: Option<String>,
    pub expansion: Expansion,
    /// Always-visible content below the header row.
    pub header: Vec<Section>,
    /// Content shown only while expanded.
    pub body: Vec<Section>,
}

impl TrajectoryCard {
    /// All sections, header first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.header.iter().chain(self.body.iter())
    }

    #[must_use]
    pub fn error_block(&self) -> Option<&ErrorBlock> {
        self.sections().find_map(|section| match section {
            Section::Error(block) => Some(block),
            _ => None,
        })
    }

    #[must_use]
    pub fn usage(&self) -> Option<&UsageFooter> {
        self.sections().find_map(|section| match section {
            Section::Usage(usage) => Some(usage),
            _ => None,
        })
    }
}

/// Error block and usage footer shared by every card kind.
#[must_use]
pub fn outcome_sections(t: &Trajectory) -> Vec<Section> {
    let mut sections = Vec::new();
    if t.is_error {
        sections.push(Section::Error(ErrorBlock::from_trajectory(t)));
    }
    if let Some(usage) = UsageFooter::from_trajectory(t) {
        sections.push(Section::Usage(usage));
    }
    sections
}

/// Removes success result blocks when the record is an error.
pub(crate) fn enforce_error_exclusivity(t: &Trajectory, sections: &mut Vec<Section>) {
    if t.is_error {
        sections.retain(|section| !section.is_success_result());
    }
}

#[cfg(test)]
#[path = "card_test.rs"]
mod tests;
