//! Pure renderers, one per trajectory kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`render_card`] is the entry point used by the client: it classifies a
//! record with [`Step::from_trajectory`] and hands the typed step to the
//! matching renderer. Renderers are total; malformed payloads degrade to
//! placeholder text.

pub mod file_str_replace;
pub mod file_write;
pub mod info;
pub mod memory_operation;
pub mod plan_completed;
pub mod read_file;
pub mod tool_execution;
pub mod user_query;

use serde_json::Value;

use crate::card::{CardIcon, Expansion, Section, TrajectoryCard, enforce_error_exclusivity, outcome_sections};
use crate::format::Clock;
use crate::model::Trajectory;
use crate::payload::entries;
use crate::steps::Step;

/// Builds the card for any trajectory record.
#[must_use]
pub fn render_card(t: &Trajectory, clock: &Clock) -> TrajectoryCard {
    match Step::from_trajectory(t) {
        Step::UserQuery(step) => user_query::render(t, step, clock),
        Step::PlanCompleted(step) => plan_completed::render(t, step, clock),
        Step::ReadFile(step) => read_file::render(t, step, clock),
        Step::FileWrite(step) => file_write::render(t, step, clock),
        Step::FileStrReplace(step) => file_str_replace::render(t, step, clock),
        Step::MemoryOperation(op) => memory_operation::render(t, op, clock),
        Step::ToolExecution(call) => tool_execution::render(t, call, clock),
        Step::Info(step) => info::render(t, step, clock),
    }
}

/// Card shell with header metadata filled and no content yet.
fn base(t: &Trajectory, clock: &Clock, icon: CardIcon, title: impl Into<String>, expansion: Expansion) -> TrajectoryCard {
    TrajectoryCard {
        id: t.id,
        icon,
        title: title.into(),
        summary: None,
        time: clock.time_of_day(t.created.as_deref()),
        copy_text: None,
        expansion,
        header: Vec::new(),
        body: Vec::new(),
    }
}

/// Appends the shared outcome sections where the card kind shows them.
fn finish(mut card: TrajectoryCard, t: &Trajectory) -> TrajectoryCard {
    let outcome = outcome_sections(t);
    if card.expansion.is_collapsible() {
        card.body.extend(outcome);
    } else {
        card.header.extend(outcome);
    }
    enforce_error_exclusivity(t, &mut card.header);
    enforce_error_exclusivity(t, &mut card.body);
    card
}

/// `Parameters:` block for a non-empty object payload.
fn parameters_section(params: Option<&Value>) -> Option<Section> {
    let pairs = entries(params);
    (!pairs.is_empty()).then_some(Section::Parameters(pairs))
}

/// `# {title}\n\n{body}`
fn with_heading(title: &str, body: &str) -> String {
    format!("# {title}\n\n{body}")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
