//! One-line card for file reads.

use super::{base, finish};
use crate::card::{CardIcon, Expansion, TrajectoryCard};
use crate::format::Clock;
use crate::model::Trajectory;
use crate::steps::ReadFileStep;

#[must_use]
pub fn render(t: &Trajectory, step: ReadFileStep, clock: &Clock) -> TrajectoryCard {
    let summary = format!(
        "Read {} lines ({} bytes) from {}",
        step.line_count.as_deref().unwrap_or("?"),
        step.total_bytes.as_deref().unwrap_or("?"),
        step.filepath.as_deref().unwrap_or("Unknown file"),
    );
    let mut card = base(t, clock, CardIcon::ReadFile, "Read File", Expansion::Static);
    card.copy_text = Some(summary.clone());
    card.summary = Some(summary);
    finish(card, t)
}

#[cfg(test)]
#[path = "read_file_test.rs"]
mod tests;
