//! Card shown when the agent finishes its plan.

use super::{base, finish, with_heading};
use crate::card::{CardIcon, Expansion, Section, TrajectoryCard};
use crate::format::Clock;
use crate::model::Trajectory;
use crate::steps::PlanCompletedStep;

const TITLE: &str = "Plan Completed";

#[must_use]
pub fn render(t: &Trajectory, step: PlanCompletedStep, clock: &Clock) -> TrajectoryCard {
    let mut card = base(t, clock, CardIcon::PlanCompleted, TITLE, Expansion::Expanded);
    card.copy_text = Some(with_heading(TITLE, &step.message));
    card.body.push(Section::Markdown {
        heading: None,
        source: step.message,
    });
    finish(card, t)
}

#[cfg(test)]
#[path = "plan_completed_test.rs"]
mod tests;
