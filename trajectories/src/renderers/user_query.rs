//! Card for the user's initial query.

use super::{base, finish};
use crate::card::{CardIcon, Expansion, Section, TrajectoryCard};
use crate::format::Clock;
use crate::model::Trajectory;
use crate::steps::UserQueryStep;

const MISSING_QUERY: &str = "Initial query data not available.";

#[must_use]
pub fn render(t: &Trajectory, step: UserQueryStep, clock: &Clock) -> TrajectoryCard {
    let mut card = base(t, clock, CardIcon::Query, "Query", Expansion::Expanded);
    if step.query.is_empty() {
        card.body.push(Section::Placeholder(MISSING_QUERY.to_owned()));
    } else {
        card.body.push(Section::Preformatted(step.query.clone()));
        card.copy_text = Some(step.query);
    }
    finish(card, t)
}

#[cfg(test)]
#[path = "user_query_test.rs"]
mod tests;
