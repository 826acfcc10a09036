//! Fallback card for status, stage, usage and other informational records.

use super::{base, finish};
use crate::card::{CardIcon, Expansion, Section, TrajectoryCard};
use crate::format::Clock;
use crate::model::Trajectory;
use crate::payload::pretty_json;
use crate::steps::{InfoKind, InfoStep};

#[must_use]
pub fn render(t: &Trajectory, step: InfoStep, clock: &Clock) -> TrajectoryCard {
    let icon = if t.is_error || step.kind == InfoKind::Error {
        CardIcon::Error
    } else {
        CardIcon::Info
    };
    let object = step.object.as_ref().map(pretty_json);

    let mut card = base(t, clock, icon, step.title, Expansion::Collapsed);
    card.summary = step.message.clone();
    card.copy_text = step.message.clone().or_else(|| object.clone());
    if let Some(message) = step.message {
        card.body.push(Section::Text(message));
    }
    if let Some(json) = object {
        card.body.push(Section::Json(json));
    }
    finish(card, t)
}

#[cfg(test)]
#[path = "info_test.rs"]
mod tests;
