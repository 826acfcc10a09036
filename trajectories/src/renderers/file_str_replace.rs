//! Card for in-place string replacements.

use super::{base, finish};
use crate::card::{CardIcon, Expansion, Field, Section, TrajectoryCard};
use crate::format::{Clock, PREVIEW_LIMIT, truncate_preview};
use crate::model::Trajectory;
use crate::steps::StrReplaceStep;

#[must_use]
pub fn render(t: &Trajectory, step: StrReplaceStep, clock: &Clock) -> TrajectoryCard {
    let path = step.filepath.unwrap_or_else(|| "N/A".to_owned());
    let title = step
        .display_title
        .unwrap_or_else(|| format!("Replaced string in {path}"));

    let mut card = base(t, clock, CardIcon::Replace, title.clone(), Expansion::Static);
    card.copy_text = Some(title);
    card.header.push(Section::Fields(vec![
        Field::code("File", path),
        Field::code("Old", truncate_preview(&step.old_str, PREVIEW_LIMIT)),
        Field::code("New", truncate_preview(&step.new_str, PREVIEW_LIMIT)),
    ]));
    card.header.push(Section::Badge(format!("{} replacement(s)", step.count)));
    if let Some(diff) = step.diff {
        card.header.push(Section::Diff(diff));
    }
    finish(card, t)
}

#[cfg(test)]
#[path = "file_str_replace_test.rs"]
mod tests;
