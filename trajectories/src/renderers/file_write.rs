//! Card for whole-file writes.

use super::{base, finish};
use crate::card::{CardIcon, Expansion, Field, Section, TrajectoryCard};
use crate::format::Clock;
use crate::model::Trajectory;
use crate::steps::FileWriteStep;

#[must_use]
pub fn render(t: &Trajectory, step: FileWriteStep, clock: &Clock) -> TrajectoryCard {
    let path = step.filepath.unwrap_or_else(|| "N/A".to_owned());
    let title = match &step.bytes_written {
        Some(bytes) => format!("Wrote {bytes} bytes to file: {path}"),
        None => format!("Wrote file: {path}"),
    };

    let mut card = base(t, clock, CardIcon::FileWrite, title.clone(), Expansion::Static);
    card.copy_text = Some(title);
    card.header.push(Section::Badge(path));
    if let Some(bytes) = step.bytes_written {
        card.header.push(Section::Fields(vec![Field::text("Bytes written", bytes)]));
    }
    finish(card, t)
}

#[cfg(test)]
#[path = "file_write_test.rs"]
mod tests;
