//! Text formatting shared by all renderers: clock times, previews, titles.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Preview length for long string fields, ellipsis included.
pub const PREVIEW_LIMIT: usize = 50;

/// Shown when a record has no usable creation time.
pub const INVALID_TIME: &str = "Invalid Date";

/// Converts record timestamps into the viewer's local `HH:MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    offset: UtcOffset,
}

impl Default for Clock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock {
    #[must_use]
    pub fn utc() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }

    #[must_use]
    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Clock for an offset in minutes east of UTC. Out-of-range offsets fall
    /// back to UTC.
    #[must_use]
    pub fn from_minutes_east(minutes: i32) -> Self {
        let offset = UtcOffset::from_whole_seconds(minutes.saturating_mul(60)).unwrap_or(UtcOffset::UTC);
        Self { offset }
    }

    /// Local `HH:MM` for an ISO-8601 timestamp.
    ///
    /// Timestamps without an offset are taken as UTC. Missing or unparseable
    /// input yields [`INVALID_TIME`].
    #[must_use]
    pub fn time_of_day(&self, timestamp: Option<&str>) -> String {
        let Some(instant) = timestamp.and_then(parse_timestamp) else {
            return INVALID_TIME.to_owned();
        };
        instant
            .to_offset(self.offset)
            .format(format_description!("[hour]:[minute]"))
            .unwrap_or_else(|_| INVALID_TIME.to_owned())
    }
}

/// Parses RFC 3339, falling back to a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(instant) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(instant);
    }
    let normalized = raw.replacen(' ', "T", 1);
    PrimitiveDateTime::parse(
        &normalized,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    )
    .ok()
    .map(PrimitiveDateTime::assume_utc)
}

/// Shortens `text` to at most `limit` characters, ending in `...` when cut.
#[must_use]
pub fn truncate_preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let kept = text.chars().take(limit.saturating_sub(3)).collect::<String>();
    format!("{kept}...")
}

/// Generic tool title: `read_file_tool` -> `Read File`.
///
/// Underscores become spaces, the standalone word `tool` is dropped and each
/// remaining word is Title-Cased.
#[must_use]
pub fn tool_title(tool_name: &str) -> String {
    tool_name
        .replace('_', " ")
        .split_whitespace()
        .filter(|word| !word.eq_ignore_ascii_case("tool"))
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Underscores become spaces and every letter that starts a word is
/// upper-cased: `emit-foo_bar` -> `Emit-Foo Bar`. A word starts after any
/// character that is not an ASCII letter or digit. The rest is untouched.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars().map(|c| if c == '_' { ' ' } else { c }) {
        out.push(if word_start { c.to_ascii_uppercase() } else { c });
        word_start = !c.is_ascii_alphanumeric();
    }
    out
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// `Cost: $0.012500`
#[must_use]
pub fn cost_line(cost: f64) -> String {
    format!("Cost: ${cost:.6}")
}

/// `Tokens: 10 in / 20 out`, or `None` when neither count is known.
#[must_use]
pub fn token_line(input: Option<u64>, output: Option<u64>) -> Option<String> {
    if input.is_none() && output.is_none() {
        return None;
    }
    Some(format!(
        "Tokens: {} in / {} out",
        input.unwrap_or(0),
        output.unwrap_or(0)
    ))
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
