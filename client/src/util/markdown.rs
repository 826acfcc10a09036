//! Markdown to HTML with syntax-highlighted code fences.
//!
//! DESIGN
//! ======
//! `pulldown-cmark` drives rendering. Fenced blocks that carry a language tag
//! are buffered and replaced by `syntect` HTML; everything else, including
//! un-languaged fences and inline code, goes through the stock HTML writer.
//! Raw HTML in the source is dropped before rendering.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// An open fenced block awaiting its closing tag.
struct Fence<'a> {
    info: CowStr<'a>,
    language: String,
    code: String,
}

/// Render trajectory markdown as HTML.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events = Vec::new();
    let mut fence: Option<Fence<'_>> = None;
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Html(_) | Event::InlineHtml(_) => {}
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => match fence_language(&info) {
                Some(language) => {
                    fence = Some(Fence {
                        language: language.to_owned(),
                        info,
                        code: String::new(),
                    });
                }
                None => events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))),
            },
            Event::Text(text) if fence.is_some() => {
                if let Some(open) = fence.as_mut() {
                    open.code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) if fence.is_some() => {
                if let Some(open) = fence.take() {
                    push_fence(&mut events, open);
                }
            }
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Language tag of a fence info string: its first word, if any.
#[must_use]
pub fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace()
        .next()
        .filter(|lang| lang.chars().all(|c| c.is_ascii_alphanumeric() || "+-#_.".contains(c)))
}

/// Highlighted HTML for one code block, trailing newline trimmed.
///
/// Unknown languages highlight as plain text. `None` only when the theme or
/// highlighter fails.
#[must_use]
pub fn highlight_code(language: &str, code: &str) -> Option<String> {
    let code = code.strip_suffix('\n').unwrap_or(code);
    let syntax = SYNTAXES
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
    let theme = THEMES.themes.get(THEME)?;
    let highlighted = highlighted_html_for_string(code, &SYNTAXES, syntax, theme).ok()?;
    Some(format!(
        "<div class=\"markdown__code\" data-lang=\"{language}\">{highlighted}</div>"
    ))
}

fn push_fence<'a>(events: &mut Vec<Event<'a>>, fence: Fence<'a>) {
    if let Some(highlighted) = highlight_code(&fence.language, &fence.code) {
        events.push(Event::Html(highlighted.into()));
        return;
    }
    events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(fence.info))));
    events.push(Event::Text(fence.code.into()));
    events.push(Event::End(TagEnd::CodeBlock));
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
