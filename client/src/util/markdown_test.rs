use super::*;

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hello <script>alert(1)</script> **world**");
    assert!(!html.contains("<script>"));
    assert!(html.contains("<strong>world</strong>"));
}

#[test]
fn languaged_fence_is_highlighted() {
    let html = render_markdown_html("```rust\nfn main() {}\n```\n");
    assert!(html.contains("data-lang=\"rust\""));
    assert!(html.contains("<pre style="));
    assert!(!html.contains("```"));
}

#[test]
fn unknown_language_still_highlights_as_plain_text() {
    let html = render_markdown_html("```klingon\nqapla\n```\n");
    assert!(html.contains("data-lang=\"klingon\""));
    assert!(html.contains("qapla"));
}

#[test]
fn plain_fence_and_inline_code_use_monospace_fallback() {
    let html = render_markdown_html("```\nplain <b>\n```\n\nuse `cargo`");
    assert!(html.contains("<pre><code>plain &lt;b&gt;\n</code></pre>"));
    assert!(html.contains("<code>cargo</code>"));
}

#[test]
fn fence_language_takes_first_safe_word() {
    assert_eq!(fence_language("rust ignore"), Some("rust"));
    assert_eq!(fence_language("c++"), Some("c++"));
    assert_eq!(fence_language(""), None);
    assert_eq!(fence_language("\"><img"), None);
}

#[test]
fn highlight_trims_one_trailing_newline() {
    let with_newline = highlight_code("txt", "line\n").expect("highlight");
    let without = highlight_code("txt", "line").expect("highlight");
    assert_eq!(with_newline, without);
}

#[test]
fn tables_and_task_lists_render() {
    let html = render_markdown_html("| a |\n|---|\n| 1 |\n\n- [x] done");
    assert!(html.contains("<table>"));
    assert!(html.contains("type=\"checkbox\""));
}
