use super::*;

#[test]
fn renders_emphasis_as_html() {
    assert_eq!(render_markdown_html("**bold**"), "<p><strong>bold</strong></p>\n");
}

#[test]
fn renders_tables() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<table>"));
    assert!(out.contains("<td>1</td>"));
}

#[test]
fn drops_raw_html() {
    let out = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hi"));
}

#[test]
fn escapes_text_content() {
    assert_eq!(render_markdown_html("a & b"), "<p>a &amp; b</p>\n");
}
