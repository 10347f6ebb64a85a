use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("**Total** orders: `42`");
    assert!(html.contains("<strong>Total</strong>"));
    assert!(html.contains("<code>42</code>"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world\n\n<div onclick=\"x\">block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("hello"));
}

#[test]
fn sql_block_fences_query() {
    assert_eq!(sql_block(" SELECT 1; "), "```sql\nSELECT 1;\n```\n");
    assert_eq!(sql_block("  "), "");
    let html = render_markdown_html(&sql_block("SELECT 1"));
    assert!(html.contains("language-sql"));
}
