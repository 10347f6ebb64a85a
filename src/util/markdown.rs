//! Markdown rendering for AI explanations.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render Markdown to HTML with tables, strikethrough and task lists.
///
/// Raw inline and block HTML from model output is dropped before rendering.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Wrap a SQL query as a fenced block so it renders as code.
pub fn sql_block(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return String::new();
    }
    format!("```sql\n{query}\n```\n")
}
