//! The fixed styling template applied to every lesson document.
//!
//! Centralising the title block, footer, and page CSS here serves two
//! purposes:
//!
//! 1. **Single source of truth** — the workshop branding appears in exactly
//!    one place; changing the footer year or the heading palette touches one
//!    file.
//!
//! 2. **Testability** — unit tests can render the template directly without
//!    touching any conversion backend.
//!
//! Two renditions exist because the backends accept different inputs: the
//! headless-browser backend wants a complete HTML page, while the in-process
//! styling engine consumes Markdown and does its own typesetting.

use pulldown_cmark::{html, Options, Parser};

/// Title line of the centred header block on every page.
pub const WORKSHOP_TITLE: &str = "AI/ML for Climate Workshop";

/// Subtitle line of the header block.
pub const WORKSHOP_SUBTITLE: &str = "International Livestock Research Institute (ILRI)";

/// Footer note at the bottom of every document.
pub const FOOTER_NOTE: &str = "© 2025 ILRI - Python & AI/ML for Climate Prediction Training";

/// Page CSS: A4, 2 cm margins, teal heading palette, code and table rules.
pub const PAGE_STYLE: &str = r#"@page {
    size: A4;
    margin: 2cm;
}
body {
    font-family: Arial, sans-serif;
    font-size: 11pt;
    line-height: 1.6;
    color: #333;
    max-width: 800px;
    margin: 0 auto;
}
h1 {
    color: #009688;
    font-size: 24pt;
    margin-top: 20pt;
    border-bottom: 2px solid #009688;
    padding-bottom: 10pt;
}
h2 {
    color: #00695c;
    font-size: 18pt;
    margin-top: 15pt;
}
h3 {
    color: #00796b;
    font-size: 14pt;
    margin-top: 12pt;
}
code {
    background-color: #f5f5f5;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
    font-size: 9pt;
}
pre {
    background-color: #f5f5f5;
    padding: 15px;
    border-radius: 5px;
    border-left: 4px solid #009688;
    overflow-x: auto;
    font-size: 9pt;
    line-height: 1.4;
}
pre code {
    background: none;
    padding: 0;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 15px 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px;
    text-align: left;
}
th {
    background-color: #009688;
    color: white;
}
blockquote {
    border-left: 4px solid #009688;
    padding-left: 15px;
    margin-left: 0;
    color: #666;
    font-style: italic;
}
img {
    max-width: 100%;
    height: auto;
}
.header {
    text-align: center;
    color: #009688;
    margin-bottom: 30pt;
}
.footer {
    text-align: center;
    font-size: 9pt;
    color: #666;
    margin-top: 30pt;
    padding-top: 10pt;
    border-top: 1px solid #ddd;
}"#;

/// Render a Markdown document body to HTML.
///
/// Tables, footnotes, strikethrough, and task lists are enabled to match the
/// GitHub-flavoured constructs the lesson files use.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, parser);
    body
}

/// Render a Markdown document into the complete styled HTML page handed to
/// the headless-browser backend.
pub fn render_page(markdown: &str) -> String {
    let body = markdown_to_html(markdown);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n{style}\n</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"header\">\n\
         <h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         </div>\n\
         {body}\n\
         <div class=\"footer\">\n\
         <p>{footer}</p>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        style = PAGE_STYLE,
        title = WORKSHOP_TITLE,
        subtitle = WORKSHOP_SUBTITLE,
        body = body,
        footer = FOOTER_NOTE,
    )
}

/// Wrap a Markdown document in the title block and footer note, in Markdown
/// form, for the in-process styling engine (which typesets Markdown itself).
pub fn styled_markdown(markdown: &str) -> String {
    format!(
        "# {title}\n\n{subtitle}\n\n---\n\n{body}\n\n---\n\n{footer}\n",
        title = WORKSHOP_TITLE,
        subtitle = WORKSHOP_SUBTITLE,
        body = markdown.trim_end(),
        footer = FOOTER_NOTE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_tables_render_as_html() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let html = markdown_to_html(md);
        assert!(html.contains("<table>"), "got: {html}");
        assert!(html.contains("<td>1</td>"), "got: {html}");
    }

    #[test]
    fn page_embeds_branding_and_style() {
        let page = render_page("# Lesson 1\n\nHello.");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(WORKSHOP_TITLE));
        assert!(page.contains(WORKSHOP_SUBTITLE));
        assert!(page.contains(FOOTER_NOTE));
        assert!(page.contains("@page"));
        assert!(page.contains("<h1>Lesson 1</h1>"));
    }

    #[test]
    fn page_preserves_code_fences() {
        let page = render_page("```python\nprint('hi')\n```");
        assert!(page.contains("<pre><code class=\"language-python\">"));
    }

    #[test]
    fn styled_markdown_brackets_the_body() {
        let styled = styled_markdown("## Setup\n\nInstall things.\n");
        assert!(styled.starts_with(&format!("# {WORKSHOP_TITLE}")));
        assert!(styled.contains("## Setup"));
        assert!(styled.trim_end().ends_with(FOOTER_NOTE));
    }
}
