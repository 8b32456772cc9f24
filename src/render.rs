//! Markdown to HTML preview rendering
//!
//! Pure conversion plus [`PreviewState`], the revision-tracked slot the
//! shell writes rendered output into. Rendering may complete out of order
//! (e.g. a slow render finishing after a newer one); the revision check
//! makes the newest document state always win.

use std::sync::LazyLock;

use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

/// `[text](url){:target="_blank"}` links, produced by reference insertion.
static TARGET_BLANK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]*)\]\(([^)]*)\)\{:target="_blank"\}"#).expect("valid link regex")
});

/// Rendering seam; shells can substitute their own pipeline.
pub trait Renderer {
    fn render(&self, markdown: &str) -> String;
}

/// The default pulldown-cmark pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        markdown_to_html(markdown)
    }
}

/// Convert markdown to an HTML fragment.
///
/// Tables, footnotes, strikethrough, and task lists are enabled. The
/// `{:target="_blank"}` attribute syntax is not CommonMark, so those links
/// are rewritten to raw anchors before parsing.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let rewritten = rewrite_target_blank_links(markdown);
    let parser = Parser::new_ext(&rewritten, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Convert markdown to a complete standalone HTML document.
pub fn render_document(title: &str, markdown: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    <div id="content">{}</div>
</body>
</html>"#,
        escape_html(title),
        DOCUMENT_CSS,
        markdown_to_html(markdown)
    )
}

/// Replace attribute-list links with raw anchors pulldown-cmark passes
/// through as inline HTML.
fn rewrite_target_blank_links(markdown: &str) -> String {
    TARGET_BLANK_RE
        .replace_all(markdown, |caps: &regex::Captures| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_attr(&caps[2]),
                escape_html(&caps[1]),
            )
        })
        .into_owned()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}

const DOCUMENT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}
h1 { font-size: 2em; border-bottom: 1px solid #d0d7de; padding-bottom: 0.3em; }
code { font-family: ui-monospace, monospace; background: #f6f8fa; padding: 0.2em 0.4em; border-radius: 4px; }
pre code { display: block; padding: 12px; overflow-x: auto; }
blockquote { color: #57606a; border-left: 4px solid #d0d7de; margin: 0; padding-left: 16px; }
"#;

/// Rendered preview slot with last-write-wins staleness tracking.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    pub html: String,
    /// Revision of the document text this HTML was rendered from.
    pub last_revision: u64,
}

impl PreviewState {
    pub fn needs_refresh(&self, document_revision: u64) -> bool {
        self.last_revision != document_revision
    }

    /// Accept a finished render. Output older than what is already shown
    /// is discarded; returns whether the HTML was taken.
    pub fn accept(&mut self, revision: u64, html: String) -> bool {
        if revision < self.last_revision {
            tracing::debug!(revision, current = self.last_revision, "stale render discarded");
            return false;
        }
        self.last_revision = revision;
        self.html = html;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = markdown_to_html("# Título\n\n**negrita** y *cursiva*");
        assert!(html.contains("<h1>Título</h1>"));
        assert!(html.contains("<strong>negrita</strong>"));
        assert!(html.contains("<em>cursiva</em>"));
    }

    #[test]
    fn test_extensions_enabled() {
        let html = markdown_to_html("~~fuera~~\n\n- [ ] tarea");
        assert!(html.contains("<del>fuera</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_target_blank_link_rewritten() {
        let html = markdown_to_html(r#"ver [Guía](https://x.test/guia){:target="_blank"}"#);
        assert!(html.contains(
            r#"<a href="https://x.test/guia" target="_blank" rel="noopener noreferrer">Guía</a>"#
        ));
        assert!(!html.contains("{:target"));
    }

    #[test]
    fn test_plain_link_untouched() {
        let html = markdown_to_html("[normal](https://x.test)");
        assert!(html.contains(r#"<a href="https://x.test">normal</a>"#));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_render_document_is_complete_page() {
        let page = render_document("Mi doc", "# Hola");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Mi doc</title>"));
        assert!(page.contains("<h1>Hola</h1>"));
    }

    #[test]
    fn test_preview_accepts_newer_render() {
        let mut preview = PreviewState::default();
        assert!(preview.accept(1, "<p>uno</p>".into()));
        assert!(preview.accept(2, "<p>dos</p>".into()));
        assert_eq!(preview.html, "<p>dos</p>");
        assert!(!preview.needs_refresh(2));
    }

    #[test]
    fn test_preview_discards_stale_render() {
        let mut preview = PreviewState::default();
        preview.accept(5, "<p>nuevo</p>".into());
        assert!(!preview.accept(3, "<p>viejo</p>".into()));
        assert_eq!(preview.html, "<p>nuevo</p>");
        assert_eq!(preview.last_revision, 5);
    }

    #[test]
    fn test_renderer_trait() {
        let renderer = MarkdownRenderer;
        assert!(renderer.render("# t").contains("<h1>t</h1>"));
    }
}
