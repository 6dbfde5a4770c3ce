//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;
use tracing::debug;

use super::headings::{Heading, HeadingPass};
use super::highlight::CodeHighlighter;
use super::options::{RenderOptions, Transform};
use crate::document::Document;
use crate::error::RenderError;

/// Rendered HTML together with the document outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub html: String,
    pub headings: Vec<Heading>,
}

impl RenderedDocument {
    /// Text of the first level 1 heading.
    pub fn title(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|heading| heading.level == 1)
            .map(|heading| heading.text.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Parsing and serialization are done by comrak with tables,
/// strikethrough, autolinks, task lists and footnotes enabled. Raw HTML in
/// the source is omitted. The enabled transforms then run over the output
/// in a fixed order: code highlighting, heading slugs, heading links.
///
/// A renderer holds no per-document state and can be reused.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: CodeHighlighter,
    render_options: RenderOptions,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with every transform enabled.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Creates renderer running only the transforms in `render_options`.
    pub fn with_options(render_options: RenderOptions) -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        // Raw HTML is not rendered
        options.render.unsafe_ = false;

        Self {
            options,
            highlighter: CodeHighlighter::new(),
            render_options,
        }
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// Malformed markdown never fails; it renders as literal text.
    ///
    /// # Errors
    ///
    /// Returns error if highlighting a code block fails
    pub fn render(&self, content: &str) -> Result<String, RenderError> {
        self.render_outlined(content).map(|rendered| rendered.html)
    }

    /// Renders a loaded document, keeping its heading outline.
    pub fn render_document(&self, document: &Document) -> Result<RenderedDocument, RenderError> {
        debug!(path = %document.path().display(), "rendering document");
        self.render_outlined(document.content())
    }

    /// Renders markdown and collects the headings it contains.
    pub fn render_outlined(&self, content: &str) -> Result<RenderedDocument, RenderError> {
        let mut html = comrak::markdown_to_html(content, &self.options);

        if self.render_options.is_enabled(Transform::Highlight) {
            html = self.highlighter.highlight_code_blocks(&html)?;
        }

        let pass = HeadingPass {
            slug: self.render_options.is_enabled(Transform::Slug),
            autolink: self
                .render_options
                .is_enabled(Transform::AutolinkHeadings)
                .then_some(self.render_options.anchor),
        };
        let (html, headings) = pass.apply(&html);

        debug!(
            input = content.len(),
            output = html.len(),
            headings = headings.len(),
            "rendered markdown"
        );

        Ok(RenderedDocument { html, headings })
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
