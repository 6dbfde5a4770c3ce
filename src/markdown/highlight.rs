//! Code block highlighting with syntect.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use tracing::warn;

use super::html::{decode, escape};
use crate::error::RenderError;

/// Class prefix shared by highlighted spans and the code theme stylesheet.
pub(crate) const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

const CODE_OPEN: &str = "<pre><code";
const CODE_CLOSE: &str = "</code></pre>";
const LANGUAGE_CLASS: &str = " class=\"language-";

/// Replaces the plain text of comrak's `<pre><code>` blocks with classed
/// syntect spans.
pub(crate) struct CodeHighlighter {
    syntax_set: SyntaxSet,
}

impl CodeHighlighter {
    pub(crate) fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights every code block in `html`.
    ///
    /// Blocks with a `language-X` class use that language. Blocks without
    /// one are detected from their first line; undetectable blocks and
    /// unknown languages are left as escaped plain text.
    pub(crate) fn highlight_code_blocks(&self, html: &str) -> Result<String, RenderError> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(offset) = html[search_pos..].find(CODE_OPEN) {
            let block_start = search_pos + offset;
            let tag_rest = block_start + CODE_OPEN.len();

            // Declared language sits in the class attribute, if any
            let language = html[tag_rest..]
                .strip_prefix(LANGUAGE_CLASS)
                .and_then(|rest| rest.find('"').map(|end| &rest[..end]));

            let Some(content_start) = html[tag_rest..].find('>').map(|p| tag_rest + p + 1) else {
                search_pos = tag_rest;
                continue;
            };
            let Some(content_end) = html[content_start..]
                .find(CODE_CLOSE)
                .map(|p| content_start + p)
            else {
                search_pos = tag_rest;
                continue;
            };

            let code = decode(&html[content_start..content_end]);

            let syntax = match language {
                Some(token) => {
                    let found = self.find_syntax(token);
                    if found.is_none() {
                        warn!(language = token, "no syntax definition for code block");
                    }
                    found
                }
                None => self.detect_syntax(&code),
            };

            result.push_str(&html[last_end..block_start]);

            match syntax {
                Some(syntax) => {
                    let token = language.map(str::to_owned).unwrap_or_else(|| class_token(syntax));
                    let highlighted = self.highlight_code(&code, syntax).map_err(|source| {
                        RenderError::Highlight {
                            language: token.clone(),
                            source,
                        }
                    })?;

                    result.push_str("<pre><code class=\"language-");
                    result.push_str(&escape(&token));
                    result.push_str(" hljs\">");
                    result.push_str(&highlighted);
                    result.push_str(CODE_CLOSE);
                }
                None => {
                    // Leave the block exactly as comrak wrote it
                    result.push_str(&html[block_start..content_end + CODE_CLOSE.len()]);
                }
            }

            last_end = content_end + CODE_CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);
        Ok(result)
    }

    fn find_syntax(&self, token: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token))
    }

    fn detect_syntax(&self, code: &str) -> Option<&SyntaxReference> {
        let first_line = code.lines().next()?;
        self.syntax_set
            .find_syntax_by_first_line(first_line)
            .filter(|syntax| syntax.name != "Plain Text")
    }

    /// Highlights code using `hljs-` prefixed CSS classes.
    fn highlight_code(
        &self,
        code: &str,
        syntax: &SyntaxReference,
    ) -> Result<String, syntect::Error> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }
}

/// Language class for a detected syntax: its first file extension, or its
/// lowercased name.
fn class_token(syntax: &SyntaxReference) -> String {
    syntax
        .file_extensions
        .first()
        .cloned()
        .unwrap_or_else(|| syntax.name.to_lowercase().replace(' ', "-"))
}
