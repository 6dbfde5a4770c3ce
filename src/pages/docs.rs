//! Documentation page: one markdown file rendered into the page shell

use maud::{Markup, PreEscaped, html};
use std::path::Path;
use tracing::info;

use crate::components::layout::page_wrapper;
use crate::document::Document;
use crate::error::Error;
use crate::markdown::MarkdownRenderer;

/// Stylesheets linked from the generated page, relative to its directory.
pub const STYLESHEETS: [&str; 2] = ["assets/page.css", "assets/markdown.css"];

/// Loads, renders and wraps the markdown file at `path`.
///
/// The file is read fresh on every call. The page title is `title` when
/// given, otherwise the first level 1 heading, otherwise the file name.
///
/// # Errors
///
/// Returns [`Error::Load`] if the file is missing or unreadable and
/// [`Error::Render`] if the pipeline fails. No partial page is produced.
///
/// # Examples
///
/// ```no_run
/// use docpage::MarkdownRenderer;
/// use docpage::pages::docs::generate;
///
/// let renderer = MarkdownRenderer::new();
/// let page = generate("README.md", &renderer, None)?;
/// # Ok::<(), docpage::Error>(())
/// ```
pub fn generate(
    path: impl AsRef<Path>,
    renderer: &MarkdownRenderer<'_>,
    title: Option<&str>,
) -> Result<Markup, Error> {
    let document = Document::load(path)?;
    let rendered = renderer.render_document(&document)?;

    let page_title = title
        .map(str::to_owned)
        .or_else(|| rendered.title().map(str::to_owned))
        .unwrap_or_else(|| document.file_name());

    info!(
        path = %document.path().display(),
        title = %page_title,
        headings = rendered.headings.len(),
        "generated docs page"
    );

    Ok(docs_page_markup(&page_title, &rendered.html))
}

/// Page shell around an already rendered markdown fragment.
pub fn docs_page_markup(title: &str, fragment: &str) -> Markup {
    page_wrapper(
        title,
        &STYLESHEETS,
        html! {
            div class="markdown" {
                (PreEscaped(fragment))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_embeds_fragment() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("README.md");
        fs::write(&path, "# My Project\n\nHello.\n").expect("Should write fixture");
        let renderer = MarkdownRenderer::new();

        // Act
        let page = generate(&path, &renderer, None)
            .expect("Should generate page")
            .into_string();

        // Assert
        assert!(page.contains("<title>My Project</title>"), "{}", page);
        assert!(
            page.contains(
                "<div class=\"markdown\"><h1 id=\"my-project\"><a href=\"#my-project\">My Project</a></h1>"
            ),
            "{}",
            page
        );
        assert!(page.contains("<p>Hello.</p>"));
        assert!(page.contains("href=\"assets/markdown.css\""));
    }

    #[test]
    fn test_generate_title_fallbacks() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("NOTES.md");
        fs::write(&path, "## Only a subheading\n").expect("Should write fixture");
        let renderer = MarkdownRenderer::new();

        // Act
        let from_file = generate(&path, &renderer, None)
            .expect("Should generate page")
            .into_string();
        let explicit = generate(&path, &renderer, Some("Handbook"))
            .expect("Should generate page")
            .into_string();

        // Assert
        assert!(from_file.contains("<title>NOTES.md</title>"), "{}", from_file);
        assert!(explicit.contains("<title>Handbook</title>"), "{}", explicit);
    }

    #[test]
    fn test_generate_missing_file() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let renderer = MarkdownRenderer::new();

        // Act
        let result = generate(dir.path().join("README.md"), &renderer, None);

        // Assert
        assert!(
            matches!(result, Err(Error::Load(LoadError::NotFound { .. }))),
            "{:?}",
            result.map(|m| m.into_string())
        );
    }
}
