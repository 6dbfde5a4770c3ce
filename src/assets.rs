//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::theme::{Theme, code_theme_css};

const PAGE: &str = include_str!("../assets/page.css");

/// Writes `page.css` and `markdown.css` to the assets directory
///
/// `markdown.css` bundles the typography theme with the code colors of the
/// named syntect theme.
pub fn write_css_assets(assets_dir: &Path, theme: &Theme, code_theme: &str) -> Result<()> {
    let code_css = code_theme_css(code_theme)
        .with_context(|| format!("Failed to build code theme: {}", code_theme))?;

    write_bundled(assets_dir, "page.css", &[PAGE])?;
    write_bundled(assets_dir, "markdown.css", &[&theme.to_css(), &code_css])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
