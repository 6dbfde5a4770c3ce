//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::document::README_FILE;
use crate::markdown::{AnchorBehavior, RenderOptions, Transform};
use crate::theme::{DEFAULT_CODE_THEME, code_theme_names};

/// Command line configuration for docpage.
#[derive(Debug, Clone, Parser)]
#[command(name = "docpage", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to render
    #[arg(default_value = README_FILE)]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page title (defaults to the first level 1 heading)
    #[arg(long)]
    pub title: Option<String>,

    /// Code highlighting theme (base16-ocean.dark, InspiredGitHub, etc.)
    #[arg(long, default_value = DEFAULT_CODE_THEME)]
    pub code_theme: String,

    /// Placement of heading self-links
    #[arg(long, value_enum, default_value_t = AnchorBehavior::Wrap)]
    pub anchor: AnchorBehavior,

    /// Disable code block highlighting
    #[arg(long)]
    pub no_highlight: bool,

    /// Print the rendered HTML fragment to stdout instead of writing a page
    #[arg(long)]
    pub fragment: bool,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the code theme is not a bundled theme.
    pub fn validate(&self) -> Result<()> {
        let themes = code_theme_names();
        if !themes.iter().any(|name| name == &self.code_theme) {
            bail!(
                "Unknown code theme: {} (available: {})",
                self.code_theme,
                themes.join(", ")
            );
        }

        Ok(())
    }

    /// Pipeline options selected by the flags.
    pub fn render_options(&self) -> RenderOptions {
        let options = RenderOptions::default().anchor(self.anchor);
        if self.no_highlight {
            options.without(Transform::Highlight)
        } else {
            options
        }
    }
}
