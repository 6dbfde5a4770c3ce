//! Render a markdown README as a styled HTML page.

mod assets;
pub mod components;
mod config;
mod document;
mod error;
mod markdown;
pub mod pages;
mod theme;

pub use assets::write_css_assets;
pub use config::Config;
pub use document::{Document, README_FILE};
pub use error::{Error, LoadError, RenderError};
pub use markdown::{
    AnchorBehavior, Heading, MarkdownRenderer, RenderOptions, RenderedDocument, Slugger,
    Transform, slugify,
};
pub use theme::{DEFAULT_CODE_THEME, Theme, code_theme_css, code_theme_names};
