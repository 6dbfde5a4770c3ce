//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module renders markdown using comrak with GFM extensions (tables,
//! strikethrough, autolinks, task lists, footnotes), then runs the enabled
//! transforms over the serialized output in a fixed order: code block
//! highlighting, heading slugs, heading anchor links.

mod headings;
mod highlight;
mod html;
mod options;
mod renderer;
mod slug;

pub use headings::Heading;
pub(crate) use highlight::CLASS_STYLE;
pub use options::{AnchorBehavior, RenderOptions, Transform};
pub use renderer::{MarkdownRenderer, RenderedDocument};
pub use slug::{Slugger, slugify};
