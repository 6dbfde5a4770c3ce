//! Pipeline configuration.

use clap::ValueEnum;

/// A transform applied to the rendered document.
///
/// Declaration order is the order the pipeline applies them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transform {
    /// Syntax highlight fenced code blocks.
    Highlight,
    /// Give every heading a unique `id`.
    Slug,
    /// Link every heading with an `id` to itself.
    AutolinkHeadings,
}

impl Transform {
    pub const ALL: [Transform; 3] = [
        Transform::Highlight,
        Transform::Slug,
        Transform::AutolinkHeadings,
    ];
}

/// Where the self-link goes relative to the heading content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AnchorBehavior {
    /// Heading content becomes the link text.
    #[default]
    Wrap,
    /// Empty icon link before the content.
    Prepend,
    /// Empty icon link after the content.
    Append,
}

/// Transforms to run and their settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub transforms: Vec<Transform>,
    pub anchor: AnchorBehavior,
}

impl RenderOptions {
    /// Options with only the given transforms enabled.
    ///
    /// The order of `transforms` does not matter.
    pub fn with_transforms(transforms: impl IntoIterator<Item = Transform>) -> Self {
        Self {
            transforms: transforms.into_iter().collect(),
            anchor: AnchorBehavior::default(),
        }
    }

    /// Options with no transforms: plain GFM output.
    pub fn plain() -> Self {
        Self::with_transforms([])
    }

    pub fn anchor(mut self, anchor: AnchorBehavior) -> Self {
        self.anchor = anchor;
        self
    }

    /// Removes a transform if present.
    pub fn without(mut self, transform: Transform) -> Self {
        self.transforms.retain(|t| *t != transform);
        self
    }

    pub fn is_enabled(&self, transform: Transform) -> bool {
        self.transforms.contains(&transform)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::with_transforms(Transform::ALL)
    }
}
