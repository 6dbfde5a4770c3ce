//! Heading slugs compatible with GitHub's anchors.

use std::collections::HashMap;

/// Converts heading text to a URL-safe slug.
///
/// Lowercases, drops everything except letters, digits, `-`, `_` and
/// spaces, then turns each space into `-`. Runs of spaces are kept as runs
/// of dashes, as GitHub does.
pub fn slugify(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Hands out unique slugs for one document.
///
/// Repeats get a numeric suffix (`foo`, `foo-1`, `foo-2`), skipping any
/// suffixed slug already taken by an earlier heading.
#[derive(Debug, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique slug for `text`, or `None` when the text
    /// has no sluggable characters.
    pub fn slug(&mut self, text: &str) -> Option<String> {
        let base = slugify(text);
        if base.is_empty() {
            return None;
        }

        let mut slug = base.clone();
        while self.occurrences.contains_key(&slug) {
            let count = self.occurrences.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{}-{}", base, count);
        }

        self.occurrences.insert(slug.clone(), 0);
        Some(slug)
    }
}
