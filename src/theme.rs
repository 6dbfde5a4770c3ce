//! Typography theme for rendered documents.
//!
//! Colors and sizes come from the Tailwind palette. All rules are scoped
//! under `.markdown`; the dark palette is applied through
//! `prefers-color-scheme`.

use std::fmt::Write;
use syntect::highlighting::ThemeSet;
use syntect::html::css_for_theme_with_class_style;

use crate::error::RenderError;
use crate::markdown::CLASS_STYLE;

/// Bundled syntect theme closest to GitHub Dark.
pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";

/// Scope selector for every typography rule.
const SCOPE: &str = ".markdown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle {
    pub level: u8,
    pub weight: u16,
    pub size: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Colors that change between light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub link: &'static str,
    pub link_hover: Option<&'static str>,
    pub code: Colors,
    pub pre: Colors,
}

/// Static typography configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub max_width: &'static str,
    pub headings: Vec<HeadingStyle>,
    pub code_padding: &'static str,
    pub code_radius: &'static str,
    pub pre_padding: &'static str,
    pub pre_radius: &'static str,
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            max_width: "100%",
            headings: vec![
                HeadingStyle {
                    level: 1,
                    weight: 700,
                    size: "1.875rem",
                },
                HeadingStyle {
                    level: 2,
                    weight: 600,
                    size: "1.5rem",
                },
                HeadingStyle {
                    level: 3,
                    weight: 600,
                    size: "1.25rem",
                },
            ],
            code_padding: "2px 4px",
            code_radius: "4px",
            pre_padding: "1rem",
            pre_radius: "0.5rem",
            light: Palette {
                text: "#1f2937",
                link: "#2563eb",
                link_hover: Some("#1e40af"),
                code: Colors {
                    background: "#f3f4f6",
                    foreground: "#db2777",
                },
                pre: Colors {
                    background: "#111827",
                    foreground: "#f3f4f6",
                },
            },
            dark: Palette {
                text: "#e5e7eb",
                link: "#2dd4bf",
                link_hover: None,
                code: Colors {
                    background: "#1f2937",
                    foreground: "#4ade80",
                },
                pre: Colors {
                    background: "#1f2937",
                    foreground: "#e5e7eb",
                },
            },
        }
    }
}

impl Theme {
    /// Renders the theme as a stylesheet.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(css, "{SCOPE} {{ max-width: {}; line-height: 1.75; }}", self.max_width);
        for heading in &self.headings {
            let _ = writeln!(
                css,
                "{SCOPE} h{} {{ font-weight: {}; font-size: {}; }}",
                heading.level, heading.weight, heading.size
            );
        }
        let _ = writeln!(
            css,
            "{SCOPE} :not(pre) > code {{ padding: {}; border-radius: {}; }}",
            self.code_padding, self.code_radius
        );
        let _ = writeln!(
            css,
            "{SCOPE} pre {{ padding: {}; border-radius: {}; overflow-x: auto; }}",
            self.pre_padding, self.pre_radius
        );
        let _ = writeln!(css, "{SCOPE} a {{ text-decoration: underline; }}");
        let _ = writeln!(
            css,
            "{SCOPE} h1 > a, {SCOPE} h2 > a, {SCOPE} h3 > a, \
             {SCOPE} h4 > a, {SCOPE} h5 > a, {SCOPE} h6 > a {{ color: inherit; text-decoration: none; }}"
        );

        write_palette(&mut css, &self.light);
        let _ = writeln!(css, "@media (prefers-color-scheme: dark) {{");
        write_palette(&mut css, &self.dark);
        let _ = writeln!(css, "}}");

        css
    }
}

fn write_palette(css: &mut String, palette: &Palette) {
    let _ = writeln!(css, "{SCOPE} {{ color: {}; }}", palette.text);
    let _ = writeln!(css, "{SCOPE} a {{ color: {}; }}", palette.link);
    if let Some(hover) = palette.link_hover {
        let _ = writeln!(css, "{SCOPE} a:hover {{ color: {}; }}", hover);
    }
    let _ = writeln!(
        css,
        "{SCOPE} :not(pre) > code {{ background-color: {}; color: {}; }}",
        palette.code.background, palette.code.foreground
    );
    let _ = writeln!(
        css,
        "{SCOPE} pre {{ background-color: {}; color: {}; }}",
        palette.pre.background, palette.pre.foreground
    );
}

/// Names of the bundled code themes.
pub fn code_theme_names() -> Vec<String> {
    ThemeSet::load_defaults().themes.into_keys().collect()
}

/// Stylesheet coloring `hljs-` classed spans with a bundled syntect theme.
///
/// # Errors
///
/// Returns [`RenderError::UnknownTheme`] if no bundled theme has this name.
pub fn code_theme_css(name: &str) -> Result<String, RenderError> {
    let themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .get(name)
        .ok_or_else(|| RenderError::UnknownTheme {
            name: name.to_string(),
        })?;

    css_for_theme_with_class_style(theme, CLASS_STYLE).map_err(RenderError::Css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_css_light_values() {
        // Arrange
        let theme = Theme::default();

        // Act
        let css = theme.to_css();

        // Assert
        assert!(css.contains(".markdown { max-width: 100%;"), "{}", css);
        assert!(css.contains(".markdown h1 { font-weight: 700; font-size: 1.875rem; }"));
        assert!(css.contains(".markdown h2 { font-weight: 600; font-size: 1.5rem; }"));
        assert!(css.contains(".markdown h3 { font-weight: 600; font-size: 1.25rem; }"));
        assert!(css.contains(".markdown a:hover { color: #1e40af; }"));
        assert!(css.contains("background-color: #f3f4f6; color: #db2777;"));
        assert!(css.contains("background-color: #111827; color: #f3f4f6;"));
    }

    #[test]
    fn test_theme_css_dark_variant() {
        // Arrange
        let theme = Theme::default();

        // Act
        let css = theme.to_css();
        let (_, dark) = css
            .split_once("@media (prefers-color-scheme: dark) {")
            .expect("Should contain dark media query");

        // Assert
        assert!(dark.contains(".markdown { color: #e5e7eb; }"), "{}", dark);
        assert!(dark.contains(".markdown a { color: #2dd4bf; }"));
        assert!(dark.contains("background-color: #1f2937; color: #4ade80;"));
        assert!(!dark.contains("a:hover"), "Dark palette has no hover override");
    }

    #[test]
    fn test_code_theme_css_default() {
        // Arrange & Act
        let css = code_theme_css(DEFAULT_CODE_THEME).expect("Default theme should exist");

        // Assert
        assert!(css.contains(".hljs-"), "Should use hljs- class prefix");
    }

    #[test]
    fn test_code_theme_css_unknown() {
        // Arrange & Act
        let result = code_theme_css("No Such Theme");

        // Assert
        assert!(matches!(result, Err(RenderError::UnknownTheme { .. })));
    }

    #[test]
    fn test_code_theme_names_contains_default() {
        // Arrange & Act
        let names = code_theme_names();

        // Assert
        assert!(names.iter().any(|name| name == DEFAULT_CODE_THEME));
    }
}
