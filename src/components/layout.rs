//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport and stylesheet links. The body is a
/// single padded, full height `page` container; background follows the
/// reader's color scheme through `page.css`.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheets`: CSS file paths to include
/// * `body`: Page-specific body markup
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="color-scheme" content="light dark";
                title { (title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="page" {
                    (body)
                }
            }
        }
    }
}
