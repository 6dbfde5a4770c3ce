//! Heading slugs and self-links.

use super::html::{escape, text_content};
use super::options::AnchorBehavior;
use super::slug::Slugger;

/// Icon link inserted by the prepend and append behaviours.
const ICON_LINK_CONTENT: &str = "<span class=\"icon icon-link\"></span>";

/// A heading found in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: Option<String>,
}

/// What to do with each heading.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadingPass {
    pub(crate) slug: bool,
    pub(crate) autolink: Option<AnchorBehavior>,
}

impl HeadingPass {
    /// Rewrites `<hN>` elements in comrak output and collects the outline.
    ///
    /// Comrak writes headings as bare `<hN>...</hN>` with escaped text, and
    /// raw HTML is omitted, so every such tag is a real heading.
    pub(crate) fn apply(&self, html: &str) -> (String, Vec<Heading>) {
        let mut result = String::with_capacity(html.len());
        let mut headings = Vec::new();
        let mut slugger = Slugger::new();
        let mut pos = 0;

        while let Some((start, level)) = find_heading_open(html, pos) {
            let content_start = start + "<h1>".len();
            let close = format!("</h{}>", level);
            let Some(content_end) = html[content_start..].find(&close).map(|p| content_start + p)
            else {
                break;
            };

            let inner = &html[content_start..content_end];
            let text = text_content(inner);
            let id = if self.slug { slugger.slug(&text) } else { None };

            result.push_str(&html[pos..start]);
            result.push_str(&self.rewrite(level, inner, id.as_deref()));

            headings.push(Heading { level, text, id });
            pos = content_end + close.len();
        }

        result.push_str(&html[pos..]);
        (result, headings)
    }

    fn rewrite(&self, level: u8, inner: &str, id: Option<&str>) -> String {
        let Some(id) = id else {
            return format!("<h{level}>{inner}</h{level}>");
        };
        let id = escape(id);

        let content = match self.autolink {
            None => inner.to_string(),
            Some(AnchorBehavior::Wrap) => format!("<a href=\"#{id}\">{inner}</a>"),
            Some(AnchorBehavior::Prepend) => format!("{}{inner}", icon_link(&id)),
            Some(AnchorBehavior::Append) => format!("{inner}{}", icon_link(&id)),
        };

        format!("<h{level} id=\"{id}\">{content}</h{level}>")
    }
}

fn icon_link(id: &str) -> String {
    format!("<a aria-hidden=\"true\" tabindex=\"-1\" href=\"#{id}\">{ICON_LINK_CONTENT}</a>")
}

/// Finds the next `<hN>` opening tag at or after `from`.
fn find_heading_open(html: &str, from: usize) -> Option<(usize, u8)> {
    let bytes = html.as_bytes();
    let mut search = from;

    while let Some(offset) = html[search..].find("<h") {
        let start = search + offset;
        if let (Some(&digit), Some(&b'>')) = (bytes.get(start + 2), bytes.get(start + 3))
            && (b'1'..=b'6').contains(&digit)
        {
            return Some((start, digit - b'0'));
        }
        search = start + 2;
    }

    None
}
