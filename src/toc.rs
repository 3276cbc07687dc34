//! Table of contents
//!
//! Builds a TOC list from the `h2`/`h3` headings of the content area and
//! provides the viewport geometry the scroll spy uses to decide which
//! heading is current.

use crate::dom::{ElementId, Page};
use crate::messages::IntersectionEntry;

/// Heading depth included in the TOC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TocLevel {
    H2,
    H3,
}

impl TocLevel {
    fn of(tag: &str) -> Option<Self> {
        match tag {
            "h2" => Some(TocLevel::H2),
            "h3" => Some(TocLevel::H3),
            _ => None,
        }
    }
}

/// One heading listed in the TOC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: TocLevel,
    pub id: String,
    pub title: String,
    pub heading: ElementId,
}

/// Indent applied to `h3` entries
pub const SUBHEADING_INDENT: &str = "1rem";

/// Generate the TOC for `container_class` into `toc_class`.
///
/// Returns `None` when either element is missing. When the container has
/// no headings the TOC element is hidden and an empty list is returned.
/// Headings without an id get `section-{index}`.
pub fn generate_toc(page: &mut Page, container_class: &str, toc_class: &str) -> Option<Vec<TocEntry>> {
    let container = page.find_by_class(page.root(), container_class)?;
    let toc = page.find_by_class(page.root(), toc_class)?;

    let headings = page.find_all_by_tag(container, &["h2", "h3"]);
    if headings.is_empty() {
        page.set_style(toc, "display", "none");
        return Some(Vec::new());
    }

    let list = page.create_element("ul");
    let mut entries = Vec::with_capacity(headings.len());

    for (index, heading) in headings.into_iter().enumerate() {
        let id = match page.id_of(heading) {
            Some(id) => id.to_string(),
            None => {
                let id = format!("section-{}", index);
                page.set_attribute(heading, "id", &id);
                id
            }
        };
        let title = page.text_content(heading);
        let Some(level) = TocLevel::of(page.element(heading).tag()) else {
            continue;
        };

        let li = page.append_element(list, "li");
        if level == TocLevel::H3 {
            page.set_style(li, "padding-left", SUBHEADING_INDENT);
        }
        let a = page.append_element(li, "a");
        page.set_attribute(a, "href", &format!("#{}", id));
        page.append_text(a, &title);

        entries.push(TocEntry {
            level,
            id,
            title,
            heading,
        });
    }

    page.append_child(toc, list);
    tracing::debug!("Generated TOC with {} entries", entries.len());
    Some(entries)
}

// ============================================================================
// Scroll spy geometry
// ============================================================================

/// Fraction of the viewport trimmed from the top of the observer root
pub const ROOT_MARGIN_TOP: f32 = 0.2;
/// Fraction of the viewport trimmed from the bottom of the observer root
pub const ROOT_MARGIN_BOTTOM: f32 = 0.8;

/// Vertical extent of a heading relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingRect {
    pub target: ElementId,
    pub top: f32,
    pub bottom: f32,
}

/// Band of the viewport a heading must touch to count as current
pub fn observer_band(viewport_height: f32) -> (f32, f32) {
    let top = viewport_height * ROOT_MARGIN_TOP;
    let bottom = viewport_height * (1.0 - ROOT_MARGIN_BOTTOM);
    (top, bottom.max(top))
}

/// Intersection state of each heading against the observer band
pub fn intersections(rects: &[HeadingRect], viewport_height: f32) -> Vec<IntersectionEntry> {
    let (band_top, band_bottom) = observer_band(viewport_height);
    rects
        .iter()
        .map(|rect| IntersectionEntry {
            target: rect.target,
            is_intersecting: rect.top <= band_bottom && rect.bottom >= band_top,
        })
        .collect()
}
