//! Sidebar navigation helpers
//!
//! Marks the link for the current page and rewrites `./` links for pages
//! nested below the site root.

use crate::dom::{ElementId, Page};

pub const NAV_LINK_CLASS: &str = "nav-link";

/// Add `active` to every nav link whose href the current path ends with.
///
/// The first `./` in the href is ignored, so `./setup.html` matches
/// `/docs/setup.html`. Links without an href are skipped.
pub fn highlight_current_nav(page: &mut Page, current_path: &str) -> Vec<ElementId> {
    let links = page.find_all_by_class(page.root(), NAV_LINK_CLASS);

    let active: Vec<ElementId> = links
        .into_iter()
        .filter(|link| {
            page.attribute(*link, "href")
                .filter(|href| !href.is_empty())
                .is_some_and(|href| current_path.ends_with(&href.replacen("./", "", 1)))
        })
        .collect();

    for link in &active {
        page.add_class(*link, "active");
    }
    active
}

/// Number of directory segments in a path (segments containing `.` are files)
pub fn path_depth(path: &str) -> usize {
    path.split('/')
        .filter(|segment| !segment.is_empty() && !segment.contains('.'))
        .count()
}

/// Prefix every `./` link with one `../` per level of `depth`.
///
/// Returns the number of links rewritten.
pub fn adjust_relative_links(page: &mut Page, depth: usize) -> usize {
    let prefix = "../".repeat(depth);
    let links = page.find_all(page.root(), |el| {
        el.is("a") && el.attribute("href").is_some_and(|href| href.starts_with("./"))
    });

    for link in &links {
        let Some(href) = page.attribute(*link, "href") else {
            continue;
        };
        let adjusted = format!("{}{}", prefix, &href[2..]);
        page.set_attribute(*link, "href", &adjusted);
    }
    links.len()
}
