//! Documentation page shell
//!
//! Wraps rendered markdown in the layout the page behaviours hook into:
//! mobile menu button, sidebar with search and navigation, theme toggle,
//! content area and TOC.

use crate::dom::{ElementId, Page};
use crate::nav::NAV_LINK_CLASS;

use super::builder::append_markdown;

/// One sidebar link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    /// Site-relative link, e.g. `./guides/setup.html`
    pub href: String,
}

/// A titled group of sidebar links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavSection {
    pub title: String,
    pub links: Vec<NavEntry>,
}

/// Static parts of a page around its content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocShell {
    pub site_title: String,
    pub page_title: String,
    pub sections: Vec<NavSection>,
    /// Class of the content element
    pub content_class: String,
    /// Class of the TOC element
    pub toc_class: String,
}

/// Build a complete page for `markdown` inside `shell`
pub fn build_page(markdown: &str, shell: &DocShell) -> Page {
    let mut page = Page::new();
    let root = page.root();
    page.set_attribute(root, "lang", "en");

    let head = page.append_element(root, "head");
    let charset = page.append_element(head, "meta");
    page.set_attribute(charset, "charset", "utf-8");
    let viewport = page.append_element(head, "meta");
    page.set_attribute(viewport, "name", "viewport");
    page.set_attribute(viewport, "content", "width=device-width, initial-scale=1");
    let title = page.append_element(head, "title");
    page.append_text(title, &document_title(shell));

    let body = page.append_element(root, "body");

    let menu_button = page.append_with_class(body, "button", "mobile-menu-btn");
    page.set_attribute(menu_button, "type", "button");
    page.set_attribute(menu_button, "aria-label", "Toggle navigation");
    page.set_attribute(menu_button, "aria-expanded", "false");
    page.append_text(menu_button, "Menu");

    page.append_with_class(body, "div", "sidebar-overlay");
    append_sidebar(&mut page, body, shell);

    let theme_toggle = page.append_with_class(body, "button", "theme-toggle");
    page.set_attribute(theme_toggle, "type", "button");
    page.set_attribute(theme_toggle, "aria-label", "Toggle theme");
    page.append_text(theme_toggle, "Theme");

    let content = page.append_with_class(body, "main", &shell.content_class);
    append_markdown(&mut page, content, markdown);

    page.append_with_class(body, "aside", &shell.toc_class);

    page
}

fn document_title(shell: &DocShell) -> String {
    match (shell.page_title.is_empty(), shell.site_title.is_empty()) {
        (false, false) => format!("{} - {}", shell.page_title, shell.site_title),
        (false, true) => shell.page_title.clone(),
        _ => shell.site_title.clone(),
    }
}

fn append_sidebar(page: &mut Page, body: ElementId, shell: &DocShell) {
    let sidebar = page.append_with_class(body, "aside", "sidebar");

    if !shell.site_title.is_empty() {
        let brand = page.append_with_class(sidebar, "div", "sidebar-title");
        page.append_text(brand, &shell.site_title);
    }

    let search = page.append_with_class(sidebar, "input", "search-input");
    page.set_attribute(search, "type", "search");
    page.set_attribute(search, "placeholder", "Filter pages (Ctrl+K)");

    let nav = page.append_element(sidebar, "nav");
    for section in &shell.sections {
        let group = page.append_with_class(nav, "div", "nav-section");
        if !section.title.is_empty() {
            let title = page.append_with_class(group, "div", "nav-section-title");
            page.append_text(title, &section.title);
        }
        for entry in &section.links {
            let link = page.append_with_class(group, "a", NAV_LINK_CLASS);
            page.set_attribute(link, "href", &entry.href);
            page.append_text(link, &entry.title);
        }
    }
}

/// Text of the first `h1` in the markdown, if any
pub fn markdown_title(markdown: &str) -> Option<String> {
    let mut page = Page::new();
    let root = page.root();
    append_markdown(&mut page, root, markdown);
    page.find_all_by_tag(root, &["h1"])
        .first()
        .map(|heading| page.text_content(*heading).trim().to_string())
        .filter(|title| !title.is_empty())
}
