//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use docsite::config::SiteConfig;
use docsite::dom::{ElementId, Page};
use docsite::runtime::{HeadlessPlatform, Runtime};
use docsite::storage::MemoryStorage;

pub type TestRuntime = Runtime<HeadlessPlatform, MemoryStorage>;

/// Handles to the interesting elements of [`sample_page`]
#[derive(Debug, Clone)]
pub struct SampleIds {
    pub menu_button: ElementId,
    pub overlay: ElementId,
    pub sidebar: ElementId,
    pub search: ElementId,
    pub section_titles: Vec<ElementId>,
    pub nav_links: Vec<ElementId>,
    pub theme_toggle: ElementId,
    pub content: ElementId,
    pub headings: Vec<ElementId>,
    pub jump_anchor: ElementId,
    pub top_anchor: ElementId,
    pub tab_buttons: Vec<ElementId>,
    pub tab_panels: Vec<ElementId>,
    pub accordion_items: Vec<ElementId>,
    pub accordion_headers: Vec<ElementId>,
    pub copy_buttons: Vec<ElementId>,
    pub code_pres: Vec<ElementId>,
    pub toc: ElementId,
}

/// A documentation page exercising every behaviour.
///
/// Nav sections: "Getting Started" (Introduction, Installation) and
/// "Reference" (SQL Queries, KQL Queries). Content has headings
/// `Overview` (h2), `Install steps` (h3 with id `install-steps`) and
/// `Next steps` (h2), one tab group of three, one accordion of three, a SQL
/// code block and an untagged one.
pub fn sample_page() -> (Page, SampleIds) {
    let mut page = Page::new();
    let body = page.append_element(page.root(), "body");

    let menu_button = page.append_with_class(body, "button", "mobile-menu-btn");
    page.set_attribute(menu_button, "aria-expanded", "false");
    let overlay = page.append_with_class(body, "div", "sidebar-overlay");

    let sidebar = page.append_with_class(body, "aside", "sidebar");
    let search = page.append_with_class(sidebar, "input", "search-input");
    let nav = page.append_element(sidebar, "nav");

    let mut section_titles = Vec::new();
    let mut nav_links = Vec::new();
    for (title, links) in [
        (
            "Getting Started",
            [("Introduction", "./index.html"), ("Installation", "./install.html")],
        ),
        (
            "Reference",
            [
                ("SQL Queries", "./reference/sql.html"),
                ("KQL Queries", "./reference/kql.html"),
            ],
        ),
    ] {
        let section = page.append_with_class(nav, "div", "nav-section");
        let heading = page.append_with_class(section, "div", "nav-section-title");
        page.append_text(heading, title);
        section_titles.push(heading);
        for (text, href) in links {
            let link = page.append_with_class(section, "a", "nav-link");
            page.set_attribute(link, "href", href);
            page.append_text(link, text);
            nav_links.push(link);
        }
    }

    let theme_toggle = page.append_with_class(body, "button", "theme-toggle");
    let content = page.append_with_class(body, "main", "content-wrapper");

    let overview = page.append_element(content, "h2");
    page.append_text(overview, "Overview");

    let paragraph = page.append_element(content, "p");
    let jump_anchor = page.append_element(paragraph, "a");
    page.set_attribute(jump_anchor, "href", "#install-steps");
    page.append_text(jump_anchor, "Jump to install");
    let top_anchor = page.append_element(paragraph, "a");
    page.set_attribute(top_anchor, "href", "#");
    page.append_text(top_anchor, "Top");

    let tabs = page.append_with_class(content, "div", "tabs");
    let mut tab_buttons = Vec::new();
    for (i, label) in ["PowerShell", "Bash", "SQL"].into_iter().enumerate() {
        let classes = if i == 0 { "tab-button active" } else { "tab-button" };
        let button = page.append_with_class(tabs, "button", classes);
        page.append_text(button, label);
        tab_buttons.push(button);
    }
    let mut tab_panels = Vec::new();
    for i in 0..3 {
        let classes = if i == 0 { "tab-panel active" } else { "tab-panel" };
        tab_panels.push(page.append_with_class(tabs, "div", classes));
    }

    let install = page.append_element(content, "h3");
    page.set_attribute(install, "id", "install-steps");
    page.append_text(install, "Install steps");

    let accordion = page.append_with_class(content, "div", "accordion");
    let mut accordion_items = Vec::new();
    let mut accordion_headers = Vec::new();
    for question in ["Requirements?", "Upgrades?", "Uninstall?"] {
        let item = page.append_with_class(accordion, "div", "accordion-item");
        let header = page.append_with_class(item, "button", "accordion-header");
        page.set_attribute(header, "aria-expanded", "false");
        page.append_text(header, question);
        page.append_with_class(item, "div", "accordion-content");
        accordion_items.push(item);
        accordion_headers.push(header);
    }

    let mut copy_buttons = Vec::new();
    let mut code_pres = Vec::new();
    for (language, code) in [
        (Some("sql"), "SELECT * FROM t -- all rows"),
        (None, "plain text"),
    ] {
        let block = page.append_with_class(content, "div", "code-block");
        if let Some(language) = language {
            page.set_attribute(block, "data-language", language);
        }
        let header = page.append_with_class(block, "div", "code-header");
        let button = page.append_with_class(header, "button", "code-copy");
        page.append_text(button, "Copy");
        let pre = page.append_element(block, "pre");
        let code_el = page.append_element(pre, "code");
        page.append_text(code_el, code);
        copy_buttons.push(button);
        code_pres.push(pre);
    }

    let next = page.append_element(content, "h2");
    page.append_text(next, "Next steps");

    let toc = page.append_with_class(body, "aside", "toc");

    let ids = SampleIds {
        menu_button,
        overlay,
        sidebar,
        search,
        section_titles,
        nav_links,
        theme_toggle,
        content,
        headings: vec![overview, install, next],
        jump_anchor,
        top_anchor,
        tab_buttons,
        tab_panels,
        accordion_items,
        accordion_headers,
        copy_buttons,
        code_pres,
        toc,
    };
    (page, ids)
}

/// Load the sample page with default config at `/index.html`
pub fn load_sample() -> (TestRuntime, SampleIds) {
    load_sample_with(SiteConfig::default(), HeadlessPlatform::new(), MemoryStorage::new())
}

pub fn load_sample_with(
    config: SiteConfig,
    platform: HeadlessPlatform,
    storage: MemoryStorage,
) -> (TestRuntime, SampleIds) {
    let (page, ids) = sample_page();
    let runtime = Runtime::load(page, config, "/index.html", platform, storage);
    (runtime, ids)
}

/// Positions in `ids` of the elements carrying `class`
pub fn with_class(runtime: &TestRuntime, ids: &[ElementId], class: &str) -> Vec<usize> {
    ids.iter()
        .enumerate()
        .filter(|(_, id)| runtime.page().has_class(**id, class))
        .map(|(i, _)| i)
        .collect()
}
