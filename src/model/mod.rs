//! Page model - the complete state of an interactive page
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod components;

pub use components::{
    Accordion, AccordionItem, CopyFeedback, CopyState, MenuState, ScrollSpyState, SearchState,
    TabGroup,
};

use crate::config::SiteConfig;
use crate::dom::{ElementId, Page};
use crate::toc::TocEntry;

/// The complete page model
#[derive(Debug, Clone)]
pub struct PageModel {
    /// Element tree being mutated
    pub page: Page,
    /// Site configuration
    pub config: SiteConfig,
    /// Path of the current page (e.g. `/guides/setup.html`)
    pub location: String,
    /// Mobile menu, if the page has one
    pub menu: Option<MenuState>,
    /// Tab groups in document order
    pub tabs: Vec<TabGroup>,
    /// Accordions in document order
    pub accordions: Vec<Accordion>,
    /// Copy buttons and feedback state
    pub copy: CopyState,
    /// Sidebar filter, if the page has a search input
    pub search: Option<SearchState>,
    /// In-page anchors wired for smooth scrolling
    pub anchors: Vec<ElementId>,
    /// Generated table of contents
    pub toc: Option<Vec<TocEntry>>,
    /// Scroll spy, if there are headings and TOC links
    pub scroll_spy: Option<ScrollSpyState>,
    /// Theme toggle button
    pub theme_toggle: Option<ElementId>,
}

impl PageModel {
    /// Wrap a page before any initializer has run
    pub fn new(page: Page, config: SiteConfig, location: &str) -> Self {
        Self {
            page,
            config,
            location: location.to_string(),
            menu: None,
            tabs: Vec::new(),
            accordions: Vec::new(),
            copy: CopyState::default(),
            search: None,
            anchors: Vec::new(),
            toc: None,
            scroll_spy: None,
            theme_toggle: None,
        }
    }
}
