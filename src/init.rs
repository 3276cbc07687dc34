//! Page-load initialization
//!
//! Each initializer looks up the elements its component needs, registers
//! handler closures for them and returns the component state. Missing
//! elements make the initializer a no-op.

use crate::config::SiteConfig;
use crate::dom::{ElementId, Page};
use crate::events::{EventType, Key, Listeners};
use crate::messages::{
    AccordionMsg, CopyMsg, MenuMsg, Msg, ScrollMsg, SearchMsg, TabMsg, ThemeMsg,
};
use crate::model::{
    Accordion, AccordionItem, CopyState, MenuState, PageModel, ScrollSpyState, SearchState,
    TabGroup,
};
use crate::nav::highlight_current_nav;
use crate::storage::Storage;
use crate::syntax::{highlight_code_blocks, Highlighter};
use crate::theme::{apply_theme, load_preference};
use crate::toc::generate_toc;

/// Run every initializer against the model, in page-load order.
///
/// Static transforms (highlighting, TOC) run first so the anchors they
/// create are wired for smooth scrolling.
pub fn init_page(
    model: &mut PageModel,
    listeners: &mut Listeners,
    highlighter: &Highlighter,
    storage: &dyn Storage,
) {
    highlight_code_blocks(&mut model.page, highlighter);
    model.toc = init_toc(&mut model.page, &model.config);

    model.menu = init_mobile_menu(&model.page, listeners);
    model.tabs = init_tabs(&model.page, listeners);
    model.accordions = init_accordions(&model.page, listeners);
    model.copy = CopyState::new(init_code_copy(&model.page, listeners));
    model.search = init_search(&model.page, listeners);
    model.anchors = init_smooth_scroll(&model.page, listeners);
    highlight_current_nav(&mut model.page, &model.location);
    model.scroll_spy = init_scroll_spy(&model.page);
    model.theme_toggle = init_theme_toggle(&mut model.page, listeners, storage, &model.config);

    tracing::debug!("Page initialized with {} listeners", listeners.len());
}

fn init_toc(page: &mut Page, config: &SiteConfig) -> Option<Vec<crate::toc::TocEntry>> {
    generate_toc(page, &config.toc_container, &config.toc_target)
}

// ============================================================================
// Mobile Menu
// ============================================================================

pub fn init_mobile_menu(page: &Page, listeners: &mut Listeners) -> Option<MenuState> {
    let button = page.find_by_class(page.root(), "mobile-menu-btn")?;
    let sidebar = page.find_by_class(page.root(), "sidebar")?;
    let overlay = page.find_by_class(page.root(), "sidebar-overlay");

    listeners.on_element(button, EventType::Click, |_| {
        Some(Msg::Menu(MenuMsg::ToggleClicked))
    });

    if let Some(overlay) = overlay {
        listeners.on_element(overlay, EventType::Click, |_| {
            Some(Msg::Menu(MenuMsg::OverlayClicked))
        });
    }

    listeners.on_document(EventType::KeyDown, |event| {
        event
            .key()
            .filter(|key| key.key == Key::Escape)
            .map(|_| Msg::Menu(MenuMsg::EscapePressed))
    });

    Some(MenuState {
        button,
        sidebar,
        overlay,
    })
}

// ============================================================================
// Tabs
// ============================================================================

pub fn init_tabs(page: &Page, listeners: &mut Listeners) -> Vec<TabGroup> {
    let containers = page.find_all_by_class(page.root(), "tabs");
    let mut groups = Vec::with_capacity(containers.len());

    for (group, container) in containers.into_iter().enumerate() {
        let buttons = page.find_all_by_class(container, "tab-button");
        let panels = page.find_all_by_class(container, "tab-panel");

        for (index, button) in buttons.iter().copied().enumerate() {
            listeners.on_element(button, EventType::Click, move |_| {
                Some(Msg::Tabs(TabMsg::Activate { group, index }))
            });
            listeners.on_element(button, EventType::KeyDown, move |event| {
                event
                    .key()
                    .map(|key| Msg::Tabs(TabMsg::KeyDown {
                        group,
                        index,
                        key: key.key,
                    }))
            });
        }

        groups.push(TabGroup {
            container,
            buttons,
            panels,
        });
    }

    groups
}

// ============================================================================
// Accordions
// ============================================================================

pub fn init_accordions(page: &Page, listeners: &mut Listeners) -> Vec<Accordion> {
    let containers = page.find_all_by_class(page.root(), "accordion");
    let mut accordions = Vec::with_capacity(containers.len());

    for container in containers {
        let items: Vec<AccordionItem> = page
            .find_all_by_class(container, "accordion-item")
            .into_iter()
            .map(|item| AccordionItem {
                item,
                header: page.find_by_class(item, "accordion-header"),
            })
            .collect();

        for entry in &items {
            let Some(header) = entry.header else {
                continue;
            };
            let item = entry.item;
            listeners.on_element(header, EventType::Click, move |_| {
                Some(Msg::Accordion(AccordionMsg::Toggle { item, header }))
            });
            listeners.on_element(header, EventType::KeyDown, move |event| {
                event.key().map(|key| {
                    Msg::Accordion(AccordionMsg::HeaderKeyDown {
                        header,
                        key: key.key,
                    })
                })
            });
        }

        accordions.push(Accordion { container, items });
    }

    accordions
}

// ============================================================================
// Code Copy
// ============================================================================

pub fn init_code_copy(page: &Page, listeners: &mut Listeners) -> Vec<ElementId> {
    let buttons = page.find_all_by_class(page.root(), "code-copy");
    for button in buttons.iter().copied() {
        listeners.on_element(button, EventType::Click, move |_| {
            Some(Msg::Copy(CopyMsg::Clicked { button }))
        });
    }
    buttons
}

// ============================================================================
// Sidebar Search
// ============================================================================

pub fn init_search(page: &Page, listeners: &mut Listeners) -> Option<SearchState> {
    let input = page.find_by_class(page.root(), "search-input")?;
    let links = page.find_all_by_class(page.root(), "nav-link");
    let sections = page.find_all_by_class(page.root(), "nav-section");

    listeners.on_element(input, EventType::Input, |event| match &event.kind {
        crate::events::EventKind::Input(value) => {
            Some(Msg::Search(SearchMsg::QueryChanged(value.clone())))
        }
        _ => None,
    });

    // Ctrl/Cmd + K focuses the filter
    listeners.on_document(EventType::KeyDown, |event| {
        event
            .key()
            .filter(|key| {
                (key.modifiers.ctrl() || key.modifiers.meta()) && key.key == Key::Char('k')
            })
            .map(|_| Msg::Search(SearchMsg::FocusShortcut))
    });

    Some(SearchState {
        input,
        links,
        sections,
        pending_query: String::new(),
        generation: 0,
    })
}

// ============================================================================
// Smooth Scroll
// ============================================================================

pub fn init_smooth_scroll(page: &Page, listeners: &mut Listeners) -> Vec<ElementId> {
    let anchors = page.find_all(page.root(), |el| {
        el.is("a") && el.attribute("href").is_some_and(|href| href.starts_with('#'))
    });

    for anchor in anchors.iter().copied() {
        listeners.on_element(anchor, EventType::Click, move |_| {
            Some(Msg::Scroll(ScrollMsg::AnchorClicked { anchor }))
        });
    }

    anchors
}

// ============================================================================
// Scroll Spy
// ============================================================================

/// Collect headings with ids and TOC links; intersection changes arrive
/// later as `ScrollSpyMsg::Observed`.
pub fn init_scroll_spy(page: &Page) -> Option<ScrollSpyState> {
    let headings = page.find_all(page.root(), |el| {
        (el.is("h2") || el.is("h3")) && el.id().is_some()
    });

    let mut links = Vec::new();
    for toc in page.find_all_by_class(page.root(), "toc") {
        links.extend(page.find_all_by_tag(toc, &["a"]));
    }

    if headings.is_empty() || links.is_empty() {
        return None;
    }

    Some(ScrollSpyState { headings, links })
}

// ============================================================================
// Theme Toggle
// ============================================================================

pub fn init_theme_toggle(
    page: &mut Page,
    listeners: &mut Listeners,
    storage: &dyn Storage,
    config: &SiteConfig,
) -> Option<ElementId> {
    let toggle = page.find_by_class(page.root(), "theme-toggle")?;

    let mode = load_preference(storage, config.default_theme);
    apply_theme(page, mode);

    listeners.on_element(toggle, EventType::Click, |_| {
        Some(Msg::Theme(ThemeMsg::ToggleClicked))
    });

    Some(toggle)
}
