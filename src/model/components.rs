//! Per-component state captured at page load
//!
//! Each initializer records the elements it found. A component whose
//! required elements are missing has no state and never receives events.

use std::collections::HashMap;

use crate::dom::ElementId;

// ============================================================================
// Mobile Menu
// ============================================================================

/// Elements driving the mobile sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub button: ElementId,
    pub sidebar: ElementId,
    pub overlay: Option<ElementId>,
}

// ============================================================================
// Tabs
// ============================================================================

/// One `.tabs` container; buttons and panels pair up by index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabGroup {
    pub container: ElementId,
    pub buttons: Vec<ElementId>,
    pub panels: Vec<ElementId>,
}

impl TabGroup {
    /// Index of the button marked `active`, if any
    pub fn active_index(&self, page: &crate::dom::Page) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| page.has_class(*button, "active"))
    }
}

// ============================================================================
// Accordions
// ============================================================================

/// One `.accordion-item` and its optional header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionItem {
    pub item: ElementId,
    pub header: Option<ElementId>,
}

/// One `.accordion` container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    pub container: ElementId,
    pub items: Vec<AccordionItem>,
}

// ============================================================================
// Copy Buttons
// ============================================================================

/// Button label saved while feedback is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    /// Markup to restore when the feedback expires
    pub original: String,
    /// Identifies the revert that may restore this label
    pub generation: u64,
}

/// Copy buttons and their pending feedback
#[derive(Debug, Clone, Default)]
pub struct CopyState {
    pub buttons: Vec<ElementId>,
    pub feedback: HashMap<ElementId, CopyFeedback>,
    next_generation: u64,
}

impl CopyState {
    pub fn new(buttons: Vec<ElementId>) -> Self {
        Self {
            buttons,
            ..Self::default()
        }
    }

    /// Allocate a generation for a new feedback period
    pub fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

// ============================================================================
// Sidebar Search
// ============================================================================

/// Sidebar filter elements and debounce bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub input: ElementId,
    pub links: Vec<ElementId>,
    pub sections: Vec<ElementId>,
    /// Query waiting for its debounce to elapse
    pub pending_query: String,
    /// Bumped on every edit; stale debounces are dropped
    pub generation: u64,
}

// ============================================================================
// Scroll Spy
// ============================================================================

/// Observed headings and the TOC links they light up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollSpyState {
    pub headings: Vec<ElementId>,
    pub links: Vec<ElementId>,
}
