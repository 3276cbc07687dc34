//! Message types for the Elm-style architecture
//!
//! Event handlers translate page events into these messages; all page
//! mutation flows through [`crate::update::update`].

use crate::dom::ElementId;
use crate::events::Key;

/// Mobile menu messages
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Menu button clicked: toggle sidebar and overlay
    ToggleClicked,
    /// Overlay clicked: close the menu
    OverlayClicked,
    /// Escape pressed anywhere on the page
    EscapePressed,
}

/// Tab group messages
#[derive(Debug, Clone, PartialEq)]
pub enum TabMsg {
    /// Tab button clicked
    Activate { group: usize, index: usize },
    /// Arrow/Home/End on a tab button
    KeyDown { group: usize, index: usize, key: Key },
}

/// Accordion messages
#[derive(Debug, Clone, PartialEq)]
pub enum AccordionMsg {
    /// Header clicked: toggle this item only
    Toggle { item: ElementId, header: ElementId },
    /// Enter/Space on a header
    HeaderKeyDown { header: ElementId, key: Key },
}

/// Copy-button messages
#[derive(Debug, Clone, PartialEq)]
pub enum CopyMsg {
    /// Copy button clicked
    Clicked { button: ElementId },
    /// Clipboard write finished
    Completed {
        button: ElementId,
        result: Result<(), String>,
    },
    /// Feedback delay elapsed; restore the button if still current
    Revert { button: ElementId, generation: u64 },
}

/// Sidebar filter messages
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMsg {
    /// Search field edited
    QueryChanged(String),
    /// Debounce elapsed for the query at `generation`
    Apply { generation: u64 },
    /// Ctrl/Cmd+K pressed
    FocusShortcut,
}

/// In-page anchor navigation
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollMsg {
    /// `a[href^="#"]` clicked
    AnchorClicked { anchor: ElementId },
}

/// Visibility change reported for an observed heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

/// Scroll-spy messages
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollSpyMsg {
    /// Batch of intersection changes, in observation order
    Observed(Vec<IntersectionEntry>),
}

/// Theme toggle messages
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeMsg {
    ToggleClicked,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Menu(MenuMsg),
    Tabs(TabMsg),
    Accordion(AccordionMsg),
    Copy(CopyMsg),
    Search(SearchMsg),
    Scroll(ScrollMsg),
    ScrollSpy(ScrollSpyMsg),
    Theme(ThemeMsg),
}
