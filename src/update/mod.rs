//! Update functions for the Elm-style architecture
//!
//! All page mutations flow through these functions.

mod accordion;
mod copy;
mod menu;
mod scroll;
mod search;
mod tabs;
mod theme;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PageModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use accordion::update_accordion;
pub use copy::{update_copy, COPIED_LABEL};
pub use menu::update_menu;
pub use scroll::{update_scroll, update_scroll_spy};
pub use search::{filter_nav, update_search};
pub use tabs::{activate_tab, update_tabs};
pub use theme::update_theme;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch.
#[inline]
pub fn update(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Tabs(m) => tabs::update_tabs(model, m),
        Msg::Accordion(m) => accordion::update_accordion(model, m),
        Msg::Copy(m) => copy::update_copy(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::Scroll(m) => scroll::update_scroll(model, m),
        Msg::ScrollSpy(m) => scroll::update_scroll_spy(model, m),
        Msg::Theme(m) => theme::update_theme(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    if let Some(ref cmd) = result {
        debug!(target: "message", ?cmd, "command");
    }
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Menu::ToggleClicked`
/// - `Tabs::Activate { group: 0, index: 2 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Tabs(m) => format!("Tabs::{:?}", m),
        Msg::Accordion(m) => format!("Accordion::{:?}", m),
        Msg::Copy(m) => format!("Copy::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Scroll(m) => format!("Scroll::{:?}", m),
        Msg::ScrollSpy(m) => format!("ScrollSpy::{:?}", m),
        Msg::Theme(m) => format!("Theme::{:?}", m),
    }
}

/// `aria-*` boolean value
pub(crate) fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
