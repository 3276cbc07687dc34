//! Mobile menu update handlers

use super::aria_bool;
use crate::commands::Cmd;
use crate::messages::MenuMsg;
use crate::model::{MenuState, PageModel};

const OPEN_CLASS: &str = "open";

/// Handle mobile menu messages
pub fn update_menu(model: &mut PageModel, msg: MenuMsg) -> Option<Cmd> {
    let menu = model.menu?;
    let page = &mut model.page;

    match msg {
        MenuMsg::ToggleClicked => {
            page.toggle_class(menu.sidebar, OPEN_CLASS);
            if let Some(overlay) = menu.overlay {
                page.toggle_class(overlay, OPEN_CLASS);
            }
            let is_open = page.has_class(menu.sidebar, OPEN_CLASS);
            page.set_attribute(menu.button, "aria-expanded", aria_bool(is_open));
        }

        MenuMsg::OverlayClicked => close_menu(page, menu),

        MenuMsg::EscapePressed => {
            if page.has_class(menu.sidebar, OPEN_CLASS) {
                close_menu(page, menu);
            }
        }
    }

    None
}

fn close_menu(page: &mut crate::dom::Page, menu: MenuState) {
    page.remove_class(menu.sidebar, OPEN_CLASS);
    if let Some(overlay) = menu.overlay {
        page.remove_class(overlay, OPEN_CLASS);
    }
    page.set_attribute(menu.button, "aria-expanded", "false");
}
