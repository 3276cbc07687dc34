//! Tab group update handlers

use super::aria_bool;
use crate::commands::Cmd;
use crate::events::Key;
use crate::messages::TabMsg;
use crate::model::PageModel;

const ACTIVE_CLASS: &str = "active";

/// Handle tab messages
pub fn update_tabs(model: &mut PageModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::Activate { group, index } => {
            activate_tab(model, group, index);
            None
        }

        TabMsg::KeyDown { group, index, key } => {
            let buttons = &model.tabs.get(group)?.buttons;
            let count = buttons.len();
            if count == 0 {
                return None;
            }

            let target = match key {
                Key::ArrowRight => (index + 1) % count,
                Key::ArrowLeft => (index + count - 1) % count,
                Key::Home => 0,
                Key::End => count - 1,
                _ => return None,
            };
            let button = buttons[target];

            Some(Cmd::batch(vec![
                Cmd::PreventDefault,
                Cmd::Click(button),
                Cmd::Focus(button),
            ]))
        }
    }
}

/// Make tab `index` the only active button and panel of its group.
///
/// A button without a panel at the same index still becomes active.
pub fn activate_tab(model: &mut PageModel, group: usize, index: usize) {
    let Some(tabs) = model.tabs.get(group) else {
        tracing::warn!("activate_tab: no tab group {}", group);
        return;
    };
    let page = &mut model.page;

    for button in &tabs.buttons {
        page.remove_class(*button, ACTIVE_CLASS);
    }
    for panel in &tabs.panels {
        page.remove_class(*panel, ACTIVE_CLASS);
    }

    for (i, button) in tabs.buttons.iter().enumerate() {
        page.set_attribute(*button, "aria-selected", aria_bool(i == index));
    }
    if let Some(button) = tabs.buttons.get(index) {
        page.add_class(*button, ACTIVE_CLASS);
    }
    if let Some(panel) = tabs.panels.get(index) {
        page.add_class(*panel, ACTIVE_CLASS);
    }
}
