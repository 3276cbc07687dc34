//! Accordion update handlers

use super::aria_bool;
use crate::commands::Cmd;
use crate::events::Key;
use crate::messages::AccordionMsg;
use crate::model::PageModel;

/// Handle accordion messages.
///
/// Items toggle independently; opening one never closes another.
pub fn update_accordion(model: &mut PageModel, msg: AccordionMsg) -> Option<Cmd> {
    match msg {
        AccordionMsg::Toggle { item, header } => {
            let page = &mut model.page;
            let is_open = page.toggle_class(item, "active");
            page.set_attribute(header, "aria-expanded", aria_bool(is_open));
            None
        }

        AccordionMsg::HeaderKeyDown { header, key } => match key {
            Key::Enter | Key::Space => Some(Cmd::batch(vec![
                Cmd::PreventDefault,
                Cmd::Click(header),
            ])),
            _ => None,
        },
    }
}
