//! Theme toggle update handler

use crate::commands::Cmd;
use crate::messages::ThemeMsg;
use crate::model::PageModel;
use crate::theme::{apply_theme, current_theme, ThemeMode};

/// Flip the page theme and ask the runtime to persist it
pub fn update_theme(model: &mut PageModel, msg: ThemeMsg) -> Option<Cmd> {
    match msg {
        ThemeMsg::ToggleClicked => {
            let next = ThemeMode::next_after(current_theme(&model.page));
            apply_theme(&mut model.page, next);
            tracing::debug!("Theme switched to {}", next);
            Some(Cmd::PersistTheme(next))
        }
    }
}
