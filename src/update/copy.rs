//! Code copy update handlers
//!
//! A click reads the code text of the enclosing `.code-block` and asks the
//! runtime to write it to the clipboard. The result swaps the button label
//! for feedback that reverts after the configured delay.

use crate::commands::Cmd;
use crate::messages::{CopyMsg, Msg};
use crate::model::{CopyFeedback, PageModel};
use crate::syntax::CODE_BLOCK_CLASS;

/// Button markup shown after a successful copy
pub const COPIED_LABEL: &str = concat!(
    r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">"#,
    r#"<polyline points="20 6 9 17 4 12"></polyline>"#,
    "</svg>",
    "Copied!"
);

/// Button text shown when the clipboard write fails
pub const FAILED_LABEL: &str = "Failed";

const COPIED_CLASS: &str = "copied";

/// Handle copy button messages
pub fn update_copy(model: &mut PageModel, msg: CopyMsg) -> Option<Cmd> {
    match msg {
        CopyMsg::Clicked { button } => {
            let page = &model.page;
            let text = page
                .closest_by_class(button, CODE_BLOCK_CLASS)
                .and_then(|block| page.code_element(block))
                .map(|code| page.text_content(code))
                .unwrap_or_default();

            if text.is_empty() {
                tracing::debug!("Copy button {:?} has no code to copy", button);
                return None;
            }

            Some(Cmd::WriteClipboard { button, text })
        }

        CopyMsg::Completed { button, result } => {
            // Keep the first label if feedback is already showing
            let original = match model.copy.feedback.get(&button) {
                Some(pending) => pending.original.clone(),
                None => model.page.inner_html(button),
            };
            let generation = model.copy.next_generation();
            model
                .copy
                .feedback
                .insert(button, CopyFeedback { original, generation });

            match result {
                Ok(()) => {
                    model.page.set_inner_html(button, COPIED_LABEL);
                    model.page.add_class(button, COPIED_CLASS);
                }
                Err(err) => {
                    tracing::error!("Failed to copy: {}", err);
                    model.page.set_text(button, FAILED_LABEL);
                }
            }

            Some(Cmd::schedule(
                model.config.copy_feedback(),
                Msg::Copy(CopyMsg::Revert { button, generation }),
            ))
        }

        CopyMsg::Revert { button, generation } => {
            let current = model.copy.feedback.get(&button).map(|f| f.generation);
            if current != Some(generation) {
                tracing::debug!(
                    "Skipping stale copy revert: generation {} != {:?}",
                    generation,
                    current
                );
                return None;
            }

            if let Some(feedback) = model.copy.feedback.remove(&button) {
                model.page.set_inner_html(button, &feedback.original);
                model.page.remove_class(button, COPIED_CLASS);
            }
            None
        }
    }
}
