//! TextFieldEditor: typing by rewriting the focused field's text.
//!
//! Apps that ignore injected keys still accept "set text" on their editable
//! fields.  Typing a character becomes read, append, write back; the delete
//! key becomes read, drop the last character, write back.  The cursor is not
//! modelled: text always goes at the end.

use kiosk_input_core::keymap::virtual_keyboard;
use kiosk_input_core::{Command, FocusKind, NodeAction};
use tracing::{debug, warn};

use crate::application::host::{AccessibilityHost, HostError};
use crate::application::strategy::InjectionStrategy;
use crate::application::ui_tree::{UiElement, UiTree};

#[derive(Debug, Default, Clone, Copy)]
pub struct TextFieldEditor;

impl TextFieldEditor {
    /// Appends `suffix` to the focused field.
    pub fn append(&self, host: &dyn AccessibilityHost, suffix: &str) -> Result<bool, HostError> {
        Self::edit(host, |text| {
            text.push_str(suffix);
            true
        })
    }

    /// Removes the last character of the focused field.  Returns `false`
    /// without writing when the field is already empty.
    pub fn delete_last_char(&self, host: &dyn AccessibilityHost) -> Result<bool, HostError> {
        Self::edit(host, |text| text.pop().is_some())
    }

    /// Runs `change` on the focused field's text and writes it back if
    /// `change` returns `true`.
    fn edit(
        host: &dyn AccessibilityHost,
        change: impl FnOnce(&mut String) -> bool,
    ) -> Result<bool, HostError> {
        let Some(tree) = UiTree::active(host)? else {
            return Ok(false);
        };
        let Some(field) = Self::focused_field(&tree)? else {
            debug!("no editable field has input focus");
            return Ok(false);
        };

        let mut text = field.info()?.text.unwrap_or_default();
        if !change(&mut text) {
            debug!("field is empty; nothing to delete");
            return Ok(false);
        }
        field.perform(&NodeAction::SetText(text))
    }

    fn focused_field<'h>(tree: &UiTree<'h>) -> Result<Option<UiElement<'h>>, HostError> {
        let Some(element) = tree.find_focus(FocusKind::Input)? else {
            return Ok(None);
        };
        if element.info()?.flags.editable() {
            Ok(Some(element))
        } else {
            Ok(None)
        }
    }
}

impl InjectionStrategy for TextFieldEditor {
    fn name(&self) -> &'static str {
        "text_field"
    }

    fn try_inject(&self, host: &dyn AccessibilityHost, command: &Command) -> Option<bool> {
        let result = match command {
            Command::TextInsert { text } => self.append(host, text),
            Command::KeyPress { code, modifiers } if code.is_delete() && modifiers.is_empty() => {
                self.delete_last_char(host)
            }
            Command::KeyPress { code, modifiers }
                if modifiers.is_empty() || modifiers.is_shift_only() =>
            {
                let ch = virtual_keyboard::to_char(*code, *modifiers)?;
                self.append(host, ch.encode_utf8(&mut [0u8; 4]))
            }
            Command::KeyPress { .. } | Command::Action { .. } => return None,
        };

        match result {
            Ok(delivered) => Some(delivered),
            Err(e) => {
                warn!(error = %e, "text field edit failed");
                Some(false)
            }
        }
    }
}
