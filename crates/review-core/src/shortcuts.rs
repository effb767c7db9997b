//! Keyboard shortcuts for moving through the filtered view.

/// Navigation command a shortcut resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
}

/// Where keyboard input is currently going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing editable has focus; keys act as shortcuts.
    #[default]
    Document,
    /// A text field, select or text area has focus; keys are literal input.
    TextInput,
}

pub const NEXT_KEY: char = 'j';
pub const PREV_KEY: char = 'k';

/// Resolve a key press. Shortcuts are inactive while a text input has focus.
pub fn shortcut(key: char, focus: Focus) -> Option<NavCommand> {
    if focus == Focus::TextInput {
        return None;
    }
    match key {
        NEXT_KEY => Some(NavCommand::Next),
        PREV_KEY => Some(NavCommand::Prev),
        _ => None,
    }
}
