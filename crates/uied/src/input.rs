//! Backend-agnostic input events
//!
//! Windowing backends convert their native events into [`InputEvent`]s and
//! feed them to [`Ui::dispatch`](crate::Ui::dispatch) one at a time.

use crate::Point;

/// Character codes with special meaning to text elements
pub mod keys {
    /// Removes the last character
    pub const BACKSPACE: char = '\u{8}';
    /// Submits a terminal line
    pub const ENTER: char = '\r';
    /// Lowest code appended verbatim to a text buffer
    pub const PRINTABLE_MIN: char = ' ';
}

/// A single raw input event in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Character typed while some element may hold focus
    Char(char),
    /// Primary pointer button pressed
    PointerDown(Point),
    /// Primary pointer button released
    PointerUp,
    /// Pointer moved
    PointerMove(Point),
}

/// What a character code does to a focused text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharAction {
    Backspace,
    Submit,
    Insert(char),
    Ignore,
}

impl CharAction {
    pub(crate) fn classify(code: char) -> Self {
        match code {
            keys::BACKSPACE => CharAction::Backspace,
            keys::ENTER => CharAction::Submit,
            c if c >= keys::PRINTABLE_MIN => CharAction::Insert(c),
            _ => CharAction::Ignore,
        }
    }
}
