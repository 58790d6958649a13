//! Winit input adapter for uied
//!
//! Converts winit window events into [`InputEvent`]s and feeds them to a
//! [`Ui`]. Pointer presses are reported at the last known cursor position
//! since winit's `MouseInput` carries no coordinates.

use uied::{keys, InputEvent, Point, Ui};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// Cursor and modifier state carried between winit events
#[derive(Debug, Default, Clone)]
pub struct WinitInput {
    cursor: Point,
    ctrl_held: bool,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cursor position in physical pixels
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Translate one window event; returns `true` if it reached the `Ui`
    pub fn handle_event(&mut self, ui: &mut Ui, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                ui.dispatch(InputEvent::PointerMove(self.cursor));
                true
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                ui.dispatch(match state {
                    ElementState::Pressed => InputEvent::PointerDown(self.cursor),
                    ElementState::Released => InputEvent::PointerUp,
                });
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.ctrl_held = modifiers.state().control_key();
                false
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let chars = key_to_chars(&event.logical_key, self.ctrl_held);
                for &c in &chars {
                    ui.dispatch(InputEvent::Char(c));
                }
                !chars.is_empty()
            }
            _ => false,
        }
    }
}

/// Character codes produced by a key press
///
/// Ctrl+letter is treated as a shortcut and types nothing. Space is always
/// typed, whatever modifiers are held.
pub fn key_to_chars(key: &Key, ctrl_held: bool) -> Vec<char> {
    match key {
        Key::Named(NamedKey::Backspace) => vec![keys::BACKSPACE],
        Key::Named(NamedKey::Enter) => vec![keys::ENTER],
        Key::Named(NamedKey::Space) => vec![' '],
        Key::Character(text) => {
            let mut chars = text.chars();
            let is_shortcut = ctrl_held
                && matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
            if is_shortcut {
                Vec::new()
            } else {
                text.chars().collect()
            }
        }
        _ => Vec::new(),
    }
}
