//! The engine object that owns every element
//!
//! `Ui` replaces a process-wide singleton: the event-loop driver constructs
//! one, registers elements during setup, then feeds it input events and asks
//! it to paint. Callbacks receive `&mut Ui`, so they can print to terminals
//! or read inputs while an event is being handled.
//!
//! # Example
//!
//! ```ignore
//! let mut ui = Ui::new();
//! let term = ui.add(Terminal::new(Rect::from_xywh(20.0, 40.0, 440.0, 250.0))
//!     .on_submit(|ui, term, cmd| ui.run_command(term, cmd).unwrap()));
//! ui.print(term, "Type 'help' for commands.")?;
//!
//! // In the event loop:
//! ui.dispatch(InputEvent::PointerDown(Point::new(30.0, 50.0)));
//! if ui.take_redraw_request() {
//!     window.request_redraw();
//! }
//! ```

use crate::element::{Element, ElementId, History, Kind, Widget};
use crate::error::UiError;
use crate::registry::Registry;
use crate::terminal::{interpret, TerminalAction};

#[derive(Debug, Default)]
pub struct Ui {
    pub(crate) registry: Registry,
    pub(crate) focused: Option<ElementId>,
    redraw_requested: bool,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Registration ==========

    /// Register an element built by one of the [`widgets`](crate::widgets) builders
    pub fn add(&mut self, element: impl Into<Element>) -> ElementId {
        let id = self.registry.create(element.into());
        self.request_redraw();
        id
    }

    pub fn element(&self, id: ElementId) -> Result<&Element, UiError> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // ========== Focus ==========

    /// The element that receives character input, if any
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn is_focused(&self, id: ElementId) -> bool {
        self.focused == Some(id)
    }

    // ========== Element content ==========

    /// Current text of any element (input buffer, caption, prompt line)
    pub fn input_text(&self, id: ElementId) -> Result<&str, UiError> {
        Ok(self.registry.get(id)?.text())
    }

    /// Replace an element's text
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), UiError> {
        let text = text.into();
        let element = self.registry.get_mut(id)?;
        if element.text != text {
            element.text = text;
            self.request_redraw();
        }
        Ok(())
    }

    pub fn slider_value(&self, id: ElementId) -> Result<f32, UiError> {
        let element = self.registry.get(id)?;
        element.slider_value().ok_or(UiError::WrongKind {
            id,
            expected: Kind::Slider,
            found: element.kind(),
        })
    }

    /// Append a line to a terminal's history
    pub fn print(&mut self, id: ElementId, line: impl Into<String>) -> Result<(), UiError> {
        self.history_mut(id)?.push(line);
        self.request_redraw();
        Ok(())
    }

    /// Drop all of a terminal's history
    pub fn clear(&mut self, id: ElementId) -> Result<(), UiError> {
        self.history_mut(id)?.clear();
        self.request_redraw();
        Ok(())
    }

    /// Interpret `text` as a terminal command and apply it to terminal `id`
    ///
    /// `exit` terminates the process on the spot; nothing after it runs.
    pub fn run_command(&mut self, id: ElementId, text: &str) -> Result<(), UiError> {
        match interpret(text) {
            TerminalAction::Print(lines) => {
                for line in lines {
                    self.print(id, line)?;
                }
            }
            TerminalAction::Clear => self.clear(id)?,
            TerminalAction::Exit => {
                log::info!("exit command from terminal {}", id);
                std::process::exit(0);
            }
            TerminalAction::Nothing => {}
        }
        Ok(())
    }

    fn history_mut(&mut self, id: ElementId) -> Result<&mut History, UiError> {
        let element = self.registry.get_mut(id)?;
        let found = element.kind();
        match &mut element.widget {
            Widget::Terminal(state) => Ok(&mut state.history),
            _ => Err(UiError::WrongKind {
                id,
                expected: Kind::Terminal,
                found,
            }),
        }
    }

    // ========== Redraw ==========

    /// Mark the surface as stale; repeated requests coalesce
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Return and reset the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
