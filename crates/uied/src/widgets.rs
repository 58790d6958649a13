//! Element factories, one builder per kind
//!
//! Each builder describes an element before it is registered. Pass it to
//! [`Ui::add`](crate::Ui::add) to get a handle back.
//!
//! ```ignore
//! let term = ui.add(Terminal::new(Rect::from_xywh(20.0, 40.0, 440.0, 250.0))
//!     .on_submit(|ui, term, cmd| ui.run_command(term, cmd).unwrap()));
//! ```

use crate::color::{css, Color};
use crate::element::{
    Element, History, OnActivate, OnSlide, OnSubmit, SliderState, TerminalState, Widget,
};
use crate::primitives::{Point, Rect};

/// A clickable button
pub struct Button {
    text: String,
    bounds: Rect,
    color: Color,
    on_activate: Option<Box<dyn OnActivate>>,
}

impl Button {
    pub fn new(text: impl Into<String>, bounds: Rect) -> Self {
        Self {
            text: text.into(),
            bounds,
            color: css::GRAY,
            on_activate: None,
        }
    }

    /// Set the fill color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set a callback fired once per press
    pub fn on_activate(mut self, f: impl FnMut(&mut crate::Ui) + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Set a handler object fired once per press
    pub fn activate_handler(mut self, handler: impl OnActivate + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }
}

impl From<Button> for Element {
    fn from(button: Button) -> Self {
        Element::new(
            Widget::Button {
                on_activate: button.on_activate,
            },
            button.bounds,
            button.color,
            button.text,
        )
    }
}

/// Static text
pub struct Label {
    text: String,
    bounds: Rect,
    color: Color,
}

impl Label {
    pub const DEFAULT_SIZE: [f32; 2] = [200.0, 20.0];

    /// A 200x20 white label with its top-left corner at `pos`
    pub fn new(text: impl Into<String>, pos: Point) -> Self {
        Self {
            text: text.into(),
            bounds: Rect::from_min_size(pos.into(), Self::DEFAULT_SIZE),
            color: css::WHITE,
        }
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Override the default size
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.bounds = Rect::from_min_size(self.bounds.min, [width, height]);
        self
    }
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Element::new(Widget::Label, label.bounds, label.color, label.text)
    }
}

/// Single-line text field
pub struct TextInput {
    text: String,
    bounds: Rect,
}

impl TextInput {
    pub fn new(bounds: Rect) -> Self {
        Self {
            text: String::new(),
            bounds,
        }
    }

    /// Initial buffer content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl From<TextInput> for Element {
    fn from(input: TextInput) -> Self {
        Element::new(Widget::Input, input.bounds, Color::default(), input.text)
    }
}

/// Scrollback terminal with a prompt line
pub struct Terminal {
    bounds: Rect,
    history_cap: usize,
    line_height: f32,
    on_submit: Option<Box<dyn OnSubmit>>,
}

impl Terminal {
    pub const DEFAULT_LINE_HEIGHT: f32 = 16.0;
    pub const COMPACT_LINE_HEIGHT: f32 = 18.0;

    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            history_cap: History::DEFAULT_CAP,
            line_height: Self::DEFAULT_LINE_HEIGHT,
            on_submit: None,
        }
    }

    /// Short scrollback with roomier lines
    pub fn compact(bounds: Rect) -> Self {
        Self::new(bounds)
            .history_cap(History::COMPACT_CAP)
            .line_height(Self::COMPACT_LINE_HEIGHT)
    }

    /// Set how many history lines are kept
    pub fn history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    /// Set the distance between history lines
    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set a callback fired with each submitted line
    pub fn on_submit(
        mut self,
        f: impl FnMut(&mut crate::Ui, crate::ElementId, &str) + 'static,
    ) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    /// Set a handler object fired with each submitted line
    pub fn submit_handler(mut self, handler: impl OnSubmit + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }
}

impl From<Terminal> for Element {
    fn from(terminal: Terminal) -> Self {
        Element::new(
            Widget::Terminal(TerminalState {
                history: History::with_cap(terminal.history_cap),
                line_height: terminal.line_height,
                on_submit: terminal.on_submit,
            }),
            terminal.bounds,
            Color::default(),
            "",
        )
    }
}

/// Horizontal slider reporting a value in `[0, 1]`
pub struct Slider {
    bounds: Rect,
    color: Color,
    value: f32,
    on_slide: Option<Box<dyn OnSlide>>,
}

impl Slider {
    pub const HEIGHT: f32 = 15.0;

    pub fn new(pos: Point, width: f32) -> Self {
        Self {
            bounds: Rect::from_min_size(pos.into(), [width, Self::HEIGHT]),
            color: css::WHITE,
            value: 0.0,
            on_slide: None,
        }
    }

    /// Set the knob color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Initial value, clamped to `[0, 1]`
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Set a callback fired on every move while dragging
    pub fn on_slide(mut self, f: impl FnMut(&mut crate::Ui, f32) + 'static) -> Self {
        self.on_slide = Some(Box::new(f));
        self
    }

    /// Set a handler object fired on every move while dragging
    pub fn slide_handler(mut self, handler: impl OnSlide + 'static) -> Self {
        self.on_slide = Some(Box::new(handler));
        self
    }
}

impl From<Slider> for Element {
    fn from(slider: Slider) -> Self {
        Element::new(
            Widget::Slider(SliderState::new(slider.value, slider.on_slide)),
            slider.bounds,
            slider.color,
            "",
        )
    }
}
