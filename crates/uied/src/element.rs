//! Element records stored in the registry
//!
//! Every element shares bounds, color, text and a hover flag. Everything that
//! only makes sense for one kind (terminal history, slider value, drag state,
//! callbacks) lives in the [`Widget`] payload so it cannot be touched on the
//! wrong kind.

use crate::color::Color;
use crate::context::Ui;
use crate::primitives::Rect;
use std::collections::VecDeque;
use std::fmt;

/// Stable handle of a registered element (its creation index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

impl ElementId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in creation order
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload-free tag of an element's kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Button,
    Label,
    Input,
    Terminal,
    Slider,
}

impl Kind {
    /// Whether focused character input edits this kind's text
    pub fn accepts_text(self) -> bool {
        matches!(self, Kind::Input | Kind::Terminal)
    }
}

/// Invoked once per pointer press on a button
pub trait OnActivate {
    fn activate(&mut self, ui: &mut Ui);
}

impl<F> OnActivate for F
where
    F: FnMut(&mut Ui),
{
    fn activate(&mut self, ui: &mut Ui) {
        self(ui)
    }
}

/// Invoked when Enter is pressed in a terminal, with the pre-submit text
pub trait OnSubmit {
    fn submit(&mut self, ui: &mut Ui, terminal: ElementId, text: &str);
}

impl<F> OnSubmit for F
where
    F: FnMut(&mut Ui, ElementId, &str),
{
    fn submit(&mut self, ui: &mut Ui, terminal: ElementId, text: &str) {
        self(ui, terminal, text)
    }
}

/// Invoked on every pointer move while a slider is dragged
pub trait OnSlide {
    fn slide(&mut self, ui: &mut Ui, value: f32);
}

impl<F> OnSlide for F
where
    F: FnMut(&mut Ui, f32),
{
    fn slide(&mut self, ui: &mut Ui, value: f32) {
        self(ui, value)
    }
}

/// Bounded scrollback; the oldest line is evicted first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    lines: VecDeque<String>,
    cap: usize,
}

impl History {
    /// Scrollback kept by a regular terminal
    pub const DEFAULT_CAP: usize = 50;
    /// Scrollback kept by a compact terminal
    pub const COMPACT_CAP: usize = 20;

    pub fn with_cap(cap: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(cap.min(Self::DEFAULT_CAP)),
            cap,
        }
    }

    /// Append a line, evicting from the front while over capacity
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.cap {
            self.lines.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_cap(Self::DEFAULT_CAP)
    }
}

/// Terminal-only state
pub struct TerminalState {
    pub history: History,
    /// Vertical distance between history lines, in pixels
    pub line_height: f32,
    pub(crate) on_submit: Option<Box<dyn OnSubmit>>,
}

impl fmt::Debug for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalState")
            .field("history", &self.history)
            .field("line_height", &self.line_height)
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

/// Slider-only state
pub struct SliderState {
    value: f32,
    pub(crate) dragging: bool,
    pub(crate) on_slide: Option<Box<dyn OnSlide>>,
}

impl SliderState {
    pub(crate) fn new(value: f32, on_slide: Option<Box<dyn OnSlide>>) -> Self {
        Self {
            value: clamp_unit(value),
            dragging: false,
            on_slide,
        }
    }

    /// Normalized position in `[0, 1]`
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_value(&mut self, value: f32) {
        self.value = clamp_unit(value);
    }
}

impl fmt::Debug for SliderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderState")
            .field("value", &self.value)
            .field("dragging", &self.dragging)
            .field("on_slide", &self.on_slide.is_some())
            .finish()
    }
}

/// NaN maps to 0 so a degenerate drag never poisons the value.
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Kind-specific payload of an element
pub enum Widget {
    Button {
        on_activate: Option<Box<dyn OnActivate>>,
    },
    Label,
    Input,
    Terminal(TerminalState),
    Slider(SliderState),
}

impl Widget {
    pub fn kind(&self) -> Kind {
        match self {
            Widget::Button { .. } => Kind::Button,
            Widget::Label => Kind::Label,
            Widget::Input => Kind::Input,
            Widget::Terminal(_) => Kind::Terminal,
            Widget::Slider(_) => Kind::Slider,
        }
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Widget::Button { on_activate } => f
                .debug_struct("Button")
                .field("on_activate", &on_activate.is_some())
                .finish(),
            Widget::Label => f.write_str("Label"),
            Widget::Input => f.write_str("Input"),
            Widget::Terminal(state) => f.debug_tuple("Terminal").field(state).finish(),
            Widget::Slider(state) => f.debug_tuple("Slider").field(state).finish(),
        }
    }
}

/// A registered UI element
#[derive(Debug)]
pub struct Element {
    bounds: Rect,
    pub color: Color,
    pub text: String,
    pub(crate) hovered: bool,
    pub widget: Widget,
}

impl Element {
    pub fn new(widget: Widget, bounds: Rect, color: Color, text: impl Into<String>) -> Self {
        Self {
            bounds,
            color,
            text: text.into(),
            hovered: false,
            widget,
        }
    }

    /// Bounds fixed at creation
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn kind(&self) -> Kind {
        self.widget.kind()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Only sliders can be dragging
    pub fn is_dragging(&self) -> bool {
        matches!(&self.widget, Widget::Slider(state) if state.dragging)
    }

    pub fn history(&self) -> Option<&History> {
        match &self.widget {
            Widget::Terminal(state) => Some(&state.history),
            _ => None,
        }
    }

    pub fn slider_value(&self) -> Option<f32> {
        match &self.widget {
            Widget::Slider(state) => Some(state.value()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_evicts_oldest_first() {
        let mut history = History::with_cap(3);
        for line in ["a", "b", "c", "d"] {
            history.push(line);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_history_never_exceeds_cap() {
        let mut history = History::with_cap(History::COMPACT_CAP);
        for i in 0..500 {
            history.push(format!("line {i}"));
            assert!(history.len() <= History::COMPACT_CAP);
        }
        assert_eq!(history.last(), Some("line 499"));
        assert_eq!(history.iter().next(), Some("line 480"));
    }

    #[test]
    fn test_slider_state_clamps() {
        let mut state = SliderState::new(3.0, None);
        assert_eq!(state.value(), 1.0);
        state.set_value(-0.5);
        assert_eq!(state.value(), 0.0);
        state.set_value(f32::NAN);
        assert_eq!(state.value(), 0.0);
    }

    #[test]
    fn test_only_sliders_drag() {
        let mut slider = Element::new(
            Widget::Slider(SliderState::new(0.0, None)),
            Rect::from_xywh(0.0, 0.0, 10.0, 10.0),
            Color::default(),
            "",
        );
        if let Widget::Slider(state) = &mut slider.widget {
            state.dragging = true;
        }
        assert!(slider.is_dragging());

        let label = Element::new(Widget::Label, Rect::default(), Color::default(), "x");
        assert!(!label.is_dragging());
        assert!(label.history().is_none());
        assert!(label.slider_value().is_none());
    }
}
