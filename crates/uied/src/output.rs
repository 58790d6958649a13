//! Painting: turn the registry into a list of shapes
//!
//! Backends implement [`Surface`] and receive shapes in creation order, so an
//! element created later is drawn on top of earlier ones. [`FullOutput`] is a
//! recording surface for tests and for backends that batch.

use crate::color::{css, palette, Color};
use crate::context::Ui;
use crate::element::{Element, ElementId, TerminalState, Widget};
use crate::primitives::{
    CornerShape, Font, HorizontalAlign, LineShape, Point, Rect, Shape, Stroke, StyledRect,
    TextShape, VerticalAlign,
};

/// Caption size for buttons, inputs and labels
pub const UI_FONT_SIZE: f32 = 16.0;
/// Terminal text size
pub const MONO_FONT_SIZE: f32 = 14.0;

const CORNER_RADIUS: f32 = 2.5;
const TERMINAL_PADDING: f32 = 5.0;
const PROMPT_OFFSET: f32 = 20.0;
const TRACK_WIDTH: f32 = 2.0;
const KNOB_WIDTH: f32 = 10.0;
const CURSOR: &str = "_";

/// Destination for painted shapes
pub trait Surface {
    /// Called before the shapes of each element
    fn begin_element(&mut self, _id: ElementId) {}

    fn draw(&mut self, shape: &Shape);
}

/// Shapes recorded in paint order, tagged with their element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FullOutput {
    pub shapes: Vec<(ElementId, Shape)>,
    current: Option<ElementId>,
}

impl FullOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes painted for one element
    pub fn shapes_of(&self, id: ElementId) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(move |(owner, _)| *owner == id)
            .map(|(_, shape)| shape)
    }
}

impl Surface for FullOutput {
    fn begin_element(&mut self, id: ElementId) {
        self.current = Some(id);
    }

    fn draw(&mut self, shape: &Shape) {
        if let Some(id) = self.current {
            self.shapes.push((id, shape.clone()));
        }
    }
}

impl Ui {
    /// Paint every element, oldest first
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (id, element) in self.registry.iter() {
            surface.begin_element(id);
            paint_element(surface, element, self.is_focused(id));
        }
    }

    /// Paint into a fresh [`FullOutput`]
    pub fn output(&self) -> FullOutput {
        let mut output = FullOutput::new();
        self.render(&mut output);
        output
    }
}

fn paint_element<S: Surface + ?Sized>(surface: &mut S, element: &Element, focused: bool) {
    let bounds = element.bounds();
    match &element.widget {
        Widget::Button { .. } => {
            let fill = if element.is_hovered() {
                element.color.lighten(palette::HOVER_BOOST)
            } else {
                element.color
            };
            paint_frame(surface, bounds, fill, focused);
            paint_caption(surface, bounds, element.text());
        }
        Widget::Input => {
            paint_frame(surface, bounds, palette::INPUT_FILL, focused);
            if focused {
                paint_caption(surface, bounds, &format!("{}{}", element.text(), CURSOR));
            } else {
                paint_caption(surface, bounds, element.text());
            }
        }
        Widget::Label => {
            surface.draw(&Shape::Text(
                TextShape::new(bounds, element.text(), Font::Ui, UI_FONT_SIZE, element.color)
                    .with_align(HorizontalAlign::Left, VerticalAlign::Center),
            ));
        }
        Widget::Slider(state) => {
            let mid = bounds.y() + bounds.height() / 2.0;
            surface.draw(&Shape::Line(LineShape {
                from: Point::new(bounds.x(), mid),
                to: Point::new(bounds.max[0], mid),
                stroke: Stroke::new(TRACK_WIDTH, palette::SLIDER_TRACK),
            }));

            let knob_x = bounds.x() + state.value() * bounds.width();
            let knob = Rect::new(
                [knob_x - KNOB_WIDTH / 2.0, bounds.y()],
                [knob_x + KNOB_WIDTH / 2.0, bounds.max[1]],
            );
            let fill = if element.is_hovered() || state.is_dragging() {
                element.color.lighten(palette::HOVER_BOOST)
            } else {
                element.color
            };
            surface.draw(&Shape::Rect(StyledRect::new(knob, fill)));
        }
        Widget::Terminal(state) => paint_terminal(surface, bounds, element.text(), state, focused),
    }
}

/// Rounded box shared by buttons and inputs
fn paint_frame<S: Surface + ?Sized>(surface: &mut S, bounds: Rect, fill: Color, focused: bool) {
    let stroke = if focused {
        palette::FOCUS_STROKE
    } else {
        palette::IDLE_STROKE
    };
    surface.draw(&Shape::Rect(
        StyledRect::new(bounds, fill)
            .with_corner_shape(CornerShape::Round(CORNER_RADIUS))
            .with_stroke(Stroke::new(1.0, stroke)),
    ));
}

fn paint_caption<S: Surface + ?Sized>(surface: &mut S, bounds: Rect, text: &str) {
    surface.draw(&Shape::Text(
        TextShape::new(bounds, text, Font::Ui, UI_FONT_SIZE, palette::CAPTION)
            .with_align(HorizontalAlign::Center, VerticalAlign::Center),
    ));
}

fn paint_terminal<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Rect,
    prompt: &str,
    state: &TerminalState,
    focused: bool,
) {
    surface.draw(&Shape::Rect(StyledRect::new(bounds, palette::TERMINAL_FILL)));
    if focused {
        surface.draw(&Shape::Rect(StyledRect::outline(
            bounds,
            Stroke::new(1.0, css::LIME),
        )));
    }

    let left = bounds.x() + TERMINAL_PADDING;
    let right = bounds.max[0] - TERMINAL_PADDING;
    let prompt_top = bounds.max[1] - PROMPT_OFFSET;
    let mut top = bounds.y() + TERMINAL_PADDING;

    // Newest lines stay visible above the prompt row
    let rows = if state.line_height > 0.0 {
        ((prompt_top - top) / state.line_height).floor().max(0.0) as usize
    } else {
        0
    };
    let skip = state.history.len().saturating_sub(rows);
    for line in state.history.iter().skip(skip) {
        let rect = Rect::new([left, top], [right, top + state.line_height]);
        surface.draw(&Shape::Text(TextShape::new(
            rect,
            line,
            Font::Mono,
            MONO_FONT_SIZE,
            palette::TERMINAL_TEXT,
        )));
        top += state.line_height;
    }

    let cursor = if focused { CURSOR } else { "" };
    surface.draw(&Shape::Text(TextShape::new(
        Rect::new([left, prompt_top], [right, prompt_top + state.line_height]),
        format!("> {}{}", prompt, cursor),
        Font::Mono,
        MONO_FONT_SIZE,
        palette::TERMINAL_TEXT,
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Button, Label, Slider, Terminal, TextInput};

    fn text_of(output: &FullOutput, id: ElementId) -> Vec<String> {
        output
            .shapes_of(id)
            .filter_map(|shape| match shape {
                Shape::Text(text) => Some(text.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_later_elements_paint_last() {
        let mut ui = Ui::new();
        let first = ui.add(Button::new("a", Rect::from_xywh(0.0, 0.0, 50.0, 50.0)));
        let second = ui.add(Label::new("b", Point::new(10.0, 10.0)));

        let output = ui.output();
        let owners: Vec<_> = output.shapes.iter().map(|(id, _)| *id).collect();
        let last_first = owners.iter().rposition(|id| *id == first).unwrap();
        let first_second = owners.iter().position(|id| *id == second).unwrap();
        assert!(last_first < first_second);
    }

    #[test]
    fn test_input_cursor_only_when_focused() {
        let mut ui = Ui::new();
        let input = ui.add(TextInput::new(Rect::from_xywh(0.0, 0.0, 100.0, 30.0)).text("ab"));

        assert_eq!(text_of(&ui.output(), input), vec!["ab"]);

        ui.dispatch_pointer_down(Point::new(5.0, 5.0));
        assert_eq!(text_of(&ui.output(), input), vec!["ab_"]);
    }

    #[test]
    fn test_focus_stroke() {
        let mut ui = Ui::new();
        let button = ui.add(Button::new("ok", Rect::from_xywh(0.0, 0.0, 100.0, 30.0)));
        ui.dispatch_pointer_move(Point::new(5.0, 5.0));
        ui.dispatch_pointer_down(Point::new(5.0, 5.0));

        let output = ui.output();
        let Some(Shape::Rect(frame)) = output.shapes_of(button).next() else {
            panic!("button should start with its frame");
        };
        assert_eq!(frame.stroke.unwrap().color, palette::FOCUS_STROKE);
        assert_eq!(frame.corner_shape, CornerShape::Round(CORNER_RADIUS));
        assert_eq!(frame.fill, css::GRAY.lighten(palette::HOVER_BOOST));
    }

    #[test]
    fn test_terminal_lines_and_prompt() {
        let mut ui = Ui::new();
        let term = ui.add(Terminal::new(Rect::from_xywh(20.0, 40.0, 440.0, 250.0)));
        ui.print(term, "one").unwrap();
        ui.print(term, "two").unwrap();
        ui.set_text(term, "ls").unwrap();

        let output = ui.output();
        let texts: Vec<_> = output
            .shapes_of(term)
            .filter_map(|shape| match shape {
                Shape::Text(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].rect.min, [25.0, 45.0]);
        assert_eq!(texts[1].rect.min, [25.0, 45.0 + Terminal::DEFAULT_LINE_HEIGHT]);
        assert_eq!(texts[2].text, "> ls");
        assert_eq!(texts[2].rect.min[1], 40.0 + 250.0 - 20.0);
        assert!(texts.iter().all(|t| t.font == Font::Mono));

        ui.dispatch_pointer_down(Point::new(30.0, 50.0));
        assert_eq!(text_of(&ui.output(), term).last().unwrap(), "> ls_");
    }

    #[test]
    fn test_terminal_overflow_keeps_newest_lines() {
        let mut ui = Ui::new();
        let term = ui.add(Terminal::new(Rect::from_xywh(20.0, 40.0, 440.0, 250.0)));
        for i in 0..30 {
            ui.print(term, format!("line {}", i)).unwrap();
        }

        let output = ui.output();
        let texts: Vec<_> = output
            .shapes_of(term)
            .filter_map(|shape| match shape {
                Shape::Text(text) => Some(text),
                _ => None,
            })
            .collect();
        let (prompt, history) = texts.split_last().unwrap();
        assert_eq!(prompt.text, "> ");

        assert_eq!(history.last().unwrap().text, "line 29");
        assert_eq!(history[0].rect.min[1], 45.0);
        for row in history {
            assert!(row.rect.max[1] <= prompt.rect.min[1], "{} overlaps the prompt", row.text);
        }

        let painted: Vec<_> = history.iter().map(|t| t.text.as_str()).collect();
        let first = 30 - painted.len();
        let expected: Vec<_> = (first..30).map(|i| format!("line {}", i)).collect();
        assert_eq!(painted, expected);
    }

    #[test]
    fn test_slider_knob_position() {
        let mut ui = Ui::new();
        let slider = ui.add(Slider::new(Point::new(100.0, 0.0), 200.0).value(0.5));

        let output = ui.output();
        let knob = output
            .shapes_of(slider)
            .find_map(|shape| match shape {
                Shape::Rect(rect) => Some(rect.rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(knob.min, [195.0, 0.0]);
        assert_eq!(knob.max, [205.0, Slider::HEIGHT]);
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let mut ui = Ui::new();
        ui.add(Label::new("x", Point::zero()));
        ui.take_redraw_request();

        let first = ui.output();
        let second = ui.output();
        assert_eq!(first, second);
        assert!(!ui.needs_redraw());
    }
}
