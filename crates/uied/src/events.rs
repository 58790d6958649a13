//! Event dispatching for registered elements
//!
//! Each event is handled completely (flags updated, callbacks run, redraw
//! requested) before the call returns. Callbacks are taken out of their
//! element for the duration of the call so they can borrow the whole [`Ui`].

use crate::context::Ui;
use crate::element::{ElementId, Kind, Widget};
use crate::hit_test::hit_test;
use crate::input::{CharAction, InputEvent};
use crate::primitives::{Point, Rect};

impl Ui {
    /// Route one raw input event
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Char(code) => self.dispatch_char(code),
            InputEvent::PointerDown(point) => self.dispatch_pointer_down(point),
            InputEvent::PointerUp => self.dispatch_pointer_up(),
            InputEvent::PointerMove(point) => self.dispatch_pointer_move(point),
        }
    }

    /// Move focus to the topmost element under `point`
    ///
    /// Buttons fire `on_activate` here, once per press. Sliders start
    /// dragging and jump to the pressed position right away.
    pub fn dispatch_pointer_down(&mut self, point: Point) {
        log::trace!("pointer down at ({}, {})", point.x, point.y);

        let hit = hit_test(&self.registry, point);
        if self.focused != hit {
            log::debug!("focus {:?} -> {:?}", self.focused, hit);
        }
        self.focused = hit;
        self.request_redraw();

        let Some(id) = hit else {
            return;
        };
        let Ok(element) = self.registry.get_mut(id) else {
            return;
        };

        match element.kind() {
            Kind::Button => self.activate(id),
            Kind::Slider => {
                if let Widget::Slider(state) = &mut element.widget {
                    state.dragging = true;
                }
                self.dispatch_pointer_move(point);
            }
            _ => {}
        }
    }

    /// End every drag; harmless when nothing is dragging
    pub fn dispatch_pointer_up(&mut self) {
        log::trace!("pointer up");

        let mut released = false;
        for (_, element) in self.registry.iter_mut() {
            if let Widget::Slider(state) = &mut element.widget {
                released |= std::mem::replace(&mut state.dragging, false);
            }
        }
        if released {
            self.request_redraw();
        }
    }

    /// Refresh hover flags and advance any drag in progress
    ///
    /// A dragged slider reports its value on every move, changed or not.
    pub fn dispatch_pointer_move(&mut self, point: Point) {
        let mut changed = false;
        let mut slides = Vec::new();

        for (id, element) in self.registry.iter_mut() {
            let bounds = element.bounds();
            let hovered = bounds.contains(point);
            if element.hovered != hovered {
                element.hovered = hovered;
                changed = true;
            }

            if let Widget::Slider(state) = &mut element.widget {
                if state.dragging {
                    state.set_value(horizontal_fraction(bounds, point.x));
                    slides.push((id, state.value()));
                    changed = true;
                }
            }
        }

        for (id, value) in slides {
            self.slide(id, value);
        }

        if changed {
            self.request_redraw();
        }
    }

    /// Edit the focused text element
    ///
    /// Dropped silently when nothing is focused or the focused element does
    /// not take text. Enter only does something on terminals.
    pub fn dispatch_char(&mut self, code: char) {
        let Some(id) = self.focused else {
            log::trace!("dropped {:?}: nothing focused", code);
            return;
        };
        let Ok(element) = self.registry.get_mut(id) else {
            return;
        };
        let kind = element.kind();
        if !kind.accepts_text() {
            return;
        }

        match CharAction::classify(code) {
            CharAction::Backspace => {
                if element.text.pop().is_some() {
                    self.request_redraw();
                }
            }
            CharAction::Insert(c) => {
                element.text.push(c);
                self.request_redraw();
            }
            CharAction::Submit if kind == Kind::Terminal => self.submit(id),
            CharAction::Submit | CharAction::Ignore => {}
        }
    }

    fn activate(&mut self, id: ElementId) {
        let callback = match self.registry.get_mut(id) {
            Ok(element) => match &mut element.widget {
                Widget::Button { on_activate } => on_activate.take(),
                _ => None,
            },
            Err(_) => None,
        };
        let Some(mut callback) = callback else {
            return;
        };

        log::trace!("activate {}", id);
        callback.activate(self);

        if let Ok(element) = self.registry.get_mut(id) {
            if let Widget::Button { on_activate } = &mut element.widget {
                on_activate.get_or_insert(callback);
            }
        }
    }

    fn slide(&mut self, id: ElementId, value: f32) {
        let callback = match self.registry.get_mut(id) {
            Ok(element) => match &mut element.widget {
                Widget::Slider(state) => state.on_slide.take(),
                _ => None,
            },
            Err(_) => None,
        };
        let Some(mut callback) = callback else {
            return;
        };

        callback.slide(self, value);

        if let Ok(element) = self.registry.get_mut(id) {
            if let Widget::Slider(state) = &mut element.widget {
                state.on_slide.get_or_insert(callback);
            }
        }
    }

    /// Echo the prompt into history, hand the line to the callback, then
    /// empty the prompt, in that order.
    fn submit(&mut self, id: ElementId) {
        let Ok(element) = self.registry.get_mut(id) else {
            return;
        };
        let Widget::Terminal(state) = &mut element.widget else {
            return;
        };

        let text = element.text.clone();
        state.history.push(format!("> {}", text));
        let callback = state.on_submit.take();
        self.request_redraw();

        log::trace!("submit {:?} on {}", text, id);
        if let Some(mut callback) = callback {
            callback.submit(self, id, &text);

            if let Ok(element) = self.registry.get_mut(id) {
                if let Widget::Terminal(state) = &mut element.widget {
                    state.on_submit.get_or_insert(callback);
                }
            }
        }

        if let Ok(element) = self.registry.get_mut(id) {
            element.text.clear();
        }
    }
}

/// Pointer x as a fraction of the element width; zero-width maps to 0
fn horizontal_fraction(bounds: Rect, x: f32) -> f32 {
    let width = bounds.width();
    if width > 0.0 {
        (x - bounds.x()) / width
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{OnActivate, OnSlide, OnSubmit};
    use crate::input::keys;
    use crate::widgets::{Button, Label, Slider, Terminal, TextInput};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_xywh(x, y, w, h)
    }

    fn type_str(ui: &mut Ui, text: &str) {
        for c in text.chars() {
            ui.dispatch_char(c);
        }
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut ui = Ui::new();
        let a = ui.add(TextInput::new(rect(0.0, 0.0, 100.0, 30.0)));
        let b = ui.add(TextInput::new(rect(0.0, 50.0, 100.0, 30.0)));

        ui.dispatch_pointer_down(Point::new(10.0, 10.0));
        assert_eq!(ui.focused(), Some(a));

        ui.dispatch_pointer_down(Point::new(10.0, 60.0));
        assert_eq!(ui.focused(), Some(b));
        assert!(!ui.is_focused(a));

        ui.dispatch_pointer_down(Point::new(500.0, 500.0));
        assert_eq!(ui.focused(), None);
    }

    #[test]
    fn test_overlap_focuses_topmost_only() {
        let mut ui = Ui::new();
        let pressed = Rc::new(RefCell::new(Vec::new()));

        let log = pressed.clone();
        ui.add(
            Button::new("below", rect(0.0, 0.0, 100.0, 100.0))
                .on_activate(move |_| log.borrow_mut().push("below")),
        );
        let log = pressed.clone();
        let above = ui.add(
            Button::new("above", rect(50.0, 50.0, 100.0, 100.0))
                .on_activate(move |_| log.borrow_mut().push("above")),
        );

        ui.dispatch_pointer_down(Point::new(75.0, 75.0));
        assert_eq!(ui.focused(), Some(above));
        assert_eq!(*pressed.borrow(), vec!["above"]);
    }

    #[test]
    fn test_button_activates_once_per_press() {
        let mut ui = Ui::new();
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        ui.add(
            Button::new("go", rect(0.0, 0.0, 50.0, 20.0))
                .on_activate(move |_| *counter.borrow_mut() += 1),
        );

        ui.dispatch_pointer_down(Point::new(5.0, 5.0));
        ui.dispatch_pointer_up();
        assert_eq!(*count.borrow(), 1);

        ui.dispatch_pointer_down(Point::new(5.0, 5.0));
        assert_eq!(*count.borrow(), 2);
        ui.dispatch_pointer_up();
        ui.dispatch_pointer_up();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_button_callback_can_use_ui() {
        let mut ui = Ui::new();
        let term = ui.add(Terminal::new(rect(0.0, 0.0, 200.0, 100.0)));
        let input = ui.add(TextInput::new(rect(0.0, 120.0, 100.0, 30.0)).text("ping"));
        ui.add(
            Button::new("send", rect(110.0, 120.0, 60.0, 30.0)).on_activate(move |ui| {
                let text = ui.input_text(input).unwrap().to_string();
                ui.print(term, format!("User: {}", text)).unwrap();
            }),
        );

        ui.dispatch_pointer_down(Point::new(120.0, 130.0));
        ui.dispatch_pointer_down(Point::new(120.0, 130.0));

        let history = ui.element(term).unwrap().history().unwrap();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["User: ping", "User: ping"]);
    }

    #[test]
    fn test_slider_drag_reports_every_move() {
        let mut ui = Ui::new();
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        let slider = ui.add(
            Slider::new(Point::new(100.0, 0.0), 200.0)
                .on_slide(move |_, v| sink.borrow_mut().push(v)),
        );

        ui.dispatch_pointer_down(Point::new(150.0, 5.0));
        assert!(ui.element(slider).unwrap().is_dragging());
        assert_eq!(ui.slider_value(slider).unwrap(), 0.25);

        ui.dispatch_pointer_move(Point::new(150.0, 40.0));
        ui.dispatch_pointer_move(Point::new(200.0, 40.0));
        assert_eq!(*values.borrow(), vec![0.25, 0.25, 0.5]);

        ui.dispatch_pointer_up();
        assert!(!ui.element(slider).unwrap().is_dragging());
        ui.dispatch_pointer_move(Point::new(300.0, 5.0));
        assert_eq!(values.borrow().len(), 3);
        assert_eq!(ui.slider_value(slider).unwrap(), 0.5);
    }

    #[test]
    fn test_slider_value_stays_in_unit_range() {
        let mut ui = Ui::new();
        let slider = ui.add(Slider::new(Point::new(100.0, 0.0), 200.0));

        ui.dispatch_pointer_down(Point::new(100.0, 5.0));
        for x in [-1000.0, 99.0, 100.0, 250.0, 300.0, 301.0, 1e9] {
            ui.dispatch_pointer_move(Point::new(x, 5.0));
            let value = ui.slider_value(slider).unwrap();
            assert!((0.0..=1.0).contains(&value), "value {} out of range", value);
        }
        assert_eq!(ui.slider_value(slider).unwrap(), 1.0);

        ui.dispatch_pointer_move(Point::new(-5.0, 5.0));
        assert_eq!(ui.slider_value(slider).unwrap(), 0.0);
    }

    #[test]
    fn test_hover_redraw_only_on_change() {
        let mut ui = Ui::new();
        let label = ui.add(Label::new("x", Point::zero()));
        ui.take_redraw_request();

        ui.dispatch_pointer_move(Point::new(500.0, 500.0));
        assert!(!ui.take_redraw_request());

        ui.dispatch_pointer_move(Point::new(10.0, 10.0));
        assert!(ui.element(label).unwrap().is_hovered());
        assert!(ui.take_redraw_request());

        ui.dispatch_pointer_move(Point::new(11.0, 10.0));
        assert!(!ui.take_redraw_request());

        ui.dispatch_pointer_move(Point::new(500.0, 10.0));
        assert!(!ui.element(label).unwrap().is_hovered());
        assert!(ui.take_redraw_request());
    }

    #[test]
    fn test_pointer_up_is_idempotent() {
        let mut ui = Ui::new();
        ui.add(Slider::new(Point::zero(), 100.0));
        ui.take_redraw_request();

        ui.dispatch_pointer_up();
        assert!(!ui.take_redraw_request());
    }

    #[test]
    fn test_typing_into_input() {
        let mut ui = Ui::new();
        let input = ui.add(TextInput::new(rect(0.0, 0.0, 100.0, 30.0)));
        ui.dispatch_pointer_down(Point::new(5.0, 5.0));

        type_str(&mut ui, "hey");
        assert_eq!(ui.input_text(input).unwrap(), "hey");

        ui.dispatch_char(keys::BACKSPACE);
        assert_eq!(ui.input_text(input).unwrap(), "he");

        ui.dispatch_char('\t');
        assert_eq!(ui.input_text(input).unwrap(), "he");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut ui = Ui::new();
        let input = ui.add(TextInput::new(rect(0.0, 0.0, 100.0, 30.0)));
        ui.dispatch_pointer_down(Point::new(5.0, 5.0));
        ui.take_redraw_request();

        ui.dispatch_char(keys::BACKSPACE);
        assert_eq!(ui.input_text(input).unwrap(), "");
        assert!(!ui.take_redraw_request());
    }

    #[test]
    fn test_enter_on_input_is_inert() {
        let mut ui = Ui::new();
        let input = ui.add(TextInput::new(rect(0.0, 0.0, 100.0, 30.0)).text("keep"));
        ui.dispatch_pointer_down(Point::new(5.0, 5.0));
        ui.take_redraw_request();

        ui.dispatch_char(keys::ENTER);
        assert_eq!(ui.input_text(input).unwrap(), "keep");
        assert!(!ui.take_redraw_request());
    }

    #[test]
    fn test_chars_dropped_without_focus() {
        let mut ui = Ui::new();
        let input = ui.add(TextInput::new(rect(0.0, 0.0, 100.0, 30.0)));
        let label = ui.add(Label::new("static", Point::new(0.0, 100.0)));

        type_str(&mut ui, "abc");
        assert_eq!(ui.input_text(input).unwrap(), "");

        ui.dispatch_pointer_down(Point::new(5.0, 105.0));
        assert_eq!(ui.focused(), Some(label));
        type_str(&mut ui, "abc");
        assert_eq!(ui.input_text(label).unwrap(), "static");
    }

    #[test]
    fn test_terminal_submit_order() {
        let mut ui = Ui::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let probe = seen.clone();
        let term = ui.add(Terminal::new(rect(0.0, 0.0, 300.0, 200.0)).on_submit(
            move |ui, term, text| {
                let element = ui.element(term).unwrap();
                probe.borrow_mut().push((
                    text.to_string(),
                    element.history().unwrap().last().map(str::to_string),
                    element.text().to_string(),
                ));
            },
        ));

        ui.dispatch_pointer_down(Point::new(10.0, 10.0));
        type_str(&mut ui, "hello");
        ui.dispatch_char(keys::ENTER);

        assert_eq!(
            *seen.borrow(),
            vec![(
                "hello".to_string(),
                Some("> hello".to_string()),
                "hello".to_string()
            )]
        );
        assert_eq!(ui.input_text(term).unwrap(), "");
    }

    #[test]
    fn test_terminal_callback_runs_commands() {
        let mut ui = Ui::new();
        let term = ui.add(
            Terminal::new(rect(0.0, 0.0, 300.0, 200.0))
                .on_submit(|ui, term, cmd| ui.run_command(term, cmd).unwrap()),
        );

        ui.dispatch(InputEvent::PointerDown(Point::new(10.0, 10.0)));
        for c in "zzz\r\rhelp\r".chars() {
            ui.dispatch(InputEvent::Char(c));
        }

        let history = ui.element(term).unwrap().history().unwrap();
        let lines: Vec<_> = history.iter().collect();
        assert_eq!(
            lines,
            vec![
                "> zzz",
                "Error: Unknown command 'zzz'",
                "> ",
                "> help",
                crate::terminal::HELP_TEXT,
            ]
        );

        ui.dispatch(InputEvent::Char(keys::ENTER));
        for c in "clear\r".chars() {
            ui.dispatch(InputEvent::Char(c));
        }
        assert!(ui.element(term).unwrap().history().unwrap().is_empty());
    }

    #[test]
    fn test_submit_without_callback_still_echoes() {
        let mut ui = Ui::new();
        let term = ui.add(Terminal::compact(rect(0.0, 0.0, 300.0, 200.0)));

        ui.dispatch_pointer_down(Point::new(10.0, 10.0));
        type_str(&mut ui, "ls\r");

        let element = ui.element(term).unwrap();
        assert_eq!(element.history().unwrap().last(), Some("> ls"));
        assert_eq!(element.text(), "");
    }

    #[test]
    fn test_submit_history_respects_cap() {
        let mut ui = Ui::new();
        let term = ui.add(Terminal::new(rect(0.0, 0.0, 300.0, 200.0)).history_cap(3));

        ui.dispatch_pointer_down(Point::new(10.0, 10.0));
        type_str(&mut ui, "a\rb\rc\rd\r");

        let history = ui.element(term).unwrap().history().unwrap();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["> b", "> c", "> d"]);
    }

    struct PressCounter {
        label: ElementId,
        presses: u32,
    }

    impl OnActivate for PressCounter {
        fn activate(&mut self, ui: &mut Ui) {
            self.presses += 1;
            ui.set_text(self.label, format!("pressed {}", self.presses)).unwrap();
        }
    }

    struct Reverser;

    impl OnSubmit for Reverser {
        fn submit(&mut self, ui: &mut Ui, terminal: ElementId, text: &str) {
            ui.print(terminal, text.chars().rev().collect::<String>()).unwrap();
        }
    }

    struct Percent {
        label: ElementId,
    }

    impl OnSlide for Percent {
        fn slide(&mut self, ui: &mut Ui, value: f32) {
            let percent = (value * 100.0).round() as u32;
            ui.set_text(self.label, format!("{}%", percent)).unwrap();
        }
    }

    #[test]
    fn test_handler_objects_keep_state_across_events() {
        let mut ui = Ui::new();
        let label = ui.add(Label::new("", Point::zero()));
        let counter = PressCounter { label, presses: 0 };
        ui.add(Button::new("count", rect(0.0, 30.0, 100.0, 30.0)).activate_handler(counter));
        let term = ui.add(Terminal::new(rect(0.0, 100.0, 300.0, 200.0)).submit_handler(Reverser));
        ui.add(Slider::new(Point::new(0.0, 350.0), 200.0).slide_handler(Percent { label }));

        for _ in 0..2 {
            ui.dispatch(InputEvent::PointerDown(Point::new(10.0, 40.0)));
            ui.dispatch(InputEvent::PointerUp);
        }
        assert_eq!(ui.element(label).unwrap().text(), "pressed 2");

        ui.dispatch(InputEvent::PointerDown(Point::new(100.0, 355.0)));
        ui.dispatch(InputEvent::PointerUp);
        assert_eq!(ui.element(label).unwrap().text(), "50%");

        ui.dispatch(InputEvent::PointerDown(Point::new(10.0, 110.0)));
        type_str(&mut ui, "abc\r");
        let history = ui.element(term).unwrap().history().unwrap();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["> abc", "cba"]);
    }
}
