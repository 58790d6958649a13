//! Showcase example
//!
//! A terminal, a text input wired to a button, and a slider driving a label.
//! Click the terminal and type `help`, or type into the input and press
//! "Send to Term".
//!
//! Run with `RUST_LOG=uied=debug` to see focus changes.

use uied::{Button, Color, ElementId, Label, Point, Rect, Slider, Terminal, TextInput, Ui, UiError};
use uied_wgpu::{run, AppConfig, AppError};

const ACCENT: Color = Color::rgb(0, 255, 150);
const SEND_BLUE: Color = Color::rgb(0, 120, 215);
const CLEAR_RED: Color = Color::rgb(180, 50, 50);
const SLIDER_ORANGE: Color = Color::rgb(255, 150, 0);

fn report(result: Result<(), UiError>) {
    if let Err(e) = result {
        log::warn!("{}", e);
    }
}

fn send_input(ui: &mut Ui, input: ElementId, term: ElementId) -> Result<(), UiError> {
    let text = ui.input_text(input)?.to_string();
    if !text.is_empty() {
        ui.print(term, format!("User: {}", text))?;
    }
    Ok(())
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let mut ui = Ui::new();

    ui.add(Label::new("UIED", Point::new(20.0, 10.0)).color(ACCENT));

    let term = ui.add(
        Terminal::new(Rect::from_xywh(20.0, 40.0, 440.0, 250.0))
            .on_submit(|ui, term, cmd| report(ui.run_command(term, cmd))),
    );
    report(ui.print(term, "--- UIED System Terminal Booted ---"));
    report(ui.print(term, "Type 'help' for commands."));

    ui.add(Label::new("Fast Message:", Point::new(20.0, 305.0)));
    let input =
        ui.add(TextInput::new(Rect::from_xywh(20.0, 325.0, 200.0, 30.0)).text("Enter text..."));

    ui.add(
        Button::new("Send to Term", Rect::from_xywh(230.0, 325.0, 120.0, 30.0))
            .color(SEND_BLUE)
            .on_activate(move |ui| report(send_input(ui, input, term))),
    );

    let percent = ui.add(Label::new("Adjust Parameter (0-100%):", Point::new(20.0, 370.0)));
    let mut last_percent = None;
    ui.add(
        Slider::new(Point::new(20.0, 395.0), 330.0)
            .color(SLIDER_ORANGE)
            .on_slide(move |ui, value| {
                let current = (value * 100.0) as u32;
                if last_percent != Some(current) {
                    last_percent = Some(current);
                    report(ui.set_text(percent, format!("Adjust Parameter: {}%", current)));
                }
            }),
    );

    ui.add(
        Button::new("Clear Logs", Rect::from_xywh(360.0, 325.0, 100.0, 30.0))
            .color(CLEAR_RED)
            .on_activate(move |ui| {
                report(ui.clear(term));
                report(ui.print(term, "Logs cleared."));
            }),
    );

    run(AppConfig::default().with_title("UIED Framework Showcase"), ui)
}
