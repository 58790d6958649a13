//! Terminal example
//!
//! A single terminal filling the window. Click it and type `help`.

use uied::{Rect, Terminal, Ui};
use uied_wgpu::{run, AppConfig, AppError};

fn main() -> Result<(), AppError> {
    env_logger::init();

    let mut ui = Ui::new();
    let term = ui.add(
        Terminal::compact(Rect::from_xywh(10.0, 10.0, 460.0, 340.0)).on_submit(|ui, term, cmd| {
            if let Err(e) = ui.run_command(term, cmd) {
                log::warn!("{}", e);
            }
        }),
    );

    for line in ["--- UIED TERMINAL BOOTING... ---", "Type 'help' to see commands."] {
        if let Err(e) = ui.print(term, line) {
            log::warn!("{}", e);
        }
    }

    run(
        AppConfig::default()
            .with_title("UIED System Terminal")
            .with_height(400),
        ui,
    )
}
