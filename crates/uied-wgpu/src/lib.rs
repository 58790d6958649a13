//! winit + wgpu platform backend for uied
//!
//! [`run`] opens a window and drives a [`uied::Ui`] from winit events. The
//! UI is painted into a CPU [`Canvas`] (text through cosmic-text) and
//! presented with wgpu.
//!
//! ```ignore
//! let mut ui = Ui::new();
//! ui.add(Label::new("Hello", Point::new(20.0, 10.0)));
//! uied_wgpu::run(AppConfig::default().with_title("Hello"), ui)?;
//! ```

mod app;
mod canvas;
mod input;
mod present;

pub use app::{run, AppConfig, AppError};
pub use canvas::{Canvas, CanvasPainter, TextRenderer};
pub use input::{key_to_chars, WinitInput};
pub use present::Presenter;
