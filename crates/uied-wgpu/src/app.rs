//! Window, event loop and frame loop around a [`Ui`]
//!
//! The loop sleeps until winit delivers an event ([`ControlFlow::Wait`]).
//! Input goes to the `Ui`; a frame is painted only when the `Ui` asked for
//! a redraw or the window was exposed or resized.

use crate::canvas::{Canvas, CanvasPainter, TextRenderer};
use crate::input::WinitInput;
use crate::present::Presenter;
use std::fmt;
use std::sync::Arc;
use uied::{palette, Color, Ui};
use uied_macros::WithBuilders;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Window settings
///
/// ```ignore
/// let config = AppConfig::default()
///     .with_title("UIED Terminal")
///     .with_height(400);
/// ```
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct AppConfig {
    pub title: String,
    /// Client area width in physical pixels
    #[with_builders(exact)]
    pub width: u32,
    /// Client area height in physical pixels
    #[with_builders(exact)]
    pub height: u32,
    /// Color behind all elements
    pub background: Color,
    pub resizable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "UIED".to_string(),
            width: 500,
            height: 480,
            background: palette::BACKGROUND,
            resizable: true,
        }
    }
}

/// Failure to bring up the window or graphics device
#[derive(Debug)]
pub enum AppError {
    EventLoop(winit::error::EventLoopError),
    CreateWindow(winit::error::OsError),
    CreateSurface(wgpu::CreateSurfaceError),
    RequestAdapter(wgpu::RequestAdapterError),
    RequestDevice(wgpu::RequestDeviceError),
    /// The surface reported no usable texture format
    NoSurfaceFormat,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "event loop error: {}", e),
            AppError::CreateWindow(e) => write!(f, "failed to create window: {}", e),
            AppError::CreateSurface(e) => write!(f, "failed to create surface: {}", e),
            AppError::RequestAdapter(e) => write!(f, "no suitable GPU adapter: {}", e),
            AppError::RequestDevice(e) => write!(f, "failed to create device: {}", e),
            AppError::NoSurfaceFormat => write!(f, "surface has no supported texture format"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::CreateWindow(e) => Some(e),
            AppError::CreateSurface(e) => Some(e),
            AppError::RequestAdapter(e) => Some(e),
            AppError::RequestDevice(e) => Some(e),
            AppError::NoSurfaceFormat => None,
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::CreateWindow(e)
    }
}

impl From<wgpu::CreateSurfaceError> for AppError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        AppError::CreateSurface(e)
    }
}

impl From<wgpu::RequestAdapterError> for AppError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        AppError::RequestAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for AppError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        AppError::RequestDevice(e)
    }
}

/// Open a window and run `ui` until the window is closed
///
/// Blocks the calling thread. Returns early with an error if the window or
/// graphics device cannot be created.
pub fn run(config: AppConfig, ui: Ui) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut runner = AppRunner::new(config, ui);
    event_loop.run_app(&mut runner)?;

    match runner.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct AppRunner {
    config: AppConfig,
    ui: Ui,
    input: WinitInput,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    canvas: Canvas,
    text: Option<TextRenderer>,
    error: Option<AppError>,
}

impl AppRunner {
    fn new(config: AppConfig, ui: Ui) -> Self {
        let canvas = Canvas::new(config.width, config.height);
        Self {
            config,
            ui,
            input: WinitInput::new(),
            window: None,
            presenter: None,
            canvas,
            text: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let presenter = pollster::block_on(Presenter::new(window.clone()))?;
        let (width, height) = presenter.size();
        self.canvas.resize(width, height);

        self.text = Some(TextRenderer::new());
        self.presenter = Some(presenter);
        window.request_redraw();
        self.window = Some(window);
        log::info!(
            "window '{}' ready at {}x{}",
            self.config.title,
            width,
            height
        );
        Ok(())
    }

    fn paint(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(presenter), Some(text)) = (&mut self.presenter, &mut self.text) else {
            return;
        };

        self.canvas.clear(self.config.background);
        self.ui.render(&mut CanvasPainter::new(&mut self.canvas, text));

        match presenter.present(&self.canvas) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    presenter.resize(window.inner_size());
                    window.request_redraw();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("frame skipped: {:?}", e),
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("{}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size);
                }
                if size.width > 0 && size.height > 0 {
                    self.canvas.resize(size.width, size.height);
                }
                self.ui.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                self.paint(event_loop);
                return;
            }
            ref other => {
                self.input.handle_event(&mut self.ui, other);
            }
        }

        if self.ui.take_redraw_request() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "UIED");
        assert_eq!((config.width, config.height), (500, 480));
        assert_eq!(config.background, palette::BACKGROUND);
    }

    #[test]
    fn test_config_builders() {
        let config = AppConfig::default()
            .with_title("UIED Terminal")
            .with_width(480)
            .with_height(360)
            .with_background([0, 0, 0, 255])
            .with_resizable(false);
        assert_eq!(config.title, "UIED Terminal");
        assert_eq!((config.width, config.height), (480, 360));
        assert_eq!(config.background, Color::rgb(0, 0, 0));
        assert!(!config.resizable);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NoSurfaceFormat.to_string(),
            "surface has no supported texture format"
        );
    }
}
