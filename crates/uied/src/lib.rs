//! # uied
//!
//! Immediate, retained-element UI toolkit core with no graphics dependencies.
//!
//! Elements are registered once and addressed by [`ElementId`] handles. The
//! [`Ui`] engine owns them, routes pointer and character input, keeps a
//! single focus, and paints shapes onto any [`Surface`]. Windowing and
//! rasterization live in backend crates like `uied-wgpu`.
//!
//! ## Core Types
//!
//! - [`Ui`] - The engine: registry, focus, redraw flag
//! - [`Element`] - A registered element and its [`Widget`] payload
//! - [`Registry`] - Append-only element storage
//!
//! ## Building Elements
//!
//! - [`Button`], [`Label`], [`TextInput`], [`Terminal`], [`Slider`]
//!
//! ## Input & Events
//!
//! - [`InputEvent`] - Backend-agnostic pointer and character events
//! - [`hit_test`] - Topmost element under a point
//!
//! ## Painting
//!
//! - [`Surface`] - Receives [`Shape`]s in paint order
//! - [`FullOutput`] - Recording surface

mod color;
mod context;
mod element;
mod error;
mod events;
mod hit_test;
mod input;
mod output;
mod primitives;
mod registry;
pub mod terminal;
pub mod widgets;

pub use color::*;
pub use context::*;
pub use element::*;
pub use error::*;
pub use hit_test::*;
pub use input::{keys, InputEvent};
pub use output::*;
pub use primitives::*;
pub use registry::*;
pub use widgets::*;
