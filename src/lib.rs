//! zoomchart: viewport engine for zoomable, pannable, tap-selectable
//! multi-series line charts.
//!
//! The crate keeps a data window and a screen rectangle consistent while
//! pinch, drag and tap gestures mutate the window, and picks the nearest
//! point to a tap. Drawing is delegated to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
