//! Extension hooks observing the engine.
//!
//! Plugins only see events and read-only context; they never reach into
//! viewport internals.

mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
