mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use interaction_controller::GestureOutcome;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};

pub use crate::extensions::PluginEvent;
