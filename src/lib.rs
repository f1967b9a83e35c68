//! Water 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `water_2048::{core,input,store,types}`
//! and hosts the runner configuration shared by the terminal binary.

pub mod config;

pub use water_2048_core as core;
pub use water_2048_input as input;
pub use water_2048_store as store;
pub use water_2048_types as types;

pub use config::RunnerConfig;
