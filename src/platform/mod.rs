// StockManager - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories, serde_json, toml.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod storage;
