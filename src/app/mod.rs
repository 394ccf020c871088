// StockManager - app/mod.rs
//
// Application layer: orchestration and state management.
// Dependencies: core layer, the platform storage trait.
// Must NOT depend on: ui, concrete storage backends.

pub mod persist;
pub mod state;
