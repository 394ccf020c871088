// StockManager - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: concrete storage backends, direct I/O.

pub mod page;
pub mod panels;
pub mod theme;
