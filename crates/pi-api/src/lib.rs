//! Platform Insights API — library crate for the insights REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pi-e2e-tests`) can access internal types like `AppState`,
//! `build_router`, and the collaborator traits.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod todos;
