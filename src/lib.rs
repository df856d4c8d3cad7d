pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod ranking;
// cmd and reports are modules of the binary crate (main.rs).
