// ABOUTME: Library root for lsdvol - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod output;
pub mod volume;
