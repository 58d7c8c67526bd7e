//! Shared library surface for the sea route server and its tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod state;
pub mod weather;
