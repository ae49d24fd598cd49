//! Database clock: an HTTP endpoint reporting the current Postgres time,
//! and a client that displays it.

pub mod api;
pub mod config;
pub mod database;
pub mod display;
pub mod errors;
pub mod logging;
