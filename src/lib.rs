//! `rental-listings` library crate.
//!
//! The binary (`listings`) is a thin wrapper around this library so that:
//!
//! - lookups, pricing and URL editing are testable without spawning processes
//! - a frontend server can call the same resolver directly

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod images;
pub mod logging;
pub mod pricing;
pub mod query;
pub mod report;
