//! # Tandem
//!
//! Employee pair collaboration analytics: upload a CSV of project
//! assignments and find the employees who worked together the longest.
//!
//! ## Modules
//!
//! - `app` - Bootstrap: logging setup and configuration resolution
//! - `config` - Runtime configuration from file and environment
//! - `error` - Crate-wide error type
//! - `pairs` - Core pipeline: parse, resolve dates, intersect, aggregate
//! - `server` - HTTP upload endpoint wrapping the pipeline

pub mod app;
pub mod config;
pub mod error;
pub mod pairs;
pub mod server;
