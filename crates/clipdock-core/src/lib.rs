//! Clipdock Core Library
//!
//! This crate provides the domain models, error types, and configuration
//! shared across all Clipdock components.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
