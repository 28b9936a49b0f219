//! Configuration management for the AMBE frame tool
//!
//! This crate provides:
//! - TOML configuration file parsing
//! - Tool configuration structures with defaults

pub mod tool_config;
pub mod toml_config;

pub use tool_config::*;
pub use toml_config::*;
