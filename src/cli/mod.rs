//! CLI module for SHEra
//!
//! Handles command-line argument parsing, configuration management and
//! terminal rendering.

pub mod args;
pub mod config;
pub mod display;
pub mod prompt;

pub use args::{Args, Commands, Verbosity};
pub use config::Config;
pub use prompt::{Input, Prompt};
