// fixibake/src/lib.rs
//! # Fixibake CLI Application
//!
//! This crate provides the terminal interface for the Fixibake encoding
//! detector. All detection logic lives in `fixibake-core`; this crate parses
//! arguments, loads configuration, and renders rankings.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::detect::{run_detect, DetectOptions};
pub use commands::encodings::run_encodings;
