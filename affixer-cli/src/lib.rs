//! affixer CLI library
//!
//! This library provides the command-line interface for splitting words
//! into prefix, root and suffix.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
