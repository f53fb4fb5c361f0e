//! Tasbeeh CLI library.
//!
//! This crate provides the terminal interface for the dhikr counter.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
