//! Terminal chess front end
//!
//! Wires the `chess_engine` crate to stdin and stdout: settings from a JSON
//! file and command line flags, a line-based move prompt and board printing.

pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;

pub use cli::Args;
pub use config::{AppConfig, GameMode};
pub use terminal::{Session, SessionEnd};
