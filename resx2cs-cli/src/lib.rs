//! CLI library for testing purposes

pub mod config;
pub mod console;

pub use config::Config;
pub use console::ConsoleLogger;
