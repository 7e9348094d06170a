//! CLI library for testing purposes

pub mod config;

pub use config::{CONFIG_FILE_NAME, Config, RuntimeArgs, Settings};
