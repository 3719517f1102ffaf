//! Configuration loading and management for the payroll engine.
//!
//! This module loads the pay policy (tax rate, overtime multiplier) from a
//! YAML file so the rates can vary by jurisdiction without code changes.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE};
pub use types::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_TAX_RATE, PayPolicy, PolicyConfig, PolicyMetadata,
};
