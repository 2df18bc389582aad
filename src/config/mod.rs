//! Engine settings for the Tip Pool Allocation Engine.
//!
//! This module provides the settings struct that tunes the engine's input
//! policy, history paging, and roster seeding, plus a YAML file loader.
//!
//! # Example
//!
//! ```no_run
//! use tip_engine::config::EngineSettings;
//!
//! let settings = EngineSettings::load("./settings.yaml").unwrap();
//! println!("History page size: {}", settings.history_limit);
//! ```

mod settings;

pub use settings::EngineSettings;
