//! Core utilities for the jobboard tools
//!
//! This crate provides shared functionality used by the jobboard binary:
//!
//! - **Error handling**: Coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use jobboard_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! let matcher = config.schema.search.matcher();
//! println!("threshold: {}", matcher.threshold());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
