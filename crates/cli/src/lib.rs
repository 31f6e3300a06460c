//! CLI utilities for the jobboard tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Rendering filtered jobs as terminal cards, HTML or JSON

#![warn(missing_docs)]

pub mod output;
pub mod render;
