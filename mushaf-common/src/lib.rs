//! # Mushaf Common Library
//!
//! Shared code for the Mushaf reader workspace including:
//! - Error types
//! - Configuration loading (TOML, environment, compiled defaults)
//! - Event types (ReaderEvent enum) and the EventBus
//! - The static chapter dataset used by the sidebar

pub mod chapters;
pub mod config;
pub mod error;
pub mod events;

pub use chapters::ChapterInfo;
pub use error::{Error, Result};
