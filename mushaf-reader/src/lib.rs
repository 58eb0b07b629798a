//! mushaf-reader library - chapter reader with sequential verse recitation
//!
//! Fetches a chapter's verse text, translation and audio manifest from the
//! public Quran API, joins them into a reading view, and drives a browser
//! audio element through the verses one after another.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod playback;
pub mod quran_api;
pub mod reading;
pub mod state;

pub use api::{build_router, AppContext};
pub use error::{Error, Result};
pub use state::SharedState;
