//! Test helper modules for mushaf-reader integration tests
//!
//! - MockQuranApi: local stand-in for the public Quran API
//! - RecordingDevice: PlaybackDevice that records every command

// Each test binary uses a different subset
#![allow(dead_code)]

pub mod mock_api;
pub mod recording_device;

#[allow(unused_imports)]
pub use mock_api::{MockQuranApi, AUDIO_EDITION, TRANSLATION_EDITION};
#[allow(unused_imports)]
pub use recording_device::RecordingDevice;
