//! Sequential audio playback
//!
//! - `sequencer`: pure state machine over the playback cursor
//! - `player`: applies sequencer transitions to a playback device
//! - `device`: the playback device abstraction
//! - `browser_device`: device driven over SSE by the reader page

pub mod browser_device;
pub mod device;
pub mod player;
pub mod sequencer;

pub use browser_device::BrowserDevice;
pub use device::PlaybackDevice;
pub use player::{PlayerReport, SequentialPlayer};
pub use sequencer::{
    PlaybackCursor, PlayerInput, PlayerSnapshot, TrackErrorPolicy, TrackFailure, TrackRef,
    Transition,
};
