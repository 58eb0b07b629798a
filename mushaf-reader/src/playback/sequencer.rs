//! Playback sequencing state machine
//!
//! `reduce` is a pure function from (snapshot, manifest, input) to the next
//! snapshot plus the device commands that realise it. It never touches a
//! device itself.
//!
//! Rules:
//! - `Play` always restarts at track 0, whatever the previous state
//! - `PauseToggle` flips Playing/Paused, resumes from Stopped, and does
//!   nothing while Idle
//! - `Stop` pauses and rewinds the device but leaves the cursor index alone
//! - device notifications count only while Playing and only for the
//!   current `TrackRef`; anything else is a late report and is dropped
//! - `TrackEnded` advances, `TrackLoadError` retries or skips according to
//!   `TrackErrorPolicy`
//!
//! Every transition sources at most one track.

use crate::error::{Error, Result};
use crate::models::AudioManifest;
use mushaf_common::events::{DeviceCommand, PlaybackState, TrackErrorAction};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `TrackErrorPolicy::Retry::max_attempts`
pub const MAX_TRACK_ATTEMPTS: u32 = 10;

/// What to do when a track fails to load or play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackErrorPolicy {
    /// Advance past the failing track immediately
    Skip,
    /// Re-source the track until `max_attempts` total attempts, then skip
    Retry { max_attempts: u32 },
}

impl TrackErrorPolicy {
    /// Build from config values (`"skip"` or `"retry"`)
    pub fn from_config(name: &str, max_attempts: u32) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(TrackErrorPolicy::Skip),
            "retry" => {
                if max_attempts == 0 || max_attempts > MAX_TRACK_ATTEMPTS {
                    return Err(Error::Config(format!(
                        "max_track_attempts must be between 1 and {}, got {}",
                        MAX_TRACK_ATTEMPTS, max_attempts
                    )));
                }
                Ok(TrackErrorPolicy::Retry { max_attempts })
            }
            other => Err(Error::Config(format!(
                "Unknown track_error_policy '{}' (expected 'skip' or 'retry')",
                other
            ))),
        }
    }
}

impl Default for TrackErrorPolicy {
    fn default() -> Self {
        TrackErrorPolicy::Retry { max_attempts: 2 }
    }
}

/// Current track index plus paused flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackCursor {
    pub index: usize,
    pub paused: bool,
}

/// One sourcing of a track: manifest index plus attempt number
///
/// Every device command carries the `TrackRef` it belongs to, and the device
/// echoes it back in its notifications. A retry bumps `attempt`, so reports
/// about an earlier attempt no longer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    pub index: usize,
    pub attempt: u32,
}

impl TrackRef {
    pub fn new(index: usize, attempt: u32) -> Self {
        Self { index, attempt }
    }
}

/// Immutable player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerSnapshot {
    pub status: PlaybackState,
    /// Index of the active (or next) track
    pub index: usize,
    /// Attempts made to play the track at `index`
    pub attempts: u32,
}

impl PlayerSnapshot {
    pub fn cursor(&self) -> PlaybackCursor {
        PlaybackCursor {
            index: self.index,
            paused: self.status == PlaybackState::Paused,
        }
    }

    /// The sourcing the device is currently working on
    pub fn track(&self) -> TrackRef {
        TrackRef::new(self.index, self.attempts)
    }

    fn with(status: PlaybackState, index: usize, attempts: u32) -> Self {
        Self {
            status,
            index,
            attempts,
        }
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Play,
    PauseToggle,
    Stop,
    /// Device finished `track` naturally
    TrackEnded { track: TrackRef },
    /// Device could not load or play `track`
    TrackLoadError { track: TrackRef, message: String },
    /// A new chapter's manifest replaced the old one
    ManifestLoaded,
}

/// A failed track and how it was handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackFailure {
    pub index: usize,
    pub attempt: u32,
    pub action: TrackErrorAction,
    pub message: String,
}

/// Result of one `reduce` step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub snapshot: PlayerSnapshot,
    pub commands: Vec<DeviceCommand>,
    pub failure: Option<TrackFailure>,
}

impl Transition {
    fn unchanged(snapshot: &PlayerSnapshot) -> Self {
        Self {
            snapshot: *snapshot,
            commands: Vec::new(),
            failure: None,
        }
    }

    fn to(snapshot: PlayerSnapshot, commands: Vec<DeviceCommand>) -> Self {
        Self {
            snapshot,
            commands,
            failure: None,
        }
    }
}

fn source_and_play(manifest: &AudioManifest, index: usize) -> Vec<DeviceCommand> {
    match manifest.get(index) {
        Some(track) => vec![
            DeviceCommand::SetSource {
                url: track.url.clone(),
            },
            DeviceCommand::Play,
        ],
        None => Vec::new(),
    }
}

/// Move to `index + 1`, or to Idle after the last track
fn advance(manifest: &AudioManifest, index: usize) -> Transition {
    let next = index + 1;
    if next < manifest.len() {
        Transition::to(
            PlayerSnapshot::with(PlaybackState::Playing, next, 1),
            source_and_play(manifest, next),
        )
    } else {
        Transition::to(PlayerSnapshot::with(PlaybackState::Idle, index, 0), Vec::new())
    }
}

/// Compute the next snapshot and device commands
pub fn reduce(
    snapshot: &PlayerSnapshot,
    manifest: &AudioManifest,
    input: &PlayerInput,
    policy: TrackErrorPolicy,
) -> Transition {
    use PlaybackState::*;

    match input {
        PlayerInput::Play => {
            if manifest.is_empty() {
                return Transition::unchanged(snapshot);
            }
            Transition::to(
                PlayerSnapshot::with(Playing, 0, 1),
                source_and_play(manifest, 0),
            )
        }

        PlayerInput::PauseToggle => match snapshot.status {
            Playing => Transition::to(
                PlayerSnapshot { status: Paused, ..*snapshot },
                vec![DeviceCommand::Pause],
            ),
            Paused | Stopped => Transition::to(
                PlayerSnapshot { status: Playing, ..*snapshot },
                vec![DeviceCommand::Play],
            ),
            Idle => Transition::unchanged(snapshot),
        },

        PlayerInput::Stop => match snapshot.status {
            Playing | Paused | Stopped => Transition::to(
                PlayerSnapshot { status: Stopped, ..*snapshot },
                vec![DeviceCommand::Pause, DeviceCommand::Rewind],
            ),
            Idle => Transition::unchanged(snapshot),
        },

        PlayerInput::TrackEnded { track } => {
            if snapshot.status != Playing || *track != snapshot.track() {
                return Transition::unchanged(snapshot);
            }
            advance(manifest, snapshot.index)
        }

        PlayerInput::TrackLoadError { track, message } => {
            // A paused device is not loading anything; Resume replays the track
            if snapshot.status != Playing || *track != snapshot.track() {
                return Transition::unchanged(snapshot);
            }

            let retry = match policy {
                TrackErrorPolicy::Retry { max_attempts } => snapshot.attempts < max_attempts,
                TrackErrorPolicy::Skip => false,
            };

            let failure = TrackFailure {
                index: snapshot.index,
                attempt: snapshot.attempts,
                action: if retry {
                    TrackErrorAction::Retry
                } else {
                    TrackErrorAction::Skip
                },
                message: message.clone(),
            };

            let mut transition = if retry {
                Transition::to(
                    PlayerSnapshot::with(Playing, snapshot.index, snapshot.attempts + 1),
                    source_and_play(manifest, snapshot.index),
                )
            } else {
                advance(manifest, snapshot.index)
            };
            transition.failure = Some(failure);
            transition
        }

        PlayerInput::ManifestLoaded => {
            let commands = match snapshot.status {
                Playing | Paused => vec![DeviceCommand::Pause, DeviceCommand::Rewind],
                Stopped | Idle => Vec::new(),
            };
            Transition::to(PlayerSnapshot::default(), commands)
        }
    }
}
