//! Event types for the Mushaf event system
//!
//! Provides the shared event definitions and the EventBus used to fan
//! events out to SSE clients.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Playback state of the sequential audio player
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No manifest, or the sequence has finished
    #[default]
    Idle,
    /// A track is sourced and playing
    Playing,
    /// A track is sourced and paused mid-way
    Paused,
    /// Device paused and rewound; cursor left where it was
    Stopped,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "idle"),
            PlaybackState::Playing => write!(f, "playing"),
            PlaybackState::Paused => write!(f, "paused"),
            PlaybackState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Instruction for the single playback device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DeviceCommand {
    /// Replace the device source with a new track URL
    SetSource { url: String },
    /// Start or resume playback at the current device position
    Play,
    /// Pause without moving the device position
    Pause,
    /// Move the device position back to zero
    Rewind,
}

/// What the player did after a track failed to load or play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackErrorAction {
    /// Re-sourced the same track
    Retry,
    /// Advanced past the track
    Skip,
}

/// Mushaf reader event types
///
/// Events are broadcast via EventBus and serialized for SSE transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReaderEvent {
    /// A chapter load was requested
    ChapterLoadStarted {
        chapter_id: u32,
        generation: u64,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A chapter finished loading and became current
    ChapterLoaded {
        chapter_id: u32,
        generation: u64,
        verse_count: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A chapter load failed and its message became current
    ChapterLoadFailed {
        chapter_id: u32,
        generation: u64,
        message: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Player state changed
    PlaybackStateChanged {
        old_state: PlaybackState,
        new_state: PlaybackState,
        track_index: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Command for the playback device (consumed by the reader page)
    DeviceCommand {
        #[serde(flatten)]
        command: DeviceCommand,
        track_index: usize,
        /// Sourcing attempt of the track; echoed back in device notifications
        attempt: u32,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// A track could not be loaded or played
    TrackLoadFailed {
        track_index: usize,
        attempt: u32,
        action: TrackErrorAction,
        message: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl ReaderEvent {
    /// SSE event name for this event
    pub fn event_type(&self) -> &'static str {
        match self {
            ReaderEvent::ChapterLoadStarted { .. } => "ChapterLoadStarted",
            ReaderEvent::ChapterLoaded { .. } => "ChapterLoaded",
            ReaderEvent::ChapterLoadFailed { .. } => "ChapterLoadFailed",
            ReaderEvent::PlaybackStateChanged { .. } => "PlaybackStateChanged",
            ReaderEvent::DeviceCommand { .. } => "DeviceCommand",
            ReaderEvent::TrackLoadFailed { .. } => "TrackLoadFailed",
        }
    }
}

/// Central event distribution bus
///
/// Wraps `tokio::sync::broadcast`: publishing never blocks, slow subscribers
/// see a lag error instead of stalling producers, and subscribers only
/// receive events emitted after they subscribed.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ReaderEvent>,
}

impl EventBus {
    /// Creates a new EventBus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<ReaderEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Err` if nobody is listening.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: ReaderEvent,
    ) -> Result<usize, broadcast::error::SendError<ReaderEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: ReaderEvent) {
        let _ = self.tx.send(event);
    }

    /// Current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
