//! Sequential audio player
//!
//! Owns the playback cursor and the single playback device. Each operation
//! runs the sequencer and applies the resulting commands in order. A device
//! command that fails is fed back as `TrackLoadError`, so a broken track is
//! retried or skipped instead of stalling the sequence.

use crate::models::AudioManifest;
use crate::playback::device::PlaybackDevice;
use crate::playback::sequencer::{
    reduce, PlaybackCursor, PlayerInput, PlayerSnapshot, TrackErrorPolicy, TrackFailure, TrackRef,
};
use mushaf_common::events::PlaybackState;
use tracing::{debug, info, warn};

/// Summary of one player operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerReport {
    pub old_state: PlaybackState,
    pub old_index: usize,
    pub snapshot: PlayerSnapshot,
    pub failures: Vec<TrackFailure>,
}

impl PlayerReport {
    pub fn state_changed(&self) -> bool {
        self.old_state != self.snapshot.status
    }

    /// State or track index moved
    pub fn cursor_moved(&self) -> bool {
        self.state_changed() || self.old_index != self.snapshot.index
    }
}

pub struct SequentialPlayer<D: PlaybackDevice> {
    device: D,
    manifest: AudioManifest,
    snapshot: PlayerSnapshot,
    policy: TrackErrorPolicy,
}

impl<D: PlaybackDevice> SequentialPlayer<D> {
    pub fn new(device: D, policy: TrackErrorPolicy) -> Self {
        Self {
            device,
            manifest: AudioManifest::default(),
            snapshot: PlayerSnapshot::default(),
            policy,
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.snapshot
    }

    pub fn cursor(&self) -> PlaybackCursor {
        self.snapshot.cursor()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Replace the manifest with a new chapter's tracks; cursor back to 0
    pub fn load_manifest(&mut self, manifest: AudioManifest) -> PlayerReport {
        info!(tracks = manifest.len(), "Loading audio manifest");
        // Stop the old chapter's track before its manifest goes away
        let report = self.dispatch(PlayerInput::ManifestLoaded);
        self.manifest = manifest;
        report
    }

    /// Start the sequence from the first track
    pub fn play(&mut self) -> PlayerReport {
        self.dispatch(PlayerInput::Play)
    }

    pub fn pause_toggle(&mut self) -> PlayerReport {
        self.dispatch(PlayerInput::PauseToggle)
    }

    pub fn stop(&mut self) -> PlayerReport {
        self.dispatch(PlayerInput::Stop)
    }

    /// Device finished `track` naturally
    pub fn track_ended(&mut self, track: TrackRef) -> PlayerReport {
        self.dispatch(PlayerInput::TrackEnded { track })
    }

    /// Device failed to load or play `track`
    pub fn track_failed(&mut self, track: TrackRef, message: impl Into<String>) -> PlayerReport {
        self.dispatch(PlayerInput::TrackLoadError {
            track,
            message: message.into(),
        })
    }

    fn dispatch(&mut self, input: PlayerInput) -> PlayerReport {
        let old_state = self.snapshot.status;
        let old_index = self.snapshot.index;
        let mut failures = Vec::new();
        let mut pending = Some(input);

        while let Some(input) = pending.take() {
            debug!(?input, snapshot = ?self.snapshot, "Player input");
            let transition = reduce(&self.snapshot, &self.manifest, &input, self.policy);
            self.snapshot = transition.snapshot;

            if let Some(failure) = transition.failure {
                warn!(
                    track_index = failure.index,
                    attempt = failure.attempt,
                    action = ?failure.action,
                    "Track failed: {}",
                    failure.message
                );
                failures.push(failure);
            }

            let track = self.snapshot.track();
            for command in &transition.commands {
                if let Err(e) = self.device.apply(command, track) {
                    pending = Some(PlayerInput::TrackLoadError {
                        track,
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }

        PlayerReport {
            old_state,
            old_index,
            snapshot: self.snapshot,
            failures,
        }
    }
}
