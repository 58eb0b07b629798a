//! Shared reader state
//!
//! Holds the current chapter snapshot, the sequential player and the event
//! bus. Lock order is always `loader_state` before `player`.

use crate::loader::{ChapterLoader, ChapterRequestResult, LoaderState, RequestToken};
use crate::models::{AudioManifest, ChapterId};
use crate::playback::{
    BrowserDevice, PlayerReport, PlayerSnapshot, SequentialPlayer, TrackErrorPolicy, TrackRef,
};
use mushaf_common::events::{EventBus, ReaderEvent};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

pub struct SharedState {
    loader: ChapterLoader,
    loader_state: RwLock<LoaderState>,
    player: Mutex<SequentialPlayer<BrowserDevice>>,
    events: EventBus,
}

impl SharedState {
    pub fn new(loader: ChapterLoader, policy: TrackErrorPolicy, events: EventBus) -> Self {
        let device = BrowserDevice::new(events.clone());
        Self {
            loader,
            loader_state: RwLock::new(LoaderState::new()),
            player: Mutex::new(SequentialPlayer::new(device, policy)),
            events,
        }
    }

    pub fn subscribe_events(&self) -> tokio::sync::broadcast::Receiver<ReaderEvent> {
        self.events.subscribe()
    }

    pub async fn loader_snapshot(&self) -> LoaderState {
        self.loader_state.read().await.clone()
    }

    /// Navigate to a chapter
    ///
    /// Returns the current result without refetching when the same chapter
    /// is already loading or loaded.
    pub async fn open_chapter(&self, chapter_id: ChapterId) -> ChapterRequestResult {
        let token = {
            let mut state = self.loader_state.write().await;
            if state.is_pending_or_loaded(chapter_id) {
                return state
                    .result()
                    .cloned()
                    .unwrap_or(ChapterRequestResult::Loading);
            }
            let (next, token) = state.begin(chapter_id);
            *state = next;
            token
        };
        self.run_load(token).await
    }

    async fn run_load(&self, token: RequestToken) -> ChapterRequestResult {
        let chapter_id = token.chapter_id.get();
        self.events.emit_lossy(ReaderEvent::ChapterLoadStarted {
            chapter_id,
            generation: token.generation,
            timestamp: chrono::Utc::now(),
        });

        // No lock held across the network wait
        let result = self.loader.load(token.chapter_id).await;

        let mut state = self.loader_state.write().await;
        let Some(next) = state.complete(token, result.clone()) else {
            debug!(
                chapter_id,
                generation = token.generation,
                current_generation = state.generation(),
                "Discarding stale chapter load"
            );
            return state
                .result()
                .cloned()
                .unwrap_or(ChapterRequestResult::Loading);
        };
        *state = next;

        match &result {
            ChapterRequestResult::Loaded { chapter } => {
                let report = self
                    .player
                    .lock()
                    .await
                    .load_manifest(chapter.audio.clone());
                self.events.emit_lossy(ReaderEvent::ChapterLoaded {
                    chapter_id,
                    generation: token.generation,
                    verse_count: chapter.verses.len(),
                    timestamp: chrono::Utc::now(),
                });
                self.publish_report(&report);
            }
            ChapterRequestResult::Failed { message } => {
                // Drop the previous chapter's tracks
                let report = self
                    .player
                    .lock()
                    .await
                    .load_manifest(AudioManifest::default());
                self.publish_report(&report);
                self.events.emit_lossy(ReaderEvent::ChapterLoadFailed {
                    chapter_id,
                    generation: token.generation,
                    message: message.clone(),
                    timestamp: chrono::Utc::now(),
                });
            }
            ChapterRequestResult::Loading => {}
        }

        result
    }

    pub async fn player_snapshot(&self) -> PlayerSnapshot {
        self.player.lock().await.snapshot()
    }

    pub async fn play(&self) -> PlayerSnapshot {
        let report = self.player.lock().await.play();
        self.publish_report(&report);
        report.snapshot
    }

    pub async fn pause_toggle(&self) -> PlayerSnapshot {
        let report = self.player.lock().await.pause_toggle();
        self.publish_report(&report);
        report.snapshot
    }

    pub async fn stop(&self) -> PlayerSnapshot {
        let report = self.player.lock().await.stop();
        self.publish_report(&report);
        report.snapshot
    }

    pub async fn track_ended(&self, track: TrackRef) -> PlayerSnapshot {
        let report = self.player.lock().await.track_ended(track);
        self.publish_report(&report);
        report.snapshot
    }

    pub async fn track_failed(&self, track: TrackRef, message: String) -> PlayerSnapshot {
        let report = self.player.lock().await.track_failed(track, message);
        self.publish_report(&report);
        report.snapshot
    }

    fn publish_report(&self, report: &PlayerReport) {
        for failure in &report.failures {
            self.events.emit_lossy(ReaderEvent::TrackLoadFailed {
                track_index: failure.index,
                attempt: failure.attempt,
                action: failure.action,
                message: failure.message.clone(),
                timestamp: chrono::Utc::now(),
            });
        }

        if report.cursor_moved() {
            self.events.emit_lossy(ReaderEvent::PlaybackStateChanged {
                old_state: report.old_state,
                new_state: report.snapshot.status,
                track_index: report.snapshot.index,
                timestamp: chrono::Utc::now(),
            });
        }
    }
}
