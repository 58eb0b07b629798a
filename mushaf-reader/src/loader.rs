//! Chapter Loader
//!
//! Turns a chapter id into a tri-state `ChapterRequestResult`.
//!
//! State lives in immutable `LoaderState` snapshots. `begin` hands out a
//! `RequestToken` carrying a new generation; `complete` applies a result only
//! while that token is still current, so a slow request for an older chapter
//! can never overwrite a newer one.

use crate::error::Result;
use crate::models::{ChapterId, LoadedChapter};
use crate::quran_api::QuranApiClient;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of the most recent chapter request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChapterRequestResult {
    Loading,
    Failed { message: String },
    Loaded { chapter: Arc<LoadedChapter> },
}

impl ChapterRequestResult {
    pub fn failed(message: impl Into<String>) -> Self {
        ChapterRequestResult::Failed {
            message: message.into(),
        }
    }

    pub fn loaded(chapter: LoadedChapter) -> Self {
        ChapterRequestResult::Loaded {
            chapter: Arc::new(chapter),
        }
    }

    pub fn chapter(&self) -> Option<&Arc<LoadedChapter>> {
        match self {
            ChapterRequestResult::Loaded { chapter } => Some(chapter),
            _ => None,
        }
    }
}

/// Request-generation token handed out by `LoaderState::begin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub generation: u64,
    pub chapter_id: ChapterId,
}

/// Snapshot of the loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderState {
    generation: u64,
    chapter_id: Option<ChapterId>,
    result: Option<ChapterRequestResult>,
}

impl LoaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Chapter of the latest request, if any was made
    pub fn chapter_id(&self) -> Option<ChapterId> {
        self.chapter_id
    }

    /// Result of the latest request; `None` until a chapter is selected
    pub fn result(&self) -> Option<&ChapterRequestResult> {
        self.result.as_ref()
    }

    pub fn is_current(&self, token: &RequestToken) -> bool {
        token.generation == self.generation && Some(token.chapter_id) == self.chapter_id
    }

    /// Whether a request for `chapter_id` is already loading or loaded
    ///
    /// A failed request does not count, so navigating to it again refetches.
    pub fn is_pending_or_loaded(&self, chapter_id: ChapterId) -> bool {
        self.chapter_id == Some(chapter_id)
            && matches!(
                self.result,
                Some(ChapterRequestResult::Loading) | Some(ChapterRequestResult::Loaded { .. })
            )
    }

    /// Start a request: bump the generation and enter `Loading`
    pub fn begin(&self, chapter_id: ChapterId) -> (LoaderState, RequestToken) {
        let generation = self.generation + 1;
        let next = LoaderState {
            generation,
            chapter_id: Some(chapter_id),
            result: Some(ChapterRequestResult::Loading),
        };
        (next, RequestToken { generation, chapter_id })
    }

    /// Apply a finished request
    ///
    /// Returns `None` when the token is stale; the caller keeps the current
    /// snapshot unchanged.
    pub fn complete(&self, token: RequestToken, result: ChapterRequestResult) -> Option<LoaderState> {
        if !self.is_current(&token) {
            return None;
        }
        Some(LoaderState {
            generation: self.generation,
            chapter_id: self.chapter_id,
            result: Some(result),
        })
    }
}

/// Fetches chapters through the Quran API client
#[derive(Clone)]
pub struct ChapterLoader {
    client: QuranApiClient,
}

impl ChapterLoader {
    pub fn new(client: QuranApiClient) -> Self {
        Self { client }
    }

    /// Fetch and join the three payloads for `chapter_id`
    pub async fn fetch(&self, chapter_id: ChapterId) -> Result<LoadedChapter> {
        self.client.fetch_chapter(chapter_id).await
    }

    /// Load a chapter into a `Loaded` or `Failed` result
    pub async fn load(&self, chapter_id: ChapterId) -> ChapterRequestResult {
        debug!(chapter_id = chapter_id.get(), "Loading chapter");

        match self.fetch(chapter_id).await {
            Ok(chapter) => {
                info!(
                    chapter_id = chapter_id.get(),
                    verses = chapter.verses.len(),
                    translation = chapter.translation.len(),
                    tracks = chapter.audio.len(),
                    "Chapter loaded"
                );
                ChapterRequestResult::loaded(chapter)
            }
            Err(e) => {
                warn!(chapter_id = chapter_id.get(), error = %e, "Chapter load failed");
                ChapterRequestResult::failed(e.user_message())
            }
        }
    }
}
