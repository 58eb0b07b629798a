//! HTTP client for the Quran API
//!
//! One chapter load is three GETs issued concurrently:
//! - `surah/{n}`: verse text and chapter metadata
//! - `surah/{n}/{translation_edition}`: translation
//! - `surah/{n}/{audio_edition}`: per-verse audio URLs
//!
//! The first failure fails the whole load. There is no retry and no cache.

use crate::error::{Error, Result};
use crate::models::{ChapterId, LoadedChapter};
use crate::quran_api::models::{Envelope, SurahData};
use mushaf_common::config::{DEFAULT_API_BASE_URL, DEFAULT_AUDIO_EDITION, DEFAULT_TRANSLATION_EDITION};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("mushaf-reader/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the Quran API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub translation_edition: String,
    pub audio_edition: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            translation_edition: DEFAULT_TRANSLATION_EDITION.to_string(),
            audio_edition: DEFAULT_AUDIO_EDITION.to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Quran API client
#[derive(Clone)]
pub struct QuranApiClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl QuranApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { http_client, config })
    }

    /// Fetch text, translation and audio concurrently and join them
    pub async fn fetch_chapter(&self, chapter_id: ChapterId) -> Result<LoadedChapter> {
        let (surah, translation, audio) = tokio::try_join!(
            self.fetch_surah(chapter_id, None),
            self.fetch_surah(chapter_id, Some(self.config.translation_edition.as_str())),
            self.fetch_surah(chapter_id, Some(self.config.audio_edition.as_str())),
        )?;

        let chapter = LoadedChapter {
            meta: surah.meta(),
            verses: surah.into_verses(),
            translation: translation.into_translation(),
            audio: audio.into_manifest()?,
        };

        if !chapter.is_aligned() {
            warn!(
                chapter_id = chapter_id.get(),
                verses = chapter.verses.len(),
                translation = chapter.translation.len(),
                tracks = chapter.audio.len(),
                "Chapter payloads have different lengths"
            );
        }

        Ok(chapter)
    }

    /// Fetch one chapter payload, optionally for a specific edition
    pub async fn fetch_surah(
        &self,
        chapter_id: ChapterId,
        edition: Option<&str>,
    ) -> Result<SurahData> {
        let endpoint = match edition {
            Some(edition) => format!("surah/{}/{}", chapter_id, edition),
            None => format!("surah/{}", chapter_id),
        };
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);

        debug!(%url, "Querying Quran API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let envelope: Envelope<SurahData> = response
            .json()
            .await
            // Body read can time out too; decode failures still map to Parse
            .map_err(|e| Error::from_reqwest(&endpoint, e))?;

        Ok(envelope.data)
    }
}
