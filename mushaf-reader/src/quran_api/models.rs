//! Quran API response types
//!
//! Every endpoint wraps its payload in `{"code": .., "status": .., "data": ..}`.
//! Only the fields the reader uses are declared; unknown fields are ignored.

use crate::error::{Error, Result};
use crate::models::{AudioManifest, AudioTrack, ChapterMeta, TranslationVerse, Verse};
use serde::{Deserialize, Serialize};

/// Response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub status: Option<String>,
    pub data: T,
}

/// Chapter payload (`data` of `/surah/{n}` and its edition variants)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahData {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    #[serde(default)]
    pub revelation_type: Option<String>,
    #[serde(default)]
    pub number_of_ayahs: Option<u32>,
    pub ayahs: Vec<AyahData>,
}

/// Verse payload; `audio` is only present for recitation editions
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahData {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub audio_secondary: Vec<String>,
}

impl SurahData {
    pub fn meta(&self) -> ChapterMeta {
        ChapterMeta {
            number: self.number,
            name: self.name.clone(),
            english_name: self.english_name.clone(),
            english_name_translation: self.english_name_translation.clone(),
            revelation_type: self.revelation_type.clone(),
            number_of_ayahs: self.number_of_ayahs,
        }
    }

    pub fn into_verses(self) -> Vec<Verse> {
        self.ayahs
            .into_iter()
            .map(|a| Verse {
                number: a.number,
                number_in_surah: a.number_in_surah,
                text: a.text,
            })
            .collect()
    }

    pub fn into_translation(self) -> Vec<TranslationVerse> {
        self.ayahs
            .into_iter()
            .map(|a| TranslationVerse {
                number: a.number,
                text: a.text,
            })
            .collect()
    }

    /// Audio manifest in response order
    ///
    /// A verse without an `audio` URL is a parse error.
    pub fn into_manifest(self) -> Result<AudioManifest> {
        let tracks = self
            .ayahs
            .into_iter()
            .map(|a| match a.audio {
                Some(url) if !url.is_empty() => Ok(AudioTrack {
                    verse_number: a.number,
                    url,
                }),
                _ => Err(Error::Parse(format!("verse {} has no audio URL", a.number))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AudioManifest::new(tracks))
    }
}
