//! Chapter domain types
//!
//! A loaded chapter is the join of three API payloads: verse text,
//! translation, and the per-verse audio manifest.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Positive chapter identifier
///
/// Zero is rejected; there is no local upper bound, the API decides which
/// chapters exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChapterId(u32);

impl ChapterId {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidChapter(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for ChapterId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidChapter(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chapter header information from the verse-text response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterMeta {
    pub number: u32,
    /// Arabic name
    pub name: String,
    /// Transliterated name
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_type: Option<String>,
    pub number_of_ayahs: Option<u32>,
}

impl ChapterMeta {
    /// Reading view heading, e.g. "The Opening - (Al-Faatiha) سورة الفاتحة"
    pub fn title(&self) -> String {
        format!(
            "{} - ({}) {}",
            self.english_name_translation, self.english_name, self.name
        )
    }
}

/// One verse of original-language text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    /// Global ordinal across the whole text
    pub number: u32,
    /// Ordinal within the chapter
    pub number_in_surah: u32,
    pub text: String,
}

/// One translated verse, keyed by global ordinal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationVerse {
    pub number: u32,
    pub text: String,
}

/// One audio track of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioTrack {
    /// Global ordinal of the recited verse
    pub verse_number: u32,
    pub url: String,
}

/// Ordered per-verse audio tracks, index-aligned to the verse list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioManifest {
    tracks: Vec<AudioTrack>,
}

impl AudioManifest {
    pub fn new(tracks: Vec<AudioTrack>) -> Self {
        Self { tracks }
    }

    /// Build a manifest from bare URLs (verse numbers start at 1)
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tracks = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| AudioTrack {
                verse_number: i as u32 + 1,
                url: url.into(),
            })
            .collect();
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AudioTrack> {
        self.tracks.get(index)
    }
}

/// Fully loaded chapter: immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedChapter {
    pub meta: ChapterMeta,
    pub verses: Vec<Verse>,
    pub translation: Vec<TranslationVerse>,
    pub audio: AudioManifest,
}

impl LoadedChapter {
    /// Whether verse, translation and audio lists have the same length
    pub fn is_aligned(&self) -> bool {
        self.verses.len() == self.translation.len() && self.verses.len() == self.audio.len()
    }

    /// Translation entries indexed by global ordinal
    ///
    /// The translation list is not guaranteed to share array positions with
    /// the verse list, so joins always go through the ordinal.
    pub fn translation_index(&self) -> HashMap<u32, &TranslationVerse> {
        self.translation.iter().map(|t| (t.number, t)).collect()
    }
}
