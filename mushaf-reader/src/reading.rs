//! Reading view: verses joined with their translation

use crate::models::{ChapterMeta, LoadedChapter};
use serde::Serialize;

/// One displayed verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingRow {
    pub number: u32,
    pub number_in_surah: u32,
    pub text: String,
    /// Translation with its first word capitalized; `None` if no entry
    /// shares this verse's global ordinal
    pub translation: Option<String>,
}

/// Everything the reading page shows for a loaded chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingView {
    pub title: String,
    pub meta: ChapterMeta,
    pub rows: Vec<ReadingRow>,
    pub track_count: usize,
}

impl ReadingView {
    pub fn from_chapter(chapter: &LoadedChapter) -> Self {
        let translations = chapter.translation_index();

        let rows = chapter
            .verses
            .iter()
            .map(|verse| ReadingRow {
                number: verse.number,
                number_in_surah: verse.number_in_surah,
                text: verse.text.clone(),
                translation: translations
                    .get(&verse.number)
                    .map(|t| capitalize_first_word(&t.text)),
            })
            .collect();

        Self {
            title: chapter.meta.title(),
            meta: chapter.meta.clone(),
            rows,
            track_count: chapter.audio.len(),
        }
    }
}

/// Upper-case the first character of the first space-separated word
pub fn capitalize_first_word(text: &str) -> String {
    let (first, rest) = match text.split_once(' ') {
        Some((first, rest)) => (first, Some(rest)),
        None => (text, None),
    };

    let mut chars = first.chars();
    let capitalized: String = match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    match rest {
        Some(rest) => format!("{} {}", capitalized, rest),
        None => capitalized,
    }
}
