//! Quran API client
//!
//! Fetches chapter text, translation and recitation audio from an
//! `api.alquran.cloud`-compatible REST API.

pub mod client;
pub mod models;

pub use client::{ClientConfig, QuranApiClient};
