//! HTTP request handlers
//!
//! Sidebar, reading view, playback controls and device notifications.

use crate::api::AppContext;
use crate::loader::{ChapterRequestResult, LoaderState};
use crate::models::ChapterId;
use crate::playback::{PlayerSnapshot, TrackRef};
use crate::reading::ReadingView;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mushaf_common::chapters::{self, ChapterInfo};
use mushaf_common::events::PlaybackState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
    git_hash: String,
    build_timestamp: String,
    build_profile: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: String,
}

#[derive(Debug, Serialize)]
pub struct ChaptersResponse {
    chapters: &'static [ChapterInfo],
    total_verses: u32,
}

/// Reading view body, tagged by `status`
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReaderBody {
    /// No chapter selected yet
    Empty,
    Loading,
    Failed { message: String },
    Loaded { view: ReadingView },
}

#[derive(Debug, Serialize)]
pub struct ReaderResponse {
    chapter_id: Option<ChapterId>,
    generation: u64,
    #[serde(flatten)]
    body: ReaderBody,
    playback: PlaybackResponse,
}

#[derive(Debug, Serialize)]
pub struct PlaybackResponse {
    state: PlaybackState,
    track_index: usize,
    paused: bool,
    attempts: u32,
}

impl From<PlayerSnapshot> for PlaybackResponse {
    fn from(snapshot: PlayerSnapshot) -> Self {
        Self {
            state: snapshot.status,
            track_index: snapshot.index,
            paused: snapshot.cursor().paused,
            attempts: snapshot.attempts,
        }
    }
}

/// Device notifications echo the `track_index` and `attempt` of the
/// `DeviceCommand` that sourced the track
#[derive(Debug, Deserialize)]
pub struct DeviceEndedRequest {
    index: usize,
    attempt: u32,
}

#[derive(Debug, Deserialize)]
pub struct DeviceErrorRequest {
    index: usize,
    attempt: u32,
    #[serde(default)]
    message: Option<String>,
}

type ApiError = (StatusCode, Json<StatusResponse>);

fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(StatusResponse {
            status: format!("error: {}", message),
        }),
    )
}

fn reader_body(result: Option<&ChapterRequestResult>) -> ReaderBody {
    match result {
        None => ReaderBody::Empty,
        Some(ChapterRequestResult::Loading) => ReaderBody::Loading,
        Some(ChapterRequestResult::Failed { message }) => ReaderBody::Failed {
            message: message.clone(),
        },
        Some(ChapterRequestResult::Loaded { chapter }) => ReaderBody::Loaded {
            view: ReadingView::from_chapter(chapter),
        },
    }
}

async fn reader_response(ctx: &AppContext, loader: &LoaderState) -> ReaderResponse {
    ReaderResponse {
        chapter_id: loader.chapter_id(),
        generation: loader.generation(),
        body: reader_body(loader.result()),
        playback: ctx.state.player_snapshot().await.into(),
    }
}

// ============================================================================
// Health Endpoint
// ============================================================================

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "mushaf_reader".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: env!("GIT_HASH").to_string(),
        build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
        build_profile: env!("BUILD_PROFILE").to_string(),
    })
}

// ============================================================================
// Chapter Endpoints
// ============================================================================

/// GET /api/v1/chapters - Sidebar listing of all chapters
pub async fn list_chapters() -> Json<ChaptersResponse> {
    Json(ChaptersResponse {
        chapters: chapters::all(),
        total_verses: chapters::total_verses(),
    })
}

/// GET /api/v1/reader - Current reading view without navigating
pub async fn current_reader(State(ctx): State<AppContext>) -> Json<ReaderResponse> {
    let loader = ctx.state.loader_snapshot().await;
    Json(reader_response(&ctx, &loader).await)
}

/// GET /api/v1/reader/:chapter_id - Navigate to a chapter and return its view
///
/// Waits for the fetch to settle. A request superseded by a later navigation
/// returns whatever the newer request has produced so far.
pub async fn open_reader(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<ReaderResponse>, ApiError> {
    let chapter_id: ChapterId = raw_id.parse().map_err(|e| {
        warn!("Rejected chapter id {:?}", raw_id);
        bad_request(format!("{}", e))
    })?;

    match chapters::lookup(chapter_id.get()) {
        Some(info) => info!("Opening chapter {} ({})", chapter_id, info.transliteration),
        None => info!("Opening chapter {} (not in local index)", chapter_id),
    }
    ctx.state.open_chapter(chapter_id).await;

    let loader = ctx.state.loader_snapshot().await;
    Ok(Json(reader_response(&ctx, &loader).await))
}

// ============================================================================
// Playback Endpoints
// ============================================================================

/// POST /api/v1/playback/play - Start the sequence from the first verse
pub async fn play(State(ctx): State<AppContext>) -> Json<PlaybackResponse> {
    Json(ctx.state.play().await.into())
}

/// POST /api/v1/playback/pause - Pause or resume the current verse
pub async fn pause_toggle(State(ctx): State<AppContext>) -> Json<PlaybackResponse> {
    Json(ctx.state.pause_toggle().await.into())
}

/// POST /api/v1/playback/stop - Stop and rewind the current verse
pub async fn stop(State(ctx): State<AppContext>) -> Json<PlaybackResponse> {
    Json(ctx.state.stop().await.into())
}

/// GET /api/v1/playback/state
pub async fn playback_state(State(ctx): State<AppContext>) -> Json<PlaybackResponse> {
    Json(ctx.state.player_snapshot().await.into())
}

// ============================================================================
// Device Notification Endpoints
// ============================================================================

/// POST /api/v1/device/ended - The page's audio element finished a track
pub async fn device_ended(
    State(ctx): State<AppContext>,
    Json(req): Json<DeviceEndedRequest>,
) -> Json<PlaybackResponse> {
    let track = TrackRef::new(req.index, req.attempt);
    Json(ctx.state.track_ended(track).await.into())
}

/// POST /api/v1/device/error - The page's audio element failed to load a track
pub async fn device_error(
    State(ctx): State<AppContext>,
    Json(req): Json<DeviceErrorRequest>,
) -> Json<PlaybackResponse> {
    let message = req
        .message
        .unwrap_or_else(|| "audio element error".to_string());
    let track = TrackRef::new(req.index, req.attempt);
    Json(ctx.state.track_failed(track, message).await.into())
}
