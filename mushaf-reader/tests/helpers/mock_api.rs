//! Mock Quran API server
//!
//! Serves `/v1/surah/:n` and `/v1/surah/:n/:edition` on an ephemeral port
//! with deterministic fixture data. Individual endpoints can be made to fail,
//! return malformed JSON, or respond slowly.

use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use mushaf_reader::quran_api::ClientConfig;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TRANSLATION_EDITION: &str = "en.test";
pub const AUDIO_EDITION: &str = "ar.test";

/// Endpoint key: chapter plus edition (`None` for the verse text)
type EndpointKey = (u32, Option<String>);

#[derive(Default)]
struct Behavior {
    failures: HashMap<EndpointKey, u16>,
    malformed: HashSet<EndpointKey>,
    delays: HashMap<u32, Duration>,
    body_stalls: HashMap<u32, Duration>,
    reversed_translation: HashSet<u32>,
    verse_counts: HashMap<u32, u32>,
}

#[derive(Default)]
struct MockState {
    behavior: Mutex<Behavior>,
    requests: AtomicUsize,
}

/// Handle to a running mock server
pub struct MockQuranApi {
    base_url: String,
    state: Arc<MockState>,
}

impl MockQuranApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());

        let app = Router::new()
            .route("/v1/surah/:chapter", get(surah_text))
            .route("/v1/surah/:chapter/:edition", get(surah_edition))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock API");
        let addr = listener.local_addr().expect("mock API address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock API server");
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client configuration pointing at this server
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            translation_edition: TRANSLATION_EDITION.to_string(),
            audio_edition: AUDIO_EDITION.to_string(),
            timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Respond with `status` for one endpoint
    pub fn fail(&self, chapter: u32, edition: Option<&str>, status: u16) {
        self.behavior()
            .failures
            .insert((chapter, edition.map(str::to_string)), status);
    }

    /// Respond with a body that is not the expected JSON
    pub fn malform(&self, chapter: u32, edition: Option<&str>) {
        self.behavior()
            .malformed
            .insert((chapter, edition.map(str::to_string)));
    }

    /// Delay every endpoint of a chapter
    pub fn delay(&self, chapter: u32, delay: Duration) {
        self.behavior().delays.insert(chapter, delay);
    }

    /// Send headers at once but hold the body back for `delay`
    pub fn stall_body(&self, chapter: u32, delay: Duration) {
        self.behavior().body_stalls.insert(chapter, delay);
    }

    /// Serve the chapter's translation in reverse order
    pub fn reverse_translation(&self, chapter: u32) {
        self.behavior().reversed_translation.insert(chapter);
    }

    /// Override the fixture verse count for a chapter (default 3)
    pub fn set_verse_count(&self, chapter: u32, count: u32) {
        self.behavior().verse_counts.insert(chapter, count);
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Global ordinal of a fixture verse
    pub fn global_number(chapter: u32, number_in_surah: u32) -> u32 {
        chapter * 1000 + number_in_surah
    }

    /// Audio URL served for a fixture verse
    pub fn audio_url(chapter: u32, number_in_surah: u32) -> String {
        format!(
            "https://cdn.test/audio/{}.mp3",
            Self::global_number(chapter, number_in_surah)
        )
    }

    fn behavior(&self) -> std::sync::MutexGuard<'_, Behavior> {
        self.state.behavior.lock().expect("mock behavior lock")
    }
}

async fn surah_text(State(state): State<Arc<MockState>>, Path(chapter): Path<u32>) -> Response {
    respond(&state, chapter, None).await
}

async fn surah_edition(
    State(state): State<Arc<MockState>>,
    Path((chapter, edition)): Path<(u32, String)>,
) -> Response {
    respond(&state, chapter, Some(edition)).await
}

async fn respond(state: &MockState, chapter: u32, edition: Option<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let (failure, malformed, delay, body_stall, reversed, verse_count) = {
        let behavior = state.behavior.lock().expect("mock behavior lock");
        let key = (chapter, edition.clone());
        (
            behavior.failures.get(&key).copied(),
            behavior.malformed.contains(&key),
            behavior.delays.get(&chapter).copied(),
            behavior.body_stalls.get(&chapter).copied(),
            behavior.reversed_translation.contains(&chapter),
            behavior.verse_counts.get(&chapter).copied().unwrap_or(3),
        )
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(status) = failure {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({"code": status.as_u16(), "status": "error"}))).into_response();
    }

    if malformed {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let mut ayahs: Vec<Value> = (1..=verse_count)
        .map(|n| ayah(chapter, n, edition.as_deref()))
        .collect();
    if reversed && edition.as_deref() == Some(TRANSLATION_EDITION) {
        ayahs.reverse();
    }

    let payload = json!({
        "code": 200,
        "status": "OK",
        "data": {
            "number": chapter,
            "name": format!("سورة {}", chapter),
            "englishName": format!("Chapter-{}", chapter),
            "englishNameTranslation": format!("The Chapter {}", chapter),
            "revelationType": "Meccan",
            "numberOfAyahs": verse_count,
            "ayahs": ayahs,
        }
    });

    match body_stall {
        Some(stall) => {
            let bytes = payload.to_string().into_bytes();
            let body = futures::stream::once(async move {
                tokio::time::sleep(stall).await;
                Ok::<_, std::convert::Infallible>(bytes)
            });
            (
                StatusCode::OK,
                [("content-type", "application/json")],
                Body::from_stream(body),
            )
                .into_response()
        }
        None => Json(payload).into_response(),
    }
}

fn ayah(chapter: u32, n: u32, edition: Option<&str>) -> Value {
    let number = MockQuranApi::global_number(chapter, n);
    match edition {
        None => json!({
            "number": number,
            "numberInSurah": n,
            "text": format!("arabic {}", number),
        }),
        Some(TRANSLATION_EDITION) => json!({
            "number": number,
            "numberInSurah": n,
            "text": format!("translation of {}", number),
        }),
        Some(_) => json!({
            "number": number,
            "numberInSurah": n,
            "text": format!("arabic {}", number),
            "audio": MockQuranApi::audio_url(chapter, n),
            "audioSecondary": [],
        }),
    }
}
