//! Embedded reading page

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const READER_JS: &str = include_str!("../ui/reader.js");

/// GET / and GET /reader/:chapter_id
///
/// The page reads the chapter id from its own path.
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/reader.js
pub async fn serve_reader_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        READER_JS,
    )
        .into_response()
}
