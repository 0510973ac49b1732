//! Embedded frontend. The chat page is compiled into the binary so the demo
//! ships as a single executable.

use axum::{
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "../../web/dist/"]
#[include = "*"]
pub struct Assets;

pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return asset(content.data.into_owned(), mime.as_ref());
    }

    // Pathless routes fall back to the chat page.
    if (path.is_empty() || !path.contains('.'))
        && let Some(content) = Assets::get("index.html")
    {
        return asset(content.data.into_owned(), "text/html");
    }

    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

fn asset(data: Vec<u8>, mime: &str) -> Response {
    ([(header::CONTENT_TYPE, mime.to_string())], data).into_response()
}
