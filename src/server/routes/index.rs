//! Index Page Routes

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

/// Landing page with the analysis form
pub const INDEX_PAGE: &str = include_str!("../../../templates/index.html");

/// Script used by the landing page
pub const WEB_SCRIPT: &str = include_str!("../../../static/mywebscript.js");

pub async fn render_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn web_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        WEB_SCRIPT,
    )
}
