use axum::response::Html;

const MARKS_PAGE: &str = include_str!("../static/index.html");

/// # GET / and GET /marks
/// The single-page marks browser. All rendering happens client-side against
/// the JSON API.
pub async fn marks_page() -> Html<&'static str> {
    Html(MARKS_PAGE)
}
