use askama::Template;
use axum::response::IntoResponse;

#[derive(Template)]
#[template(path = "index.html")]
struct ContactPageTemplate;

#[tracing::instrument(name = "Contact page")]
pub async fn contact_page() -> impl IntoResponse {
    ContactPageTemplate
}
