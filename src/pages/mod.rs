//! Web pages: stateless render functions over the UI component library.
//!
//! No page fetches data; the dashboard renders a fixed mock snapshot and the
//! showcase page exists to exhibit every component variant.

pub mod components;
pub mod home;

use axum::{extract::State, response::Html, routing::get, Router};
use tracing::instrument;

use crate::state::AppState;
use crate::ui::Theme;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/components", get(components_page))
}

#[instrument(skip(state))]
async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(layout(&state.theme, "Mansouri Nutritionist Platform", &home::render(&state.theme)))
}

#[instrument(skip(state))]
async fn components_page(State(state): State<AppState>) -> Html<String> {
    Html(layout(&state.theme, "Component Library", &components::render(&state.theme)))
}

/// Shared document shell: title, background color, page body.
fn layout(theme: &Theme, title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8"/>"#,
            "<title>{title}</title>",
            "</head>",
            r#"<body style="background-color:{background};color:{text}">"#,
            r#"<div class="container">{body}</div>"#,
            "</body>",
            "</html>"
        ),
        title = crate::ui::components::escape(title),
        background = theme.background,
        text = theme.dark_gray,
        body = body,
    )
}
