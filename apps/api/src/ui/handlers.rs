//! Axum route handlers for the HTML form.

use axum::{extract::State, response::Html, Form};

use crate::excuse::generator::generate_excuse;
use crate::excuse::models::ExcuseInput;
use crate::state::AppState;
use crate::ui::page::{render_page, Outcome, PageView};

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageView::idle()))
}

/// POST /generate
///
/// Failures never become HTTP errors here: they are rendered as banners on the page.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(input): Form<ExcuseInput>,
) -> Html<String> {
    let result = generate_excuse(state.completion.as_ref(), input.clone()).await;
    let view = PageView::from_input(input, Outcome::from_result(result));
    Html(render_page(&view))
}
