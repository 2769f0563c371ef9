use crate::services::gallery::{
    GalleryRenderer, GalleryView, FETCH_FAILED_MESSAGE, LOADING_MESSAGE, NO_IMAGES_MESSAGE,
    PROMPT_MESSAGE,
};
use crate::services::modal::{Modal, ModalContent};
use crate::services::store::CellId;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;

#[derive(Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
}

impl GalleryQuery {
    fn is_complete(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }
}

fn prompt() -> Response {
    let trigger = serde_json::json!({ "showPrompt": PROMPT_MESSAGE }).to_string();
    (
        StatusCode::OK,
        [("HX-Reswap", "none".to_string()), ("HX-Trigger", trigger)],
    )
        .into_response()
}

fn message(state: &AppState, class: &str, text: &str) -> AppResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("class", class);
    ctx.insert("message", text);
    let html = state.templates.render("htmx/message.html", &ctx)?;
    Ok(Html(html))
}

/// Answers the "Get Space Images" button: checks both dates are present and
/// swaps in a placeholder that pulls the actual results.
pub async fn gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> AppResult<Response> {
    if !query.is_complete() {
        tracing::debug!("Gallery requested without both dates");
        return Ok(prompt());
    }

    let mut ctx = Context::new();
    ctx.insert("start_date", &query.start_date);
    ctx.insert("end_date", &query.end_date);
    ctx.insert("message", LOADING_MESSAGE);

    let html = state.templates.render("htmx/loading.html", &ctx)?;
    Ok(Html(html).into_response())
}

pub async fn gallery_results(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> AppResult<Response> {
    if !query.is_complete() {
        return Ok(prompt());
    }

    let body = match state
        .source
        .fetch_range(&query.start_date, &query.end_date)
        .await
    {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(
                start_date = %query.start_date,
                end_date = %query.end_date,
                "Failed to load APOD gallery: {}",
                e
            );
            return Ok(message(&state, "error-message", FETCH_FAILED_MESSAGE)?.into_response());
        }
    };

    let renderer = GalleryRenderer::new(&state.embeds);
    match renderer.render(&body, &state.cells) {
        GalleryView::NoImages => {
            Ok(message(&state, "empty-message", NO_IMAGES_MESSAGE)?.into_response())
        }
        GalleryView::Grid(cells) => {
            let mut ctx = Context::new();
            ctx.insert("cells", &cells);
            ctx.insert("embed_height", &state.config.gallery.embed_height);
            let html = state.templates.render("htmx/gallery.html", &ctx)?;
            Ok(Html(html).into_response())
        }
    }
}

fn render_modal(state: &AppState, modal: &Modal) -> AppResult<Html<String>> {
    let vals = modal.content().map(ModalContent::to_vals).unwrap_or_default();

    let mut ctx = Context::new();
    ctx.insert("modal", modal);
    ctx.insert("modal_vals", &vals);
    let html = state.templates.render("htmx/modal.html", &ctx)?;
    Ok(Html(html))
}

/// Opens the modal for a cell. The registry entry wins; once it has been
/// evicted the fields carried on the cell are used instead.
pub async fn open_modal(
    State(state): State<Arc<AppState>>,
    Path(cell): Path<String>,
    Query(carried): Query<ModalContent>,
) -> AppResult<Response> {
    let stored = cell
        .parse::<CellId>()
        .ok()
        .and_then(|id| state.cells.get(&id));

    let content = match stored {
        Some(item) => ModalContent::from(&item),
        None if !carried.is_empty() => {
            tracing::debug!(cell = %cell, "Cell not retained, using carried fields");
            carried
        }
        None => {
            tracing::debug!(cell = %cell, "Modal requested for unknown cell");
            let html = message(&state, "empty-message", "That item is no longer available.")?;
            return Ok((StatusCode::NOT_FOUND, html).into_response());
        }
    };

    let mut modal = Modal::hidden();
    modal.show(content);
    Ok(render_modal(&state, &modal)?.into_response())
}

/// Hides the modal, keeping whatever content the close control carried.
pub async fn close_modal(
    State(state): State<Arc<AppState>>,
    Query(carried): Query<ModalContent>,
) -> AppResult<Html<String>> {
    let mut modal = Modal::hidden();
    if !carried.is_empty() {
        modal.show(carried);
    }
    modal.close();
    render_modal(&state, &modal)
}
