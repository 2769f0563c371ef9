use crate::models::DateRange;
use crate::services::facts;
use crate::services::modal::Modal;
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use chrono::Local;
use std::sync::Arc;
use tera::Context;

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let gallery = &state.config.gallery;
    let today = Local::now().date_naive();
    let (min, max) = DateRange::bounds(today, gallery.archive_start);
    let window =
        DateRange::trailing_window(today, gallery.default_window_days, gallery.archive_start);

    let mut ctx = Context::new();
    ctx.insert("site", &state.config.site);
    ctx.insert("min_date", &min.format("%Y-%m-%d").to_string());
    ctx.insert("max_date", &max.format("%Y-%m-%d").to_string());
    ctx.insert("start_date", &window.start_param());
    ctx.insert("end_date", &window.end_param());
    ctx.insert("fact", facts::random_fact());
    ctx.insert("modal", &Modal::hidden());
    ctx.insert("modal_vals", "");

    let html = state.templates.render("public/index.html", &ctx)?;
    Ok(Html(html))
}

pub async fn stylesheet(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let css = state.templates.render("css/gallery.css", &Context::new())?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}

pub async fn health() -> &'static str {
    "ok"
}
