use axum::extract::{Query, State};
use axum::response::Html;
use axum::Extension;
use folio_core::filter::FilterSelection;
use folio_core::views::Page;
use folio_core_types::RequestId;

use super::{category_param, QueryPairs};
use crate::errors::{ApiError, Result};
use crate::state::AppState;

fn respond(
    rendered: Result<String>,
    request_id: RequestId,
) -> std::result::Result<Html<String>, ApiError> {
    rendered
        .map(Html)
        .map_err(|err| ApiError::from(err).with_request_id(request_id))
}

pub async fn home(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> std::result::Result<Html<String>, ApiError> {
    let rendered = match state.mount_snapshot().await {
        Some(snapshot) => state.renderer.home(&snapshot),
        None => state.renderer.loading(Page::Home),
    };
    respond(rendered, request_id)
}

pub async fn cv(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> std::result::Result<Html<String>, ApiError> {
    let rendered = match state.mount_snapshot().await {
        Some(snapshot) => state.renderer.cv(&snapshot),
        None => state.renderer.loading(Page::Cv),
    };
    respond(rendered, request_id)
}

pub async fn projects(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<QueryPairs>,
) -> std::result::Result<Html<String>, ApiError> {
    let rendered = match state.mount_snapshot().await {
        Some(snapshot) => {
            let mut selection =
                FilterSelection::from_query(category_param(&query), &snapshot.project_filters);
            state.renderer.projects(&snapshot, &mut selection)
        }
        None => state.renderer.loading(Page::Projects),
    };
    respond(rendered, request_id)
}
