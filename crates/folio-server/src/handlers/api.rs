use axum::extract::{Query, State};
use axum::{Extension, Json};
use folio_core::errors::FolioError;
use folio_core::filter::FilterSelection;
use folio_core::views::ProjectsView;
use folio_core_types::RequestId;

use super::{category_param, QueryPairs};
use crate::errors::ApiError;
use crate::state::AppState;

/// Visible projects for the reconciled selection, as JSON
pub async fn projects(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(snapshot) = state.mount_snapshot().await else {
        return Err(ApiError::from(FolioError::SnapshotUnavailable).with_request_id(request_id));
    };

    let mut selection =
        FilterSelection::from_query(category_param(&query), &snapshot.project_filters);
    let view = ProjectsView::build(&snapshot, &mut selection);
    serde_json::to_value(&view)
        .map(Json)
        .map_err(|err| ApiError::from(FolioError::from(err)).with_request_id(request_id))
}
