use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::configs::storage::Storage;
use crate::errors::ApiError;

/// At most this many rows go back to a dashboard query.
const MAX_ROWS: usize = 50;

#[derive(Clone)]
pub struct DataState {
    pub storage: Arc<Storage>,
}

pub async fn get_data(State(state): State<DataState>) -> Result<impl IntoResponse, ApiError> {
    let rows = state.storage.recent_complete(MAX_ROWS).await?;

    Ok(Json(rows))
}
