use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::settings::Settings;
use crate::configs::storage::Storage;
use crate::handles::*;
use crate::middlewares::{AuthState, basic_auth};

pub fn create_app(settings: &Arc<Settings>, storage: Arc<Storage>) -> Router {
    // Stations carry no credentials; ingestion stays open by design.
    let ingest = Router::new()
        .route("/api/sensor", post(submit_data))
        .route("/submit_data", post(submit_data))
        .with_state(IngestState {
            storage: storage.clone(),
        });

    let auth_state = AuthState {
        username: settings.auth.username.clone(),
        password: settings.auth.password.clone(),
    };

    let data = Router::new()
        .route("/api/data", get(get_data))
        .route_layer(middleware::from_fn_with_state(auth_state, basic_auth))
        .with_state(DataState { storage });

    Router::new()
        .merge(ingest)
        .merge(data)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
