use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::api::FormatError;
use crate::format;
use crate::upstream::TimeSource;

#[derive(Clone)]
pub struct AppState {
    pub timesource: Arc<dyn TimeSource>,
}

async fn index() -> &'static str {
    "formatter"
}

#[instrument(skip_all)]
async fn format_date(
    State(state): State<AppState>,
    body: String,
) -> Result<String, FormatError> {
    format::format_request(&body, state.timesource.as_ref()).await
}

pub fn router<T: TimeSource + 'static>(timesource: T, metrics: bool) -> Router {
    let state = AppState {
        timesource: Arc::new(timesource),
    };

    let router = Router::new()
        .route("/", get(index).post(format_date))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    common_metrics::instrument_router(router, metrics)
}
