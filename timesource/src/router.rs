use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::clock::Clock;
use crate::encoding;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock + Send + Sync>,
}

async fn index() -> &'static str {
    "timesource"
}

#[instrument(skip_all)]
async fn current_time(State(state): State<AppState>, body: String) -> String {
    encoding::render(state.clock.now_utc(), &body)
}

pub fn router<C: Clock + Send + Sync + 'static>(clock: C, metrics: bool) -> Router {
    let state = AppState {
        clock: Arc::new(clock),
    };

    let router = Router::new()
        .route("/", get(index).post(current_time))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    common_metrics::instrument_router(router, metrics)
}
