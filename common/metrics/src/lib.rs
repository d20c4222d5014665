//! Prometheus plumbing shared by the timesource and formatter services.

use std::future::ready;
use std::time::Instant;

use axum::{
    body::Body, extract::MatchedPath, http::Request, middleware::Next, response::IntoResponse,
    routing::get, Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Attach the per-request metrics middleware and, when `export` is set,
/// install the global recorder and expose its rendering on `/metrics`.
///
/// Installing a global recorder when a service crate is used as a library
/// (during tests etc) does not work well, so tests build routers with
/// `export` off.
pub fn instrument_router(router: Router, export: bool) -> Router {
    let router = router.layer(axum::middleware::from_fn(track_requests));

    if export {
        let handle = install_recorder();
        router.route("/metrics", get(move || ready(handle.render())))
    } else {
        router
    }
}

fn install_recorder() -> PrometheusHandle {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    PrometheusBuilder::new()
        .set_buckets(EXPONENTIAL_SECONDS)
        .unwrap()
        .install_recorder()
        .unwrap()
}

/// Record request counts and latencies, labeled by method, path and status.
async fn track_requests(req: Request<Body>, next: Next) -> impl IntoResponse {
    let start = Instant::now();

    let path = if let Some(matched_path) = req.extensions().get::<MatchedPath>() {
        matched_path.as_str().to_owned()
    } else {
        req.uri().path().to_owned()
    };

    let method = req.method().clone();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", status),
    ];

    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_requests_duration_seconds", &labels).record(latency);

    response
}
