use std::future::Future;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::router;
use crate::upstream::HttpTimeSource;

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let timesource = HttpTimeSource::new(config.timesource_url, config.request_timeout.0);
    let app = router::router(timesource, config.export_prometheus);

    tracing::info!("listening on {:?}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .unwrap()
}
