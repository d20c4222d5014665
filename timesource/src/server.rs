use std::future::Future;

use tokio::net::TcpListener;

use crate::clock::SystemClock;
use crate::config::Config;
use crate::router;

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router::router(SystemClock {}, config.export_prometheus);

    tracing::info!("listening on {:?}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .unwrap()
}
