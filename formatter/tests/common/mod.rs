use std::future::pending;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::post, Router};
use tokio::net::TcpListener;

use formatter::config::{Config, EnvMsDuration};
use formatter::server::serve;

pub struct ServerHandle {
    pub addr: SocketAddr,
}

impl ServerHandle {
    /// Spawn a formatter pointed at the given timesource address.
    pub async fn for_timesource(timesource: SocketAddr) -> ServerHandle {
        Self::with_request_timeout(timesource, Duration::from_millis(3000)).await
    }

    /// Spawn a formatter with a custom upstream timeout.
    pub async fn with_request_timeout(
        timesource: SocketAddr,
        request_timeout: Duration,
    ) -> ServerHandle {
        let config = Config {
            address: "127.0.0.1:0".parse().expect("failed to parse address"),
            timesource_url: format!("http://{}", timesource),
            request_timeout: EnvMsDuration(request_timeout),
            export_prometheus: false,
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("failed to read local addr");

        tokio::spawn(serve(config, listener, pending()));

        ServerHandle { addr }
    }

    pub async fn send_format_request(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("http://{}", self.addr))
            .body(body.to_owned())
            .send()
            .await
            .expect("failed to send request")
    }
}

/// Spawn a real timesource service on an ephemeral port.
pub async fn spawn_timesource() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("failed to read local addr");
    let app = timesource::router::router(timesource::clock::SystemClock {}, false);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("failed to serve timesource")
    });

    addr
}

/// Spawn an upstream that answers 200 with a body no format can parse.
pub async fn spawn_garbage_timesource() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("failed to read local addr");
    let app = Router::new().route("/", post(|| async { "wibble" }));

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("failed to serve stub timesource")
    });

    addr
}

/// Spawn an upstream that accepts connections but never answers, so
/// requests against it only end through the client-side timeout.
pub async fn spawn_silent_timesource() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        // Hold the sockets open without reading or writing.
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

/// An address nothing listens on: bind an ephemeral port, then drop it.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");

    listener.local_addr().expect("failed to read local addr")
}
