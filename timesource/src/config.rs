use std::net::SocketAddr;

use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:3100")]
    pub address: SocketAddr,

    #[envconfig(default = "true")]
    pub export_prometheus: bool,
}
