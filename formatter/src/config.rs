use std::net::SocketAddr;
use std::str::FromStr;
use std::time;

use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:3000")]
    pub address: SocketAddr,

    #[envconfig(default = "http://127.0.0.1:3100")]
    pub timesource_url: String,

    #[envconfig(default = "3000")]
    pub request_timeout: EnvMsDuration,

    #[envconfig(default = "true")]
    pub export_prometheus: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EnvMsDuration(pub time::Duration);

#[derive(Debug, PartialEq, Eq)]
pub struct ParseEnvMsDurationError;

impl FromStr for EnvMsDuration {
    type Err = ParseEnvMsDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ms = s.parse::<u64>().map_err(|_| ParseEnvMsDurationError)?;

        Ok(EnvMsDuration(time::Duration::from_millis(ms)))
    }
}
