//! One-shot deployment shape of the formatter: read the format token
//! from stdin, print the formatted date to stdout, exit 1 on failure.
//! Shares validation, mapping, dispatch and parsing with the server
//! through `format::format_request`.

use std::io::Read;
use std::process::ExitCode;

use envconfig::Envconfig;

use formatter::config::EnvMsDuration;
use formatter::format::format_request;
use formatter::upstream::HttpTimeSource;

#[derive(Envconfig)]
struct Config {
    #[envconfig(default = "http://127.0.0.1:3100")]
    timesource_url: String,

    #[envconfig(default = "3000")]
    request_timeout: EnvMsDuration,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays a pure data channel.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::init_from_env().expect("Invalid configuration:");

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {}", err);
        return ExitCode::from(1);
    }

    let timesource = HttpTimeSource::new(config.timesource_url, config.request_timeout.0);

    match format_request(&input, &timesource).await {
        Ok(date) => {
            println!("{}", date);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}
