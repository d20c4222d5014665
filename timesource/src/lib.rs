pub mod clock;
pub mod config;
pub mod encoding;
pub mod router;
pub mod server;
