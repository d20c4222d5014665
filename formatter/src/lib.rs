pub mod api;
pub mod config;
pub mod format;
pub mod router;
pub mod server;
pub mod upstream;
