pub use cli::{resolve_arg_or_reader, resolve_arg_or_stdin};
pub use config::setup_config;
pub use logger::setup_logger;
pub use normalization::normalize_uuid;

pub mod cli;
pub mod config;
pub mod logger;
pub mod normalization;
