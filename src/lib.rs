pub mod command_handler;
pub mod commands;
pub mod config;
pub mod content_filter;
pub mod cooldown;
pub mod generator;
pub mod http_server;
pub mod inference;
pub mod meme;
pub mod premium;
pub mod rate_limiter;
pub mod stores;
pub mod templates;
