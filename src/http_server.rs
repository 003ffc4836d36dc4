//! # Feature: Status Server
//!
//! Small HTTP server for uptime monitors: an HTML status page, a JSON health
//! check and a plain ping.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Replaced the interactions endpoint with status, health and ping routes

use anyhow::{anyhow, Result};
use axum::{extract::State, response::Html, response::Json, routing::get, Router};
use chrono::{Datelike, SecondsFormat, Utc};
use log::info;
use serde_json::{json, Value};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

pub fn create_server(started_at: Instant) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health_check))
        .route("/ping", get(ping))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { started_at })
}

/// `1 day, 2 hours, 3 minutes, 4 seconds`; zero parts are left out.
pub fn format_uptime(uptime_secs: u64) -> String {
    let days = uptime_secs / 86_400;
    let hours = (uptime_secs % 86_400) / 3_600;
    let minutes = (uptime_secs % 3_600) / 60;
    let seconds = uptime_secs % 60;

    let unit = |n: u64, name: &str| format!("{} {}{}", n, name, if n == 1 { "" } else { "s" });

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(unit(seconds, "second"));
    }
    parts.join(", ")
}

async fn status_page(State(state): State<AppState>) -> Html<String> {
    let uptime = format_uptime(state.uptime_secs() as u64);

    Html(format!(
        r#"<html>
  <head>
    <title>Cà Khịa Bot - Status</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; background-color: #2c2f33; color: #ffffff; }}
      h1 {{ color: #7289da; }}
      .status {{ background-color: #3a3d41; padding: 15px; border-radius: 5px; margin: 15px 0; }}
      .online {{ color: #43b581; }}
      .footer {{ margin-top: 30px; font-size: 0.8em; color: #99aab5; }}
    </style>
  </head>
  <body>
    <h1>Cà Khịa Bot</h1>
    <div class="status">
      <h2>Status: <span class="online">Online</span></h2>
      <p><strong>Version:</strong> {version}</p>
      <p><strong>Uptime:</strong> {uptime}</p>
    </div>
    <div class="footer">
      <p>© {year} Cà Khịa Bot</p>
    </div>
  </body>
</html>"#,
        version = VERSION,
        uptime = uptime,
        year = Utc::now().year(),
    ))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime": state.uptime_secs(),
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "version": VERSION,
    }))
}

async fn ping() -> &'static str {
    "pong"
}

pub async fn start_http_server(port: u16, started_at: Instant) -> Result<()> {
    let app = create_server(started_at);

    let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| anyhow!("Failed to bind to port {}: {}", port, e))?;

    info!("Status server listening on port {} (/, /health, /ping)", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
