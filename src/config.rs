use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::inference::DEFAULT_MODELS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord_token: String,
    pub owner_id: Option<String>,
    pub premium_users: Vec<String>,
    pub hf_api_token: Option<String>,
    pub premium_models: Vec<String>,
    pub imgflip_username: Option<String>,
    pub imgflip_password: Option<String>,
    pub data_dir: PathBuf,
    pub cooldown_seconds: u64,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let premium_models = env::var("PREMIUM_MODELS")
            .map(|raw| split_list(&raw))
            .ok()
            .filter(|models| !models.is_empty())
            .unwrap_or_else(|| DEFAULT_MODELS.iter().map(|m| m.to_string()).collect());

        Ok(Config {
            discord_token: env::var("DISCORD_TOKEN")
                .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN environment variable not set"))?,
            owner_id: non_empty_var("OWNER_ID"),
            premium_users: env::var("PREMIUM_USERS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            hf_api_token: non_empty_var("HF_API_TOKEN"),
            premium_models,
            imgflip_username: non_empty_var("IMGFLIP_USERNAME"),
            imgflip_password: non_empty_var("IMGFLIP_PASSWORD"),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            cooldown_seconds: parse_var("COOLDOWN_SECONDS")?.unwrap_or(15),
            port: parse_var("PORT")?.unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn responses_path(&self) -> PathBuf {
        self.data_dir.join("responses.json")
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join("stats.json")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match non_empty_var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: {}", key, raw)),
        None => Ok(None),
    }
}

/// Splits a comma-separated environment value, dropping blank items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
