//! # Feature: Meme Captioning
//!
//! Captions a meme template with top/bottom text for the premium `/khiaanh`
//! command. Uses Imgflip when credentials are configured and falls back to a
//! memegen.link URL otherwise.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true

use anyhow::Result;
use log::{debug, error, info, warn};
use serde::Deserialize;
use std::time::Duration;

const IMGFLIP_CAPTION_URL: &str = "https://api.imgflip.com/caption_image";
const MEMEGEN_BASE: &str = "https://memegen.link/custom";

/// The interaction stays deferred while captioning, so give up after this
pub const CAPTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Imgflip template used for every caption
pub const DEFAULT_TEMPLATE_ID: &str = "181913649";

#[derive(Debug, Clone)]
pub struct ImgflipCredentials {
    pub username: String,
    pub password: String,
}

impl ImgflipCredentials {
    /// Both halves must be present for Imgflip to be used.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) => Some(ImgflipCredentials { username, password }),
            _ => None,
        }
    }
}

#[derive(Deserialize, Debug)]
struct CaptionResponse {
    success: bool,
    data: Option<CaptionData>,
    error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CaptionData {
    url: String,
}

#[derive(Clone)]
pub struct MemeGenerator {
    credentials: Option<ImgflipCredentials>,
    client: reqwest::Client,
    caption_url: String,
}

impl MemeGenerator {
    pub fn new(credentials: Option<ImgflipCredentials>) -> Result<Self> {
        Self::with_endpoint(credentials, IMGFLIP_CAPTION_URL, CAPTION_TIMEOUT)
    }

    fn with_endpoint(
        credentials: Option<ImgflipCredentials>,
        caption_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(MemeGenerator {
            credentials,
            client,
            caption_url: caption_url.to_string(),
        })
    }

    /// Returns an image URL, or `None` when the captioning request fails.
    pub async fn generate_meme(&self, top_text: &str, bottom_text: &str) -> Option<String> {
        let Some(credentials) = &self.credentials else {
            return Some(fallback_url(top_text, bottom_text));
        };

        match self.caption(credentials, top_text, bottom_text).await {
            Ok(Some(url)) => {
                info!("Meme captioned via Imgflip");
                Some(url)
            }
            Ok(None) => Some(fallback_url(top_text, bottom_text)),
            Err(e) => {
                error!("Error generating meme: {:#}", e);
                None
            }
        }
    }

    async fn caption(
        &self,
        credentials: &ImgflipCredentials,
        top_text: &str,
        bottom_text: &str,
    ) -> Result<Option<String>> {
        let params = [
            ("template_id", DEFAULT_TEMPLATE_ID),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            ("text0", top_text),
            ("text1", bottom_text),
        ];

        debug!("Sending caption request to Imgflip");
        let response = self
            .client
            .post(&self.caption_url)
            .form(&params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_caption_response(&body)
    }
}

fn parse_caption_response(body: &str) -> Result<Option<String>> {
    let caption: CaptionResponse = serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("Failed to parse Imgflip response: {}", e))?;

    if caption.success {
        Ok(caption.data.map(|d| d.url))
    } else {
        warn!(
            "Imgflip refused caption: {}",
            caption.error_message.as_deref().unwrap_or("unknown error")
        );
        Ok(None)
    }
}

pub fn fallback_url(top_text: &str, bottom_text: &str) -> String {
    format!(
        "{}/{}/{}.jpg",
        MEMEGEN_BASE,
        urlencoding::encode(top_text),
        urlencoding::encode(bottom_text)
    )
}
