//! # Feature: Hosted Text Generation
//!
//! Client for the HuggingFace inference API used by the premium tease mode.
//! The generator only sees the `TextGenerationService` trait.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://api-inference.huggingface.co/models";

/// Per-request timeout for the hosted models
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Models tried in order until one produces usable text
pub const DEFAULT_MODELS: &[&str] = &[
    "gpt2",
    "distilgpt2",
    "bigscience/bloom-560m",
    "bigscience/bloom-1b1",
    "facebook/opt-125m",
    "EleutherAI/gpt-neo-125M",
    "stabilityai/stablelm-base-alpha-3b",
    "bigscience/bloomz-560m",
];

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Run `inputs` through `model` and return the generated text.
    async fn generate(&self, model: &str, inputs: &str) -> Result<String>;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        GenerationParameters {
            max_new_tokens: 40,
            temperature: 0.7,
            top_p: 0.9,
            do_sample: true,
        }
    }
}

#[derive(Deserialize, Debug)]
struct Generated {
    generated_text: String,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum InferenceResponse {
    Many(Vec<Generated>),
    One(Generated),
}

impl InferenceResponse {
    fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Many(items) => items.into_iter().next().map(|g| g.generated_text),
            InferenceResponse::One(item) => Some(item.generated_text),
        }
    }
}

#[derive(Deserialize, Debug)]
struct InferenceError {
    error: String,
}

fn parse_generated_text(body: &str) -> Result<String> {
    let response: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("Failed to parse inference response: {}", e))?;
    response
        .into_text()
        .ok_or_else(|| anyhow::anyhow!("No generated text in inference response"))
}

#[derive(Clone)]
pub struct HuggingFaceClient {
    api_token: String,
    client: reqwest::Client,
}

impl HuggingFaceClient {
    pub fn new(api_token: String) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HuggingFaceClient { api_token, client })
    }
}

#[async_trait]
impl TextGenerationService for HuggingFaceClient {
    async fn generate(&self, model: &str, inputs: &str) -> Result<String> {
        let request = InferenceRequest {
            inputs,
            parameters: GenerationParameters::default(),
        };

        debug!("Sending inference request to {}", model);
        let response = self
            .client
            .post(format!("{}/{}", API_BASE, model))
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            parse_generated_text(&body)
        } else if let Ok(error_response) = serde_json::from_str::<InferenceError>(&body) {
            warn!("Inference error from {}: {}", model, error_response.error);
            Err(anyhow::anyhow!("Inference error: {}", error_response.error))
        } else {
            warn!("Inference API error from {} (status {})", model, status);
            Err(anyhow::anyhow!("Inference API error (status {})", status))
        }
    }
}
