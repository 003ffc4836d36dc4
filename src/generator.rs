//! # Feature: Response Generation
//!
//! Chooses the text for a tease. Four modes:
//!
//! - `custom` - a random user-submitted phrase, or a built-in response
//! - `ai` - a personalised built-in template
//! - `all` - 50% chance of a custom phrase, otherwise a template
//! - `premium` - hosted models tried in priority order, gated by entitlement
//!
//! Every call is paced by the global rate limiter and everything returned
//! goes through the content filter exactly once. The generator never fails:
//! unexpected errors become a random built-in response.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::Result;
use log::{error, info, warn};
use rand::seq::IndexedRandom;
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::content_filter::ContentFilter;
use crate::inference::{TextGenerationService, DEFAULT_MODELS, REQUEST_TIMEOUT};
use crate::premium::PremiumAccess;
use crate::rate_limiter::RateLimiter;
use crate::stores::CustomPhraseStore;
use crate::templates::{
    FALLBACK_RESPONSES, NAME_PLACEHOLDER, QUOTE_TEMPLATES, SMART_TEMPLATES, TOPIC_PLACEHOLDER,
};

pub const PREMIUM_REQUIRED: &str =
    "⭐ Tính năng này yêu cầu gói Premium! Vui lòng liên hệ admin để nâng cấp tài khoản.";
pub const PREMIUM_MISCONFIGURED: &str =
    "⭐ Premium AI yêu cầu cấu hình HuggingFace API. Vui lòng liên hệ admin để được hỗ trợ.";
pub const PREMIUM_MAINTENANCE: &str = "⭐ Premium AI đang bảo trì. Vui lòng thử lại sau.";

/// Used when the prompt names nobody
pub const DEFAULT_USERNAME: &str = "bạn";
pub const DEFAULT_TOPIC: &str = "cuộc sống";

/// Chance that `all` mode consults the custom phrase store first
const CUSTOM_PROBABILITY: f64 = 0.5;
/// A hosted reply must be this many characters longer than the instruction
const MIN_EXTRA_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Ai,
    Custom,
    Premium,
    #[default]
    All,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ai => "ai",
            Mode::Custom => "custom",
            Mode::Premium => "premium",
            Mode::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ai" => Some(Mode::Ai),
            "custom" => Some(Mode::Custom),
            "premium" => Some(Mode::Premium),
            "all" => Some(Mode::All),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prompt for `/khia`. The requester marker is only embedded for premium.
pub fn tease_prompt(username: &str, context: &str, requester_id: &str, mode: Mode) -> String {
    if mode == Mode::Premium {
        format!(
            "Viết một câu nói cà khịa người tên {}. Nội dung: {} user_id:{}",
            username, context, requester_id
        )
    } else {
        format!("Viết một câu nói cà khịa người tên {}", username)
    }
}

/// Prompt for `/randomkhia`.
pub fn random_tease_prompt(username: &str, requester_id: &str, mode: Mode) -> String {
    if mode == Mode::Premium {
        format!(
            "Viết một câu cà khịa ngẫu nhiên về người tên {} user_id:{}",
            username, requester_id
        )
    } else {
        format!("Viết một câu cà khịa ngẫu nhiên về người tên {}", username)
    }
}

/// Prompt for `/khen`.
pub fn compliment_prompt(username: &str, context: &str) -> String {
    if context.is_empty() {
        format!("Viết một câu khen ngợi quá lố cho người tên {}.", username)
    } else {
        format!(
            "Viết một câu khen ngợi quá lố cho người tên {}. Về: {}",
            username, context
        )
    }
}

/// A made-up quote attributed to someone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "💭 *\"{}\"* \n\t\t— {} 📜", self.text, self.author)
    }
}

/// Pick a quote template for `topic`. Pure, no filtering.
pub fn generate_quote(username: &str, topic: Option<&str>) -> Quote {
    let topic = topic
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TOPIC);

    Quote {
        text: pick(QUOTE_TEMPLATES).replace(TOPIC_PLACEHOLDER, topic),
        author: username.to_string(),
    }
}

fn pick(list: &[&'static str]) -> &'static str {
    list.choose(&mut rand::rng()).copied().unwrap_or_default()
}

pub fn random_fallback_response() -> &'static str {
    pick(FALLBACK_RESPONSES)
}

/// Markers the command layer embeds in prompts.
#[derive(Clone)]
struct PromptMarkers {
    username: Regex,
    requester: Regex,
    sentence_end: Regex,
}

impl PromptMarkers {
    fn new() -> Self {
        PromptMarkers {
            username: Regex::new(r"(?i)người tên ([^\s.]+)").expect("valid username pattern"),
            requester: Regex::new(r"(?i)user_id:(\d+)").expect("valid requester pattern"),
            sentence_end: Regex::new(r"[.!?]\s").expect("valid sentence pattern"),
        }
    }

    fn username<'a>(&self, prompt: &'a str) -> &'a str {
        self.username
            .captures(prompt)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(DEFAULT_USERNAME)
    }

    /// The requester marker is appended after any user-supplied text, so
    /// only the last one is trusted.
    fn requester_id<'a>(&self, prompt: &'a str) -> Option<&'a str> {
        self.requester
            .captures_iter(prompt)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Drop an echoed instruction and keep the first sentence.
    fn clean_generated(&self, generated: &str, instruction: &str) -> Option<String> {
        if generated.chars().count() <= instruction.chars().count() + MIN_EXTRA_CHARS {
            return None;
        }

        let body = match generated.find(instruction) {
            Some(pos) => &generated[pos + instruction.len()..],
            None => generated,
        };
        let sentence = match self.sentence_end.find(body) {
            Some(end) => &body[..end.start()],
            None => body,
        };

        Some(format!("{}.", sentence.trim()))
    }
}

/// Outcome of one hosted model in the fallback chain
enum Attempt {
    Accepted(String),
    Rejected(String),
}

#[derive(Clone)]
pub struct ResponseGenerator {
    phrases: CustomPhraseStore,
    filter: ContentFilter,
    rate_limiter: RateLimiter,
    premium: PremiumAccess,
    service: Option<Arc<dyn TextGenerationService>>,
    models: Vec<String>,
    attempt_timeout: Duration,
    markers: PromptMarkers,
}

impl ResponseGenerator {
    pub fn new(
        phrases: CustomPhraseStore,
        filter: ContentFilter,
        rate_limiter: RateLimiter,
        premium: PremiumAccess,
    ) -> Self {
        ResponseGenerator {
            phrases,
            filter,
            rate_limiter,
            premium,
            service: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            attempt_timeout: REQUEST_TIMEOUT,
            markers: PromptMarkers::new(),
        }
    }

    /// Enable the premium mode with a hosted service and its model chain.
    pub fn with_service(
        mut self,
        service: Arc<dyn TextGenerationService>,
        models: Vec<String>,
    ) -> Self {
        self.service = Some(service);
        if !models.is_empty() {
            self.models = models;
        }
        self
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub async fn generate_response(&self, prompt: &str, mode: Mode) -> String {
        let text = match self.dispatch(prompt, mode).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error generating {} response, using fallback: {:#}", mode, e);
                random_fallback_response().to_string()
            }
        };

        self.filter.filter_text(&text)
    }

    async fn dispatch(&self, prompt: &str, mode: Mode) -> Result<String> {
        self.rate_limiter.acquire().await;

        match mode {
            Mode::Custom => match self.phrases.random().await? {
                Some(phrase) => {
                    info!("Using custom phrase by {}", phrase.author_id);
                    Ok(phrase.text)
                }
                None => {
                    info!("No custom phrases stored, using a built-in response");
                    Ok(random_fallback_response().to_string())
                }
            },
            Mode::Premium => Ok(self.premium_response(prompt).await),
            Mode::All => {
                let consult_custom = rand::random_bool(CUSTOM_PROBABILITY);
                if consult_custom {
                    match self.phrases.random().await {
                        Ok(Some(phrase)) => {
                            info!("Using custom phrase by {} (random pick)", phrase.author_id);
                            return Ok(phrase.text);
                        }
                        Ok(None) => {}
                        Err(e) => warn!("Custom phrases unavailable, using a template: {:#}", e),
                    }
                }
                Ok(self.smart_template(prompt))
            }
            Mode::Ai => Ok(self.smart_template(prompt)),
        }
    }

    fn smart_template(&self, prompt: &str) -> String {
        let username = self.markers.username(prompt);
        pick(SMART_TEMPLATES).replace(NAME_PLACEHOLDER, username)
    }

    async fn premium_response(&self, prompt: &str) -> String {
        let authorized = self
            .markers
            .requester_id(prompt)
            .map(|id| self.premium.is_premium(id))
            .unwrap_or(false);
        if !authorized {
            return PREMIUM_REQUIRED.to_string();
        }

        let Some(service) = &self.service else {
            warn!("Premium mode requested but no inference token is configured");
            return PREMIUM_MISCONFIGURED.to_string();
        };

        let username = self.markers.username(prompt);
        let instruction = format!("Write a short funny teasing comment about {}:", username);

        for model in &self.models {
            match self.attempt(service.as_ref(), model, &instruction).await {
                Attempt::Accepted(text) => {
                    info!("Premium response generated with {}", model);
                    return format!("⭐ {}", text);
                }
                Attempt::Rejected(reason) => {
                    warn!("Premium model {} failed: {}", model, reason);
                }
            }
        }

        error!("All {} premium models failed", self.models.len());
        PREMIUM_MAINTENANCE.to_string()
    }

    async fn attempt(
        &self,
        service: &dyn TextGenerationService,
        model: &str,
        instruction: &str,
    ) -> Attempt {
        match timeout(self.attempt_timeout, service.generate(model, instruction)).await {
            Err(_) => Attempt::Rejected(format!(
                "timed out after {}s",
                self.attempt_timeout.as_secs()
            )),
            Ok(Err(e)) => Attempt::Rejected(e.to_string()),
            Ok(Ok(generated)) => match self.markers.clean_generated(&generated, instruction) {
                Some(text) => Attempt::Accepted(text),
                None => Attempt::Rejected("response too short".to_string()),
            },
        }
    }
}
