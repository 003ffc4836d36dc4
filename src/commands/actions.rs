//! Command logic behind every slash command, independent of the gateway.
//!
//! Each action takes plain ids and names, talks to the stores and the
//! generator, and returns a [`Reply`] for the interaction layer to render.

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::content_filter::ContentFilter;
use crate::cooldown::CooldownManager;
use crate::generator::{
    compliment_prompt, generate_quote, random_tease_prompt, tease_prompt, Mode, ResponseGenerator,
};
use crate::inference::HuggingFaceClient;
use crate::meme::{ImgflipCredentials, MemeGenerator};
use crate::premium::PremiumAccess;
use crate::rate_limiter::RateLimiter;
use crate::stores::{CustomPhraseStore, PhraseRejection, StatsStore};

pub const TEASE_COMMAND: &str = "khia";
pub const MEME_COMMAND: &str = "khiaanh";
pub const MEME_COOLDOWN: Duration = Duration::from_secs(30);
pub const RANKING_LIMIT: usize = 5;
/// Page size for the phrase list, below the gateway's 2000 character cap
pub const PAGE_LIMIT: usize = 1900;

pub const PRIMARY_COLOR: u32 = 0x7289DA;
pub const INFO_COLOR: u32 = 0x5865F2;

const OWNER_PROTECTED: &str = "Em không dám cà khịa ông chủ đâu ạ 🙇‍♂️";
const OFFENSIVE_CONTEXT: &str =
    "Nội dung của bạn có chứa từ ngữ không phù hợp. Vui lòng thử lại với nội dung khác.";
const CONTEXT_NEEDS_PREMIUM: &str = "⚠️ Lưu ý: Bạn đã nhập context nhưng không chọn chế độ Premium AI (dùng context). Context chỉ hoạt động với Premium AI.";
const NO_TARGETS: &str = "Không tìm thấy ai để cà khịa!";
const NO_RANKINGS: &str = "Chưa có ai bị khịa cả 🥲";
const PHRASE_TOO_SHORT: &str = "Câu cà khịa quá ngắn! Hãy nhập ít nhất 10 ký tự.";
const PHRASE_OFFENSIVE: &str =
    "Câu cà khịa của bạn có chứa từ ngữ không phù hợp. Vui lòng thử lại với nội dung khác.";
const PHRASE_SAVE_FAILED: &str = "❌ Không thể thêm câu cà khịa. Hãy thử lại sau.";
const PHRASE_LIST_EMPTY: &str = "📝 Chưa có câu cà khịa tùy chỉnh nào.";
const PHRASE_LIST_HEADER: &str = "📝 **Danh sách câu cà khịa tùy chỉnh:**\n\n";
const PHRASE_LIST_FAILED: &str = "Có lỗi xảy ra khi lấy danh sách câu cà khịa!";
const UNKNOWN_AUTHOR: &str = "người dùng không xác định";
const OWNER_ONLY_REMOVE: &str = "❌ Chỉ chủ bot mới có quyền xóa câu cà khịa!";
const PHRASE_REMOVE_FAILED: &str = "❌ Không thể xóa câu cà khịa. Hãy thử lại sau.";
const MEME_PREMIUM_ONLY: &str = "⭐ Tính năng tạo ảnh cà khịa chỉ có sẵn cho người dùng Premium! Vui lòng liên hệ admin để nâng cấp tài khoản.";
const MEME_DEFAULT_BOTTOM: &str = "Một người bị cà khịa";
const MEME_FAILED: &str = "Không thể tạo ảnh cà khịa. Vui lòng thử lại sau.";

/// A Discord user as the actions see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUser {
    pub id: String,
    pub username: String,
    pub bot: bool,
}

impl TargetUser {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        TargetUser {
            id: id.into(),
            username: username.into(),
            bot: false,
        }
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// Resolves user ids to display names for rankings and phrase authors.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn username(&self, user_id: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReply {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<(String, String)>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The requester must wait before running the command again
    Throttled { remaining_seconds: u64 },
    /// Only the requester sees this
    Private(String),
    Public(String),
    /// One message per page, in order
    Pages(Vec<String>),
    Embed(EmbedReply),
    Image { content: String, url: String },
}

impl Reply {
    pub fn is_private(&self) -> bool {
        matches!(self, Reply::Throttled { .. } | Reply::Private(_))
    }

    /// Plain text of the reply, when it has one.
    pub fn text(&self) -> Option<String> {
        match self {
            Reply::Throttled { remaining_seconds } => Some(format!(
                "Bạn cần đợi thêm {} giây để sử dụng lại lệnh này.",
                remaining_seconds
            )),
            Reply::Private(text) | Reply::Public(text) => Some(text.clone()),
            Reply::Image { content, .. } => Some(content.clone()),
            Reply::Pages(_) | Reply::Embed(_) => None,
        }
    }
}

/// Everything the commands need, built once at startup.
#[derive(Clone)]
pub struct BotContext {
    pub premium: PremiumAccess,
    pub filter: ContentFilter,
    pub cooldowns: Arc<CooldownManager>,
    pub generator: ResponseGenerator,
    pub phrases: CustomPhraseStore,
    pub stats: StatsStore,
    pub memes: MemeGenerator,
}

impl BotContext {
    pub async fn from_config(config: &Config) -> Result<Self> {
        let premium = PremiumAccess::from_config(config);
        let filter = ContentFilter::new();
        let phrases = CustomPhraseStore::new(config.responses_path());
        let stats = StatsStore::load(config.stats_path()).await;

        let mut generator = ResponseGenerator::new(
            phrases.clone(),
            filter.clone(),
            RateLimiter::default(),
            premium.clone(),
        );
        match &config.hf_api_token {
            Some(token) => {
                let client = HuggingFaceClient::new(token.clone())?;
                generator = generator.with_service(Arc::new(client), config.premium_models.clone());
                info!("Premium mode enabled with {} model(s)", generator.models().len());
            }
            None => info!("HF_API_TOKEN not set, premium mode will report misconfiguration"),
        }

        let credentials = ImgflipCredentials::from_parts(
            config.imgflip_username.clone(),
            config.imgflip_password.clone(),
        );
        if credentials.is_none() {
            info!("Imgflip credentials not set, memes use the fallback URL");
        }

        Ok(BotContext {
            premium,
            filter,
            cooldowns: Arc::new(CooldownManager::new(Duration::from_secs(
                config.cooldown_seconds,
            ))),
            generator,
            phrases,
            stats,
            memes: MemeGenerator::new(credentials)?,
        })
    }
}

#[derive(Clone)]
pub struct BotActions {
    ctx: BotContext,
}

impl BotActions {
    pub fn new(ctx: BotContext) -> Self {
        BotActions { ctx }
    }

    pub fn context(&self) -> &BotContext {
        &self.ctx
    }

    fn throttled(&self, user_id: &str, command: &str) -> Option<Reply> {
        if self.ctx.cooldowns.is_on_cooldown(user_id, command) {
            Some(Reply::Throttled {
                remaining_seconds: self.ctx.cooldowns.remaining_seconds(user_id, command),
            })
        } else {
            None
        }
    }

    async fn record_tease(&self, user_id: &str) {
        if !self.ctx.stats.increment(user_id).await {
            error!("Tease for {} was not persisted", user_id);
        }
    }

    /// `/khia`
    pub async fn tease(
        &self,
        requester_id: &str,
        target: &TargetUser,
        context: Option<&str>,
        mode: Mode,
    ) -> Reply {
        if let Some(reply) = self.throttled(requester_id, TEASE_COMMAND) {
            return reply;
        }
        if self.ctx.premium.is_owner(&target.id) {
            return Reply::Public(OWNER_PROTECTED.to_string());
        }

        let context = context.unwrap_or_default();
        if self.ctx.filter.contains_offensive_content(context) {
            return Reply::Private(OFFENSIVE_CONTEXT.to_string());
        }
        if !context.is_empty() && mode != Mode::Premium {
            return Reply::Private(CONTEXT_NEEDS_PREMIUM.to_string());
        }

        let context = self.ctx.filter.filter_text(context);
        let prompt = tease_prompt(&target.username, &context, requester_id, mode);
        let text = self.ctx.generator.generate_response(&prompt, mode).await;

        self.record_tease(&target.id).await;
        self.ctx.cooldowns.set_cooldown(requester_id, TEASE_COMMAND, None);

        Reply::Public(format!("{}, {}", target.mention(), text))
    }

    /// `/khen`
    pub async fn compliment(&self, target: &TargetUser, context: Option<&str>) -> Reply {
        let prompt = compliment_prompt(&target.username, context.unwrap_or_default());
        let text = self
            .ctx
            .generator
            .generate_response(&prompt, Mode::default())
            .await;
        Reply::Public(format!("{}, {} 🌟", target.mention(), text))
    }

    /// `/trichdan`
    pub fn quote(&self, target: &TargetUser, topic: Option<&str>) -> Reply {
        Reply::Public(generate_quote(&target.username, topic).to_string())
    }

    /// `/randomkhia` over the guild's current members.
    pub async fn random_tease(
        &self,
        requester_id: &str,
        members: &[TargetUser],
        mode: Mode,
    ) -> Reply {
        let candidates: Vec<&TargetUser> = members
            .iter()
            .filter(|m| !m.bot && !self.ctx.premium.is_owner(&m.id))
            .collect();

        let Some(target) = candidates.choose(&mut rand::rng()).copied() else {
            return Reply::Public(NO_TARGETS.to_string());
        };

        let prompt = random_tease_prompt(&target.username, requester_id, mode);
        let text = self.ctx.generator.generate_response(&prompt, mode).await;
        self.record_tease(&target.id).await;

        Reply::Public(format!("{}, {} 🎯", target.mention(), text))
    }

    /// `/rankkhia`. Users the directory cannot resolve are skipped.
    pub async fn rankings(&self, directory: &dyn UserDirectory) -> Reply {
        let rankings = self.ctx.stats.rankings(RANKING_LIMIT);
        if rankings.is_empty() {
            return Reply::Public(NO_RANKINGS.to_string());
        }

        let mut fields = Vec::with_capacity(rankings.len());
        for (user_id, count) in rankings {
            let Some(username) = directory.username(&user_id).await else {
                continue;
            };
            let medal = match fields.len() + 1 {
                1 => "🥇".to_string(),
                2 => "🥈".to_string(),
                3 => "🥉".to_string(),
                rank => format!("{}.", rank),
            };
            fields.push((
                format!("{} {}", medal, username),
                format!("{} lần bị cà khịa", count),
            ));
        }

        Reply::Embed(EmbedReply {
            title: "🏆 Bảng xếp hạng cà khịa".to_string(),
            description: Some("Những người bị cà khịa nhiều nhất".to_string()),
            color: PRIMARY_COLOR,
            fields,
            footer: Some("Cà Khịa Bot".to_string()),
        })
    }

    /// `/themkhia`
    pub async fn add_phrase(&self, author_id: &str, text: &str) -> Reply {
        match self.ctx.phrases.submit(text, author_id, &self.ctx.filter).await {
            Ok(stored) => {
                info!("User {} added a custom phrase", author_id);
                Reply::Public(format!("✅ Đã thêm câu cà khịa: \"{}\"", stored))
            }
            Err(PhraseRejection::TooShort) => Reply::Public(PHRASE_TOO_SHORT.to_string()),
            Err(PhraseRejection::Offensive) => Reply::Public(PHRASE_OFFENSIVE.to_string()),
            Err(PhraseRejection::Persistence) => Reply::Public(PHRASE_SAVE_FAILED.to_string()),
        }
    }

    /// `/danhsachkhia`
    pub async fn list_phrases(&self, directory: &dyn UserDirectory) -> Reply {
        let phrases = match self.ctx.phrases.get_all().await {
            Ok(phrases) => phrases,
            Err(e) => {
                error!("Failed to read custom phrases: {:#}", e);
                return Reply::Public(PHRASE_LIST_FAILED.to_string());
            }
        };
        if phrases.is_empty() {
            return Reply::Public(PHRASE_LIST_EMPTY.to_string());
        }

        let mut pages = Vec::new();
        let mut page = PHRASE_LIST_HEADER.to_string();
        for (i, phrase) in phrases.iter().enumerate() {
            let author = directory
                .username(&phrase.author_id)
                .await
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
            let line = format!("{}. \"{}\" - thêm bởi {}\n", i + 1, phrase.text, author);

            if !page.is_empty() && page.chars().count() + line.chars().count() > PAGE_LIMIT {
                pages.push(std::mem::take(&mut page));
            }
            page.push_str(&line);
        }
        if !page.is_empty() {
            pages.push(page);
        }

        Reply::Pages(pages)
    }

    /// `/xoakhia` with the 1-based position shown by `/danhsachkhia`.
    pub async fn remove_phrase(&self, requester_id: &str, position: i64) -> Reply {
        if !self.ctx.premium.is_owner(requester_id) {
            return Reply::Public(OWNER_ONLY_REMOVE.to_string());
        }

        let not_found = || Reply::Public(format!("❌ Không tìm thấy câu cà khịa số {}!", position));
        let phrases = match self.ctx.phrases.get_all().await {
            Ok(phrases) => phrases,
            Err(e) => {
                error!("Failed to read custom phrases: {:#}", e);
                return Reply::Public(PHRASE_REMOVE_FAILED.to_string());
            }
        };
        let Some(index) = usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .filter(|i| *i < phrases.len())
        else {
            return not_found();
        };

        let removed = &phrases[index];
        if self.ctx.phrases.remove_at(index).await {
            info!("Owner removed custom phrase #{}", position);
            Reply::Public(format!("✅ Đã xóa câu cà khịa: \"{}\"", removed.text))
        } else {
            Reply::Public(PHRASE_REMOVE_FAILED.to_string())
        }
    }

    /// `/khiaanh`
    pub async fn meme(
        &self,
        requester_id: &str,
        target: &TargetUser,
        top_text: Option<&str>,
        bottom_text: Option<&str>,
    ) -> Reply {
        if let Some(reply) = self.throttled(requester_id, MEME_COMMAND) {
            return reply;
        }
        if !self.ctx.premium.is_premium(requester_id) {
            return Reply::Private(MEME_PREMIUM_ONLY.to_string());
        }
        if self.ctx.premium.is_owner(&target.id) {
            return Reply::Public(OWNER_PROTECTED.to_string());
        }

        let top = self
            .ctx
            .filter
            .filter_text(top_text.filter(|t| !t.is_empty()).unwrap_or(&target.username));
        let bottom = self
            .ctx
            .filter
            .filter_text(bottom_text.filter(|t| !t.is_empty()).unwrap_or(MEME_DEFAULT_BOTTOM));

        let Some(url) = self.ctx.memes.generate_meme(&top, &bottom).await else {
            return Reply::Public(MEME_FAILED.to_string());
        };

        self.record_tease(&target.id).await;
        self.ctx
            .cooldowns
            .set_cooldown(requester_id, MEME_COMMAND, Some(MEME_COOLDOWN));

        Reply::Image {
            content: format!("⭐ {}, Một món quà dành cho bạn 🎁", target.mention()),
            url,
        }
    }

    /// `/help`
    pub fn help(&self) -> Reply {
        let fields = [
            ("/khia @user [context] [mode]", "Cà khịa người được tag"),
            ("/khen @user [context]", "Khen ngợi người được tag"),
            ("/trichdan @user [topic]", "Tạo trích dẫn giả từ người được tag"),
            ("/randomkhia [mode]", "Cà khịa một người ngẫu nhiên trong server"),
            ("/khiaanh @user [toptext] [bottomtext]", "⭐ PREMIUM - Tạo ảnh meme cà khịa"),
            ("/rankkhia", "Xem danh sách người bị cà khịa nhiều nhất"),
            ("/themkhia [text]", "Thêm câu cà khịa tùy chỉnh"),
            ("/danhsachkhia", "Xem danh sách câu cà khịa tùy chỉnh"),
            ("/xoakhia [index]", "Xóa câu cà khịa tùy chỉnh (chỉ chủ bot)"),
            ("/help", "Hiển thị danh sách lệnh này"),
        ];

        Reply::Embed(EmbedReply {
            title: "Cà Khịa Bot - Danh sách lệnh".to_string(),
            description: Some("Bot cà khịa vui nhộn cho server Discord của bạn".to_string()),
            color: INFO_COLOR,
            fields: fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            footer: Some(format!("Cà Khịa Bot v{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{FALLBACK_RESPONSES, NAME_PLACEHOLDER, SMART_TEMPLATES};
    use std::collections::HashMap;
    use tempfile::TempDir;

    const OWNER: &str = "1";
    const PREMIUM_USER: &str = "2";
    const REGULAR_USER: &str = "3";

    struct FakeDirectory(HashMap<String, String>);

    impl FakeDirectory {
        fn new(entries: &[(&str, &str)]) -> Self {
            FakeDirectory(
                entries
                    .iter()
                    .map(|(id, name)| (id.to_string(), name.to_string()))
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn username(&self, user_id: &str) -> Option<String> {
            self.0.get(user_id).cloned()
        }
    }

    async fn actions(dir: &TempDir) -> BotActions {
        let premium = PremiumAccess::new(Some(OWNER.to_string()), vec![PREMIUM_USER.to_string()]);
        let filter = ContentFilter::new();
        let phrases = CustomPhraseStore::new(dir.path().join("responses.json"));
        let stats = StatsStore::load(dir.path().join("stats.json")).await;
        let generator = ResponseGenerator::new(
            phrases.clone(),
            filter.clone(),
            RateLimiter::new(Duration::ZERO),
            premium.clone(),
        );

        BotActions::new(BotContext {
            premium,
            filter,
            cooldowns: Arc::new(CooldownManager::new(Duration::from_secs(15))),
            generator,
            phrases,
            stats,
            memes: MemeGenerator::new(None).unwrap(),
        })
    }

    fn is_template_for(reply: &str, name: &str) -> bool {
        SMART_TEMPLATES
            .iter()
            .any(|t| reply.ends_with(&t.replace(NAME_PLACEHOLDER, name)))
    }

    #[tokio::test]
    async fn test_tease_mentions_target_and_counts() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let minh = TargetUser::new("10", "Minh");

        let reply = bot.tease(REGULAR_USER, &minh, None, Mode::Ai).await;
        let Reply::Public(text) = reply else {
            panic!("expected a public reply, got {:?}", reply);
        };
        assert!(text.starts_with("<@10>, "));
        assert!(is_template_for(&text, "Minh"));
        assert_eq!(bot.context().stats.user_stats("10"), 1);
        assert!(bot.context().cooldowns.is_on_cooldown(REGULAR_USER, TEASE_COMMAND));
    }

    #[tokio::test]
    async fn test_tease_respects_cooldown() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let minh = TargetUser::new("10", "Minh");

        bot.tease(REGULAR_USER, &minh, None, Mode::Ai).await;
        let reply = bot.tease(REGULAR_USER, &minh, None, Mode::Ai).await;

        match reply {
            Reply::Throttled { remaining_seconds } => {
                assert!(remaining_seconds > 0 && remaining_seconds <= 15)
            }
            other => panic!("expected throttled, got {:?}", other),
        }
        assert!(bot.tease(REGULAR_USER, &minh, None, Mode::Ai).await.is_private());
        assert_eq!(bot.context().stats.user_stats("10"), 1);

        // Another user is not affected
        let other = bot.tease(PREMIUM_USER, &minh, None, Mode::Ai).await;
        assert!(matches!(other, Reply::Public(_)));
    }

    #[tokio::test]
    async fn test_tease_protects_owner() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let owner = TargetUser::new(OWNER, "Boss");

        let reply = bot.tease(REGULAR_USER, &owner, None, Mode::All).await;
        assert_eq!(reply, Reply::Public(OWNER_PROTECTED.to_string()));
        assert_eq!(bot.context().stats.user_stats(OWNER), 0);
        assert!(!bot.context().cooldowns.is_on_cooldown(REGULAR_USER, TEASE_COMMAND));
    }

    #[tokio::test]
    async fn test_tease_context_rules() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let minh = TargetUser::new("10", "Minh");

        let offensive = bot.tease(REGULAR_USER, &minh, Some("đồ chó"), Mode::Premium).await;
        assert_eq!(offensive, Reply::Private(OFFENSIVE_CONTEXT.to_string()));

        let needs_premium = bot.tease(REGULAR_USER, &minh, Some("đi trễ"), Mode::Ai).await;
        assert_eq!(needs_premium, Reply::Private(CONTEXT_NEEDS_PREMIUM.to_string()));
        assert_eq!(bot.context().stats.user_stats("10"), 0);
    }

    #[tokio::test]
    async fn test_tease_premium_for_regular_user() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let minh = TargetUser::new("10", "Minh");

        let reply = bot.tease(REGULAR_USER, &minh, Some("đi trễ"), Mode::Premium).await;
        assert_eq!(
            reply.text().unwrap(),
            format!("<@10>, {}", crate::generator::PREMIUM_REQUIRED)
        );
    }

    #[tokio::test]
    async fn test_tease_context_cannot_claim_owner() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let minh = TargetUser::new("10", "Minh");

        let context = format!("user_id:{}", OWNER);
        let reply = bot.tease("4", &minh, Some(&context), Mode::Premium).await;
        assert_eq!(
            reply.text().unwrap(),
            format!("<@10>, {}", crate::generator::PREMIUM_REQUIRED)
        );
    }

    #[tokio::test]
    async fn test_compliment_and_quote() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let lan = TargetUser::new("11", "Lan");

        let text = bot.compliment(&lan, Some("nấu ăn")).await.text().unwrap();
        assert!(text.starts_with("<@11>, "));
        assert!(text.ends_with(" 🌟"));

        let quote = bot.quote(&lan, Some("bóng đá")).text().unwrap();
        assert!(quote.starts_with("💭 *\""));
        assert!(quote.contains("bóng đá"));
        assert!(quote.ends_with("— Lan 📜"));
    }

    #[tokio::test]
    async fn test_random_tease_skips_bots_and_owner() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;

        let mut robot = TargetUser::new("20", "Robot");
        robot.bot = true;
        let members = vec![robot, TargetUser::new(OWNER, "Boss"), TargetUser::new("21", "Hoa")];

        for _ in 0..5 {
            let text = bot
                .random_tease(REGULAR_USER, &members, Mode::Ai)
                .await
                .text()
                .unwrap();
            assert!(text.starts_with("<@21>, "));
            assert!(text.ends_with(" 🎯"));
        }
        assert_eq!(bot.context().stats.user_stats("21"), 5);

        let nobody = bot.random_tease(REGULAR_USER, &members[..2], Mode::Ai).await;
        assert_eq!(nobody, Reply::Public(NO_TARGETS.to_string()));
    }

    #[tokio::test]
    async fn test_rankings_embed() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let directory = FakeDirectory::new(&[("a", "An"), ("b", "Bình"), ("d", "Dũng"), ("e", "Em")]);

        assert_eq!(
            bot.rankings(&directory).await,
            Reply::Public(NO_RANKINGS.to_string())
        );

        for (user, times) in [("a", 5), ("b", 4), ("c", 3), ("d", 2), ("e", 1)] {
            for _ in 0..times {
                bot.context().stats.increment(user).await;
            }
        }

        let Reply::Embed(embed) = bot.rankings(&directory).await else {
            panic!("expected an embed");
        };
        let names: Vec<&str> = embed.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["🥇 An", "🥈 Bình", "🥉 Dũng", "4. Em"]);
        assert_eq!(embed.fields[0].1, "5 lần bị cà khịa");
    }

    #[tokio::test]
    async fn test_add_phrase_replies() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;

        assert_eq!(
            bot.add_phrase("5", "ngắn").await,
            Reply::Public(PHRASE_TOO_SHORT.to_string())
        );
        assert_eq!(
            bot.add_phrase("5", "mày là đồ súc vật").await,
            Reply::Public(PHRASE_OFFENSIVE.to_string())
        );
        assert_eq!(
            bot.add_phrase("5", "Code chạy được là nhờ may mắn").await,
            Reply::Public("✅ Đã thêm câu cà khịa: \"Code chạy được là nhờ may mắn\"".to_string())
        );
        assert_eq!(bot.context().phrases.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_phrases() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let directory = FakeDirectory::new(&[("5", "Tuấn")]);

        assert_eq!(
            bot.list_phrases(&directory).await,
            Reply::Public(PHRASE_LIST_EMPTY.to_string())
        );

        bot.context().phrases.add("Câu số một khá dài", "5").await;
        bot.context().phrases.add("Câu số hai khá dài", "404").await;

        let Reply::Pages(pages) = bot.list_phrases(&directory).await else {
            panic!("expected pages");
        };
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0],
            "📝 **Danh sách câu cà khịa tùy chỉnh:**\n\n\
             1. \"Câu số một khá dài\" - thêm bởi Tuấn\n\
             2. \"Câu số hai khá dài\" - thêm bởi người dùng không xác định\n"
        );
    }

    #[tokio::test]
    async fn test_list_phrases_is_paged() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let directory = FakeDirectory::new(&[]);
        let long_text = "x".repeat(300);
        for _ in 0..20 {
            bot.context().phrases.add(&long_text, "5").await;
        }

        let Reply::Pages(pages) = bot.list_phrases(&directory).await else {
            panic!("expected pages");
        };
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| p.chars().count() <= PAGE_LIMIT));
        assert!(pages[0].starts_with(PHRASE_LIST_HEADER));
        let lines: usize = pages.iter().map(|p| p.matches(" - thêm bởi ").count()).sum();
        assert_eq!(lines, 20);
    }

    #[tokio::test]
    async fn test_remove_phrase() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        bot.context().phrases.add("Câu đầu tiên khá dài", "5").await;
        bot.context().phrases.add("Câu thứ hai khá dài", "5").await;

        assert_eq!(
            bot.remove_phrase(REGULAR_USER, 1).await,
            Reply::Public(OWNER_ONLY_REMOVE.to_string())
        );
        assert_eq!(
            bot.remove_phrase(OWNER, 3).await.text().unwrap(),
            "❌ Không tìm thấy câu cà khịa số 3!"
        );
        assert_eq!(
            bot.remove_phrase(OWNER, 0).await.text().unwrap(),
            "❌ Không tìm thấy câu cà khịa số 0!"
        );
        assert_eq!(
            bot.remove_phrase(OWNER, 1).await.text().unwrap(),
            "✅ Đã xóa câu cà khịa: \"Câu đầu tiên khá dài\""
        );

        let remaining = bot.context().phrases.get_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "Câu thứ hai khá dài");
    }

    #[tokio::test]
    async fn test_meme_rules() {
        let dir = TempDir::new().unwrap();
        let bot = actions(&dir).await;
        let minh = TargetUser::new("10", "Minh");

        assert_eq!(
            bot.meme(REGULAR_USER, &minh, None, None).await,
            Reply::Private(MEME_PREMIUM_ONLY.to_string())
        );
        assert_eq!(
            bot.meme(PREMIUM_USER, &TargetUser::new(OWNER, "Boss"), None, None).await,
            Reply::Public(OWNER_PROTECTED.to_string())
        );

        let reply = bot.meme(PREMIUM_USER, &minh, Some("shit happens"), None).await;
        let Reply::Image { content, url } = reply else {
            panic!("expected an image");
        };
        assert_eq!(content, "⭐ <@10>, Một món quà dành cho bạn 🎁");
        assert!(url.starts_with("https://memegen.link/custom/%2A%2A%2A%2A%20happens/"));
        assert_eq!(bot.context().stats.user_stats("10"), 1);

        match bot.meme(PREMIUM_USER, &minh, None, None).await {
            Reply::Throttled { remaining_seconds } => assert!(remaining_seconds > 15),
            other => panic!("expected throttled, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generator_fallback_reaches_user() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("responses.json"), "corrupt").unwrap();
        let bot = actions(&dir).await;

        let text = bot
            .tease(REGULAR_USER, &TargetUser::new("10", "Minh"), None, Mode::Custom)
            .await
            .text()
            .unwrap();
        let body = text.trim_start_matches("<@10>, ");
        assert!(FALLBACK_RESPONSES.contains(&body));
    }

    #[test]
    fn test_throttled_text() {
        let reply = Reply::Throttled { remaining_seconds: 7 };
        assert!(reply.is_private());
        assert_eq!(
            reply.text().unwrap(),
            "Bạn cần đợi thêm 7 giây để sử dụng lại lệnh này."
        );
    }
}
