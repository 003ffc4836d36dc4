use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info, warn};
use serenity::builder::CreateEmbed;
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::id::UserId;
use serenity::model::user::User;
use serenity::model::Timestamp;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::actions::{BotActions, EmbedReply, Reply, TargetUser, UserDirectory};
use crate::commands::slash::{get_integer_option, get_string_option, get_user_option};
use crate::generator::Mode;

/// Guild member listing is capped at this many users per request
const MEMBER_FETCH_LIMIT: u64 = 1000;

impl From<&User> for TargetUser {
    fn from(user: &User) -> Self {
        TargetUser {
            id: user.id.to_string(),
            username: user.name.clone(),
            bot: user.bot,
        }
    }
}

/// Looks users up over the REST API.
struct HttpDirectory {
    http: Arc<Http>,
}

#[async_trait]
impl UserDirectory for HttpDirectory {
    async fn username(&self, user_id: &str) -> Option<String> {
        let id = user_id.parse::<u64>().ok()?;
        match self.http.get_user(id).await {
            Ok(user) => Some(user.name),
            Err(e) => {
                debug!("Could not fetch user {}: {}", user_id, e);
                None
            }
        }
    }
}

fn fill_embed<'a>(e: &'a mut CreateEmbed, embed: &EmbedReply) -> &'a mut CreateEmbed {
    e.title(&embed.title).color(embed.color).timestamp(Timestamp::now());
    if let Some(description) = &embed.description {
        e.description(description);
    }
    for (name, value) in &embed.fields {
        e.field(name, value, false);
    }
    if let Some(footer) = &embed.footer {
        e.footer(|f| f.text(footer));
    }
    e
}

#[derive(Clone)]
pub struct CommandHandler {
    actions: BotActions,
}

impl CommandHandler {
    pub fn new(actions: BotActions) -> Self {
        CommandHandler { actions }
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        info!(
            "Processing slash command: {} from user: {}",
            command.data.name, command.user.id
        );

        // Generation can take longer than the 3 second acknowledgement window
        command
            .create_interaction_response(&ctx.http, |response| {
                response.kind(InteractionResponseType::DeferredChannelMessageWithSource)
            })
            .await?;

        let reply = self.run_command(ctx, command).await?;
        self.send_reply(ctx, command, reply).await
    }

    async fn run_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<Reply> {
        let options = &command.data.options;
        let requester_id = command.user.id.to_string();
        let mode = get_string_option(options, "mode")
            .and_then(|m| Mode::from_str(&m))
            .unwrap_or_default();
        let target = || {
            get_user_option(options, "user")
                .map(TargetUser::from)
                .ok_or_else(|| anyhow::anyhow!("Missing user parameter"))
        };

        let reply = match command.data.name.as_str() {
            "khia" => {
                let context = get_string_option(options, "context");
                self.actions
                    .tease(&requester_id, &target()?, context.as_deref(), mode)
                    .await
            }
            "khen" => {
                let context = get_string_option(options, "context");
                self.actions.compliment(&target()?, context.as_deref()).await
            }
            "trichdan" => {
                let topic = get_string_option(options, "topic");
                self.actions.quote(&target()?, topic.as_deref())
            }
            "randomkhia" => {
                let Some(guild_id) = command.guild_id else {
                    return Ok(Reply::Private(
                        "Lệnh này chỉ dùng được trong server.".to_string(),
                    ));
                };
                let members: Vec<TargetUser> = guild_id
                    .members(&ctx.http, Some(MEMBER_FETCH_LIMIT), None::<UserId>)
                    .await?
                    .iter()
                    .map(|member| TargetUser::from(&member.user))
                    .collect();
                self.actions.random_tease(&requester_id, &members, mode).await
            }
            "khiaanh" => {
                let top = get_string_option(options, "toptext");
                let bottom = get_string_option(options, "bottomtext");
                self.actions
                    .meme(&requester_id, &target()?, top.as_deref(), bottom.as_deref())
                    .await
            }
            "rankkhia" => {
                let directory = HttpDirectory {
                    http: ctx.http.clone(),
                };
                self.actions.rankings(&directory).await
            }
            "themkhia" => {
                let text = get_string_option(options, "text")
                    .ok_or_else(|| anyhow::anyhow!("Missing text parameter"))?;
                self.actions.add_phrase(&requester_id, &text).await
            }
            "danhsachkhia" => {
                let directory = HttpDirectory {
                    http: ctx.http.clone(),
                };
                self.actions.list_phrases(&directory).await
            }
            "xoakhia" => {
                let position = get_integer_option(options, "index")
                    .ok_or_else(|| anyhow::anyhow!("Missing index parameter"))?;
                self.actions.remove_phrase(&requester_id, position).await
            }
            "help" => self.actions.help(),
            other => {
                warn!("Unknown slash command: {}", other);
                Reply::Public("Lệnh không xác định. Dùng `/help` để xem danh sách lệnh.".to_string())
            }
        };

        Ok(reply)
    }

    async fn send_reply(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
        reply: Reply,
    ) -> Result<()> {
        // The deferred placeholder is public, so private replies replace it
        // with an ephemeral follow-up.
        if reply.is_private() {
            let text = reply.text().unwrap_or_default();
            command.delete_original_interaction_response(&ctx.http).await?;
            command
                .create_followup_message(&ctx.http, |message| message.content(text).ephemeral(true))
                .await?;
            return Ok(());
        }

        match reply {
            Reply::Public(text) => {
                command
                    .edit_original_interaction_response(&ctx.http, |response| {
                        response.content(text)
                    })
                    .await?;
            }
            Reply::Pages(pages) => {
                let mut pages = pages.into_iter();
                if let Some(first) = pages.next() {
                    command
                        .edit_original_interaction_response(&ctx.http, |response| {
                            response.content(first)
                        })
                        .await?;
                }
                for page in pages {
                    command
                        .create_followup_message(&ctx.http, |message| message.content(page))
                        .await?;
                }
            }
            Reply::Embed(embed) => {
                command
                    .edit_original_interaction_response(&ctx.http, |response| {
                        response.embed(|e| fill_embed(e, &embed))
                    })
                    .await?;
            }
            Reply::Image { content, url } => {
                command
                    .edit_original_interaction_response(&ctx.http, |response| {
                        response.content(content).embed(|e| e.image(url))
                    })
                    .await?;
            }
            Reply::Throttled { .. } | Reply::Private(_) => {}
        }

        Ok(())
    }
}
