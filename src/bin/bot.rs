use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use khia_bot::commands::{register_global_commands, BotActions, BotContext, CommandHandler};
use khia_bot::config::Config;
use khia_bot::cooldown::SWEEP_INTERVAL;
use khia_bot::http_server::start_http_server;

const COMMAND_ERROR: &str = "Có lỗi xảy ra khi xử lý lệnh. Vui lòng thử lại sau.";

struct Handler {
    command_handler: Arc<CommandHandler>,
}

impl Handler {
    fn new(command_handler: CommandHandler) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }

        if let Err(e) = register_global_commands(&ctx).await {
            error!("❌ Failed to register global slash commands: {}", e);
        } else {
            info!("✅ Successfully registered slash commands globally");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::ApplicationCommand(command) = interaction else {
            return;
        };

        if let Err(e) = self.command_handler.handle_slash_command(&ctx, &command).await {
            error!("Error handling slash command '{}': {:#}", command.data.name, e);

            // Try to edit the deferred response, fallback to new response if that fails
            if command
                .edit_original_interaction_response(&ctx.http, |response| {
                    response.content(COMMAND_ERROR)
                })
                .await
                .is_err()
            {
                let _ = command
                    .create_interaction_response(&ctx.http, |response| {
                        response
                            .kind(InteractionResponseType::ChannelMessageWithSource)
                            .interaction_response_data(|message| message.content(COMMAND_ERROR))
                    })
                    .await;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Cà Khịa Bot v{}...", env!("CARGO_PKG_VERSION"));

    let context = BotContext::from_config(&config).await?;
    match context.phrases.len().await {
        Ok(count) => info!("📝 {} custom phrase(s) loaded", count),
        Err(e) => warn!("⚠️ Custom phrase store is unreadable: {:#}", e),
    }

    let started_at = Instant::now();
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = start_http_server(port, started_at).await {
            error!("❌ Status server failed: {:#}", e);
        }
    });

    let cooldowns = context.cooldowns.clone();
    tokio::spawn(async move { cooldowns.run_sweeper(SWEEP_INTERVAL).await });

    let handler = Handler::new(CommandHandler::new(BotActions::new(context)));

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {}", e);
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {:?}", intents);

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {:?}", why);
        return Err(anyhow::anyhow!("Failed to establish gateway connection: {}", why));
    }

    Ok(())
}
