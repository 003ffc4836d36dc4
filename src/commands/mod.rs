//! # Command System
//!
//! Slash command definitions plus the gateway-independent command logic.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod actions;
pub mod slash;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

pub use actions::{BotActions, BotContext, EmbedReply, Reply, TargetUser, UserDirectory};
pub use slash::{
    create_slash_commands, get_integer_option, get_string_option, get_user_option,
    register_global_commands,
};
