//! Teasing slash commands: /khia, /khen, /trichdan, /randomkhia, /khiaanh

use serenity::builder::{CreateApplicationCommand, CreateApplicationCommandOption};
use serenity::model::application::command::CommandOptionType;

/// Creates the teasing commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_khia_command(),
        create_khen_command(),
        create_trichdan_command(),
        create_randomkhia_command(),
        create_khiaanh_command(),
    ]
}

/// Mode picker shared by /khia and /randomkhia
fn mode_option(option: &mut CreateApplicationCommandOption) -> &mut CreateApplicationCommandOption {
    option
        .name("mode")
        .description("Loại cà khịa (ai: template, custom: tùy chỉnh, premium: AI cao cấp, all: kết hợp)")
        .kind(CommandOptionType::String)
        .required(false)
        .add_string_choice("Template", "ai")
        .add_string_choice("Tùy chỉnh", "custom")
        .add_string_choice("⭐ Premium AI (dùng context)", "premium")
        .add_string_choice("Kết hợp (mặc định)", "all")
}

fn create_khia_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("khia")
        .description("Cà khịa một người dùng")
        .create_option(|option| {
            option
                .name("user")
                .description("Người bị cà khịa")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("context")
                .description("⭐ PREMIUM ONLY - Nội dung cà khịa (chỉ hoạt động với Premium AI)")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(mode_option)
        .to_owned()
}

fn create_khen_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("khen")
        .description("Khen ngợi một người dùng")
        .create_option(|option| {
            option
                .name("user")
                .description("Người được khen")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("context")
                .description("Nội dung khen")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

fn create_trichdan_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("trichdan")
        .description("Tạo trích dẫn giả từ một người dùng")
        .create_option(|option| {
            option
                .name("user")
                .description("Người được trích dẫn")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("topic")
                .description("Chủ đề trích dẫn")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

fn create_randomkhia_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("randomkhia")
        .description("Cà khịa một người ngẫu nhiên trong server")
        .dm_permission(false)
        .create_option(mode_option)
        .to_owned()
}

fn create_khiaanh_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("khiaanh")
        .description("⭐ PREMIUM - Tạo ảnh cà khịa một người dùng")
        .create_option(|option| {
            option
                .name("user")
                .description("Người bị cà khịa")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("toptext")
                .description("Nội dung phía trên ảnh")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .create_option(|option| {
            option
                .name("bottomtext")
                .description("Nội dung phía dưới ảnh")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}
