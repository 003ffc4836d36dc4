//! Custom phrase slash commands: /themkhia, /danhsachkhia, /xoakhia

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates the custom phrase commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![
        create_themkhia_command(),
        create_danhsachkhia_command(),
        create_xoakhia_command(),
    ]
}

fn create_themkhia_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("themkhia")
        .description("Thêm câu cà khịa tùy chỉnh")
        .create_option(|option| {
            option
                .name("text")
                .description("Nội dung câu cà khịa")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .to_owned()
}

fn create_danhsachkhia_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("danhsachkhia")
        .description("Xem danh sách câu cà khịa tùy chỉnh")
        .to_owned()
}

/// Owner only; enforced when the command runs
fn create_xoakhia_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("xoakhia")
        .description("Xóa câu cà khịa tùy chỉnh")
        .create_option(|option| {
            option
                .name("index")
                .description("Số thứ tự của câu cà khịa (từ 1)")
                .kind(CommandOptionType::Integer)
                .required(true)
        })
        .to_owned()
}
