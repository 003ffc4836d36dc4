//! Utility slash commands: /rankkhia, /help

use serenity::builder::CreateApplicationCommand;

/// Creates utility commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_rankkhia_command(), create_help_command()]
}

/// Creates the leaderboard command
fn create_rankkhia_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("rankkhia")
        .description("Xem danh sách người bị cà khịa nhiều nhất")
        .to_owned()
}

/// Creates the help command
fn create_help_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("help")
        .description("Hiển thị danh sách lệnh")
        .to_owned()
}
