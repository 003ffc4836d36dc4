//! # Slash Commands (/)
//!
//! Discord native slash command definitions and option helpers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

mod phrases;
mod tease;
mod utility;

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::application_command::{
    CommandDataOption, CommandDataOptionValue,
};
use serenity::model::user::User;
use serenity::prelude::Context;

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    let mut commands = Vec::new();

    // Teasing commands
    commands.extend(tease::create_commands());

    // Custom phrase commands
    commands.extend(phrases::create_commands());

    // Utility commands
    commands.extend(utility::create_commands());

    commands
}

/// Registers all slash commands globally
pub async fn register_global_commands(ctx: &Context) -> Result<()> {
    let slash_commands = create_slash_commands();

    Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!("Global slash commands registered successfully");
    Ok(())
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

/// Utility function to get integer option from slash command
pub fn get_integer_option(options: &[CommandDataOption], name: &str) -> Option<i64> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_i64())
}

/// Utility function to get the resolved user of a user option
pub fn get_user_option<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a User> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| match &opt.resolved {
            Some(CommandDataOptionValue::User(user, _)) => Some(user),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_name(cmd: &CreateApplicationCommand) -> String {
        cmd.0
            .get("name")
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_create_slash_commands() {
        let commands = create_slash_commands();
        assert_eq!(commands.len(), 10, "Should have 10 commands");

        let command_names: Vec<String> = commands.iter().map(command_name).collect();

        let expected_commands = vec![
            "khia",
            "khen",
            "trichdan",
            "randomkhia",
            "khiaanh",
            "themkhia",
            "danhsachkhia",
            "xoakhia",
            "rankkhia",
            "help",
        ];

        for expected in expected_commands {
            assert!(
                command_names.contains(&expected.to_string()),
                "Missing command: {}",
                expected
            );
        }
    }

    #[test]
    fn test_mode_choices_match_generator_modes() {
        let commands = create_slash_commands();
        let khia = commands
            .iter()
            .find(|cmd| command_name(cmd) == "khia")
            .unwrap();

        let options = khia.0.get("options").unwrap().as_array().unwrap();
        let mode = options
            .iter()
            .find(|opt| opt["name"] == "mode")
            .expect("khia has a mode option");
        let values: Vec<&str> = mode["choices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|choice| choice["value"].as_str().unwrap())
            .collect();

        assert_eq!(values, vec!["ai", "custom", "premium", "all"]);
        for value in values {
            assert!(crate::generator::Mode::from_str(value).is_some());
        }
    }
}
