//! Command dispatch for the shiftbook terminal front end.

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;

use std::sync::Arc;

use shiftbook_client::client::ApiClient;
use shiftbook_core::config::Settings;
use shiftbook_core::credentials::{CredentialStore, FileCredentialStore};

use crate::cli::{Cli, Command};
use crate::error::AppResult;

/// ## Summary
/// Wires the API client from configuration and dispatches the parsed command.
///
/// ## Errors
/// Returns an error when a command fails; list fetch failures inside
/// commands render an empty listing with a banner instead of erroring out.
pub async fn run(cli: Cli, config: Settings) -> AppResult<()> {
    let store: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(config.credentials.token_file.clone()));
    let client = ApiClient::new(config.api.clone(), store)?;

    match cli.command {
        Command::Login { email, password } => {
            commands::auth::login(&client, &email, &password).await
        }
        Command::Register { email, password } => {
            commands::auth::register(&client, &email, &password).await
        }
        Command::Logout => commands::auth::logout(&client),
        Command::Employee { command } => commands::employee::dispatch(&client, command).await,
        Command::Position { command } => commands::position::dispatch(&client, command).await,
        Command::Schedule { command } => commands::schedule::dispatch(&client, command).await,
    }
}
