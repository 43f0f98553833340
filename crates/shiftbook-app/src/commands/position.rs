//! Position directory commands.

use shiftbook_client::client::ApiClient;
use shiftbook_core::model::NewPosition;

use crate::cli::PositionCommand;
use crate::error::AppResult;
use crate::render;

pub async fn dispatch(client: &ApiClient, command: PositionCommand) -> AppResult<()> {
    match command {
        PositionCommand::List => list(client).await,
        PositionCommand::Add {
            title,
            description,
            active,
        } => add(client, &title, description.as_deref(), active).await,
    }
}

async fn list(client: &ApiClient) -> AppResult<()> {
    let positions = match client.positions().await {
        Ok(positions) => positions,
        Err(error) => {
            tracing::error!(error = %error, "Failed to load positions");
            render::error_banner("Failed to load positions. Please try again later.");
            Vec::new()
        }
    };
    render::position_table(&positions);
    Ok(())
}

async fn add(
    client: &ApiClient,
    title: &str,
    description: Option<&str>,
    active: bool,
) -> AppResult<()> {
    client
        .create_position(&NewPosition {
            title,
            description,
            is_active: active,
        })
        .await?;
    println!("Created position {title}");
    Ok(())
}
