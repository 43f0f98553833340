//! Credential-exchange commands.

use shiftbook_client::client::ApiClient;

use crate::error::AppResult;

pub async fn login(client: &ApiClient, email: &str, password: &str) -> AppResult<()> {
    client.login(email, password).await?;
    println!("Logged in as {email}");
    Ok(())
}

pub async fn register(client: &ApiClient, email: &str, password: &str) -> AppResult<()> {
    client.register(email, password).await?;
    println!("Registered {email}; log in to obtain a token");
    Ok(())
}

pub fn logout(client: &ApiClient) -> AppResult<()> {
    client.logout()?;
    println!("Logged out");
    Ok(())
}
