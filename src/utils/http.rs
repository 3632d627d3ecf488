use std::time::Duration;

use reqwest::Client;

use crate::Result;

/// Timeout applied to every outbound request made through the shared client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("restock-clerk/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by every notification sender.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
