//! Shared HTTP plumbing for the outbound service clients.

use std::time::Duration;

use reqwest::Client;

use crate::util::version::user_agent;

/// Every outbound call shares one timeout so no stage can hang the interaction.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent())
        .timeout(timeout)
        .build()
}
