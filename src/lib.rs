// cargo watch -x 'fmt' -x 'run'

pub mod azure;
mod config;
pub mod models;
pub mod output;
pub mod sample;

pub use config::Settings;
pub use sample::{
    run_workflow, Prompt, ResourceOperations, StdinPrompt, TrafficManagerOperations,
};

use azure::{ArmClient, Credential, ResourceGroupClient, TrafficManagerClient};
use std::error::Error;

/// Run the Traffic Manager demo against the real management endpoint.
///
/// Resolves settings and credentials from the environment, fetches a bearer
/// token and executes the fixed workflow with live clients.
pub async fn run_sample() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env();
    log::info!(
        "Using subscription {sub}, resource group {rg}, profile {profile}",
        sub = settings.subscription_id,
        rg = settings.resource_group_name,
        profile = settings.profile_name
    );

    let credential = Credential::from_env()?;
    let http = reqwest::Client::new();
    let token = credential.fetch_token(&http).await?;

    let arm = ArmClient::new(http, token.token, settings.subscription_id.clone());
    let resources = ResourceGroupClient::new(&arm);
    let traffic = TrafficManagerClient::new(&arm);
    let mut prompt = StdinPrompt;

    run_workflow(&settings, &resources, &traffic, &mut prompt).await
}
