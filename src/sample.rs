//! The demo workflow: a fixed sequence of management calls.
//!
//! The workflow is written against the operation traits below so the real
//! REST clients and the mock clients used in tests are interchangeable.

use crate::config::{self, Settings};
use crate::models::{Profile, Provider, ResourceGroup, ResourceGroupParams};
use crate::output;
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Resource group and provider operations.
#[allow(async_fn_in_trait)]
pub trait ResourceOperations {
    async fn register_provider(&self, namespace: &str) -> Result<Provider, Box<dyn Error>>;
    async fn create_resource_group(
        &self,
        name: &str,
        params: &ResourceGroupParams,
    ) -> Result<ResourceGroup, Box<dyn Error>>;
    async fn delete_resource_group(&self, name: &str) -> Result<(), Box<dyn Error>>;
}

/// Traffic Manager profile operations.
#[allow(async_fn_in_trait)]
pub trait TrafficManagerOperations {
    async fn create_or_update_profile(
        &self,
        resource_group: &str,
        name: &str,
        params: &Profile,
    ) -> Result<Profile, Box<dyn Error>>;
    async fn list_profiles(&self) -> Result<Vec<Profile>, Box<dyn Error>>;
    async fn delete_profile(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<(), Box<dyn Error>>;
}

/// Operator confirmation before destructive steps.
pub trait Prompt {
    fn confirm(&mut self, action: &str) -> Result<(), Box<dyn Error>>;
}

/// Prompt that blocks on a line from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&mut self, action: &str) -> Result<(), Box<dyn Error>> {
        println!("{action}");
        println!("Press enter to continue");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// Run the full sample sequence.
///
/// Order: register provider, create resource group, create profile, list
/// profiles, then delete the profile and the resource group, each delete
/// gated on the prompt. Any error aborts the remaining steps, leaving
/// already-created resources behind for manual cleanup.
pub async fn run_workflow<R, T, P>(
    settings: &Settings,
    resources: &R,
    traffic: &T,
    prompt: &mut P,
) -> Result<(), Box<dyn Error>>
where
    R: ResourceOperations,
    T: TrafficManagerOperations,
    P: Prompt,
{
    log::info!("#register provider {}", config::PROVIDER_NAMESPACE);
    let provider = resources.register_provider(config::PROVIDER_NAMESPACE).await?;
    println!(
        "{} {}",
        provider.namespace.as_deref().unwrap_or(""),
        provider.registration_state.as_deref().unwrap_or("")
    );

    println!("Create a resource group");
    let params = ResourceGroupParams {
        location: settings.region.clone(),
    };
    let group = resources
        .create_resource_group(&settings.resource_group_name, &params)
        .await?;
    output::print_resource_group(&group);

    println!("Create a Traffic Manager Profile");
    let params = Profile::sample_parameters(&settings.profile_name);
    let profile = traffic
        .create_or_update_profile(&settings.resource_group_name, &settings.profile_name, &params)
        .await?;
    output::print_profile(&profile);

    println!("List all Traffic Manager Profiles");
    for profile in traffic.list_profiles().await? {
        output::print_profile(&profile);
    }

    prompt.confirm("Delete Traffic Manager Profile")?;
    traffic
        .delete_profile(&settings.resource_group_name, &settings.profile_name)
        .await?;

    prompt.confirm("Delete resource group")?;
    resources
        .delete_resource_group(&settings.resource_group_name)
        .await?;

    log::info!("#Sample sequence finished");
    Ok(())
}
