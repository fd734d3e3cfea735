//! Resource group client over the ARM transport.

use super::arm::ArmClient;
use crate::config;
use crate::models::{Provider, ResourceGroup, ResourceGroupParams};
use crate::sample::ResourceOperations;
use std::error::Error;

/// Client for resource group and provider registration operations.
pub struct ResourceGroupClient<'a> {
    arm: &'a ArmClient,
}

impl<'a> ResourceGroupClient<'a> {
    pub fn new(arm: &'a ArmClient) -> Self {
        ResourceGroupClient { arm }
    }
}

impl ResourceOperations for ResourceGroupClient<'_> {
    async fn register_provider(&self, namespace: &str) -> Result<Provider, Box<dyn Error>> {
        let path = format!(
            "/subscriptions/{sub}/providers/{namespace}/register",
            sub = self.arm.subscription_id()
        );
        self.arm.post(&path, config::RESOURCES_API_VERSION).await
    }

    async fn create_resource_group(
        &self,
        name: &str,
        params: &ResourceGroupParams,
    ) -> Result<ResourceGroup, Box<dyn Error>> {
        log::info!("#create resource group {name} in {}", params.location);
        let path = format!(
            "/subscriptions/{sub}/resourcegroups/{name}",
            sub = self.arm.subscription_id()
        );
        self.arm
            .put(&path, config::RESOURCES_API_VERSION, params)
            .await
    }

    async fn delete_resource_group(&self, name: &str) -> Result<(), Box<dyn Error>> {
        log::info!("#delete resource group {name}");
        let path = format!(
            "/subscriptions/{sub}/resourcegroups/{name}",
            sub = self.arm.subscription_id()
        );
        self.arm.delete(&path, config::RESOURCES_API_VERSION).await
    }
}
