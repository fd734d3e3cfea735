//! Traffic Manager client over the ARM transport.

use super::arm::ArmClient;
use crate::config;
use crate::models::{Profile, ProfileListResult};
use crate::sample::TrafficManagerOperations;
use std::error::Error;

/// Client for Traffic Manager profile operations.
pub struct TrafficManagerClient<'a> {
    arm: &'a ArmClient,
}

impl<'a> TrafficManagerClient<'a> {
    pub fn new(arm: &'a ArmClient) -> Self {
        TrafficManagerClient { arm }
    }

    fn profile_path(&self, resource_group: &str, name: &str) -> String {
        format!(
            "/subscriptions/{sub}/resourceGroups/{resource_group}/providers/Microsoft.Network/trafficManagerProfiles/{name}",
            sub = self.arm.subscription_id()
        )
    }
}

impl TrafficManagerOperations for TrafficManagerClient<'_> {
    async fn create_or_update_profile(
        &self,
        resource_group: &str,
        name: &str,
        params: &Profile,
    ) -> Result<Profile, Box<dyn Error>> {
        log::info!("#create traffic manager profile {name} in {resource_group}");
        let path = self.profile_path(resource_group, name);
        self.arm
            .put(&path, config::TRAFFIC_MANAGER_API_VERSION, params)
            .await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, Box<dyn Error>> {
        let path = format!(
            "/subscriptions/{sub}/providers/Microsoft.Network/trafficmanagerprofiles",
            sub = self.arm.subscription_id()
        );
        let result: ProfileListResult = self
            .arm
            .get(&path, config::TRAFFIC_MANAGER_API_VERSION)
            .await?;
        log::info!("Got {} traffic manager profiles", result.value.len());
        Ok(result.value)
    }

    async fn delete_profile(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<(), Box<dyn Error>> {
        log::info!("#delete traffic manager profile {name} in {resource_group}");
        let path = self.profile_path(resource_group, name);
        self.arm
            .delete(&path, config::TRAFFIC_MANAGER_API_VERSION)
            .await
    }
}
