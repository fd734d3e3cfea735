//! Sample configuration: fixed resource names and environment-driven settings.

use std::env;

/// Region the sample resource group is created in.
pub const REGION: &str = "East US";
/// Name of the resource group created and deleted by the sample.
pub const RESOURCE_GROUP_NAME: &str = "TrafficManagerSample";
/// Name of the Traffic Manager profile, also used as its DNS relative name.
pub const PROFILE_NAME: &str = "traffic-manager-sample";
/// Resource provider namespace registered before creating resources.
pub const PROVIDER_NAMESPACE: &str = "Microsoft.Network";
/// Subscription id used when AZURE_SUBSCRIPTION_ID is not set.
pub const FALLBACK_SUBSCRIPTION_ID: &str = "11111111-1111-1111-1111-111111111111";

/// ARM api-version for resource group and provider operations.
pub const RESOURCES_API_VERSION: &str = "2021-04-01";
/// ARM api-version for Traffic Manager operations.
pub const TRAFFIC_MANAGER_API_VERSION: &str = "2018-04-01";

/// Base URL of the Azure Resource Manager endpoint.
pub const MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";
/// Base URL of the Azure Active Directory authority.
pub const AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
/// OAuth2 scope for management-plane tokens.
pub const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";

/// Resolved settings for one sample run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Region for the resource group.
    pub region: String,
    /// Resource group name.
    pub resource_group_name: String,
    /// Traffic Manager profile name.
    pub profile_name: String,
    /// Azure subscription id the clients operate on.
    pub subscription_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            region: REGION.to_string(),
            resource_group_name: RESOURCE_GROUP_NAME.to_string(),
            profile_name: PROFILE_NAME.to_string(),
            subscription_id: FALLBACK_SUBSCRIPTION_ID.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from the process environment.
    ///
    /// Only the subscription id is environment-driven; the resource names are
    /// fixed sample constants.
    pub fn from_env() -> Self {
        Settings {
            subscription_id: resolve_subscription_id(env::var("AZURE_SUBSCRIPTION_ID").ok()),
            ..Default::default()
        }
    }
}

/// Pick the subscription id from the environment value, falling back to the
/// sample default with a warning.
pub fn resolve_subscription_id(from_env: Option<String>) -> String {
    match from_env {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::warn!(
                "AZURE_SUBSCRIPTION_ID not set, using fallback subscription id {FALLBACK_SUBSCRIPTION_ID}"
            );
            FALLBACK_SUBSCRIPTION_ID.to_string()
        }
    }
}
