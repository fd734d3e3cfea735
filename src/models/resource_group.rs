//! Resource group and provider registration models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body for creating a resource group.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceGroupParams {
    /// Region the group is created in, e.g. "East US".
    pub location: String,
}

/// A resource group as returned by ARM.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    /// Fully qualified resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Region the group lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Resource tags (sorted for stable output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    /// Server-side properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ResourceGroupProperties>,
}

/// Server-side resource group properties.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupProperties {
    /// Provisioning state, e.g. "Succeeded".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// Result of registering a resource provider namespace.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Provider namespace, e.g. "Microsoft.Network".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Registration state, e.g. "Registered" or "Registering".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_resource_group() {
        let body = r#"{
            "id": "/subscriptions/sub-1/resourceGroups/TrafficManagerSample",
            "name": "TrafficManagerSample",
            "location": "eastus",
            "properties": { "provisioningState": "Succeeded" }
        }"#;
        let group: ResourceGroup =
            serde_json::from_str(body).expect("Error parsing resource group");
        assert_eq!(group.name.as_deref(), Some("TrafficManagerSample"));
        assert!(group.tags.is_none());
        let props = group.properties.expect("Missing properties");
        assert_eq!(props.provisioning_state.as_deref(), Some("Succeeded"));
    }

    #[test]
    fn test_serialize_params() {
        let params = ResourceGroupParams {
            location: "East US".to_string(),
        };
        let json = serde_json::to_value(&params).expect("Error serializing params");
        assert_eq!(json, serde_json::json!({ "location": "East US" }));
    }

    #[test]
    fn test_deserialize_provider() {
        let body = r#"{ "namespace": "Microsoft.Network", "registrationState": "Registered" }"#;
        let provider: Provider = serde_json::from_str(body).expect("Error parsing provider");
        assert_eq!(provider.namespace.as_deref(), Some("Microsoft.Network"));
        assert_eq!(provider.registration_state.as_deref(), Some("Registered"));
    }
}
