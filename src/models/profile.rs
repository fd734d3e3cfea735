//! Traffic Manager profile models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A Traffic Manager profile, used both as PUT request body and response.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Fully qualified resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Profile name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type, "Microsoft.Network/trafficManagerProfiles".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Always "global" for Traffic Manager profiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Resource tags (sorted for stable output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
    /// Profile configuration and state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ProfileProperties>,
}

/// Configuration and state of a Traffic Manager profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileProperties {
    /// "Enabled" or "Disabled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_status: Option<String>,
    /// Routing method, e.g. "Performance", "Weighted", "Priority".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_routing_method: Option<String>,
    /// DNS name and TTL for the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_config: Option<DnsConfig>,
    /// Endpoint health-monitoring settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_config: Option<MonitorConfig>,
    /// Endpoints registered under the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<Endpoint>>,
}

/// DNS settings of a profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DnsConfig {
    /// Relative DNS name, combined with the Traffic Manager domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_name: Option<String>,
    /// DNS time-to-live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    /// Fully qualified domain name, assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
}

/// Health-monitor settings of a profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Probe protocol, "HTTP", "HTTPS" or "TCP".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Probe port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Probe path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// An endpoint registered under a profile. Read-only in this sample.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Fully qualified resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Endpoint name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoint resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Endpoint configuration and state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<EndpointProperties>,
}

/// Configuration and state of an endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EndpointProperties {
    /// Resource id of an Azure endpoint target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_resource_id: Option<String>,
    /// DNS name the endpoint routes to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// "Enabled" or "Disabled".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_status: Option<String>,
    /// Weight used by the Weighted routing method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Priority used by the Priority routing method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Region of an external endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_location: Option<String>,
}

/// Envelope returned when listing profiles by subscription.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProfileListResult {
    /// Profiles in the subscription.
    pub value: Vec<Profile>,
}

impl Profile {
    /// The fixed profile definition created by the sample: performance
    /// routing, DNS relative name equal to the profile name with a 30s TTL,
    /// and an HTTP monitor probing port 80.
    pub fn sample_parameters(profile_name: &str) -> Profile {
        Profile {
            location: Some("global".to_string()),
            properties: Some(ProfileProperties {
                traffic_routing_method: Some("Performance".to_string()),
                dns_config: Some(DnsConfig {
                    relative_name: Some(profile_name.to_string()),
                    ttl: Some(30),
                    fqdn: None,
                }),
                monitor_config: Some(MonitorConfig {
                    protocol: Some("HTTP".to_string()),
                    port: Some(80),
                    path: Some("/sample_monitor_page".to_string()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parameters_serialize_camel_case() {
        let params = Profile::sample_parameters("traffic-manager-sample");
        let json = serde_json::to_value(&params).expect("Error serializing profile");

        assert_eq!(json["location"], "global");
        assert_eq!(json["properties"]["trafficRoutingMethod"], "Performance");
        assert_eq!(
            json["properties"]["dnsConfig"]["relativeName"],
            "traffic-manager-sample"
        );
        assert_eq!(json["properties"]["dnsConfig"]["ttl"], 30);
        assert_eq!(json["properties"]["monitorConfig"]["protocol"], "HTTP");
        assert_eq!(json["properties"]["monitorConfig"]["port"], 80);
        assert_eq!(
            json["properties"]["monitorConfig"]["path"],
            "/sample_monitor_page"
        );
        // Unset response-only fields must not appear in the request body
        assert!(json.get("id").is_none());
        assert!(json["properties"].get("endpoints").is_none());
    }

    #[test]
    fn test_deserialize_profile_with_endpoints() {
        let body = r#"{
            "id": "/subscriptions/sub-1/resourceGroups/TrafficManagerSample/providers/Microsoft.Network/trafficManagerProfiles/traffic-manager-sample",
            "name": "traffic-manager-sample",
            "type": "Microsoft.Network/trafficManagerProfiles",
            "location": "global",
            "properties": {
                "profileStatus": "Enabled",
                "trafficRoutingMethod": "Performance",
                "dnsConfig": {
                    "relativeName": "traffic-manager-sample",
                    "fqdn": "traffic-manager-sample.trafficmanager.net",
                    "ttl": 30
                },
                "monitorConfig": { "protocol": "HTTP", "port": 80, "path": "/sample_monitor_page" },
                "endpoints": [
                    {
                        "id": "/subscriptions/sub-1/resourceGroups/TrafficManagerSample/providers/Microsoft.Network/trafficManagerProfiles/traffic-manager-sample/externalEndpoints/ep1",
                        "name": "ep1",
                        "type": "Microsoft.Network/trafficManagerProfiles/externalEndpoints",
                        "properties": {
                            "target": "app1.example.com",
                            "endpointStatus": "Enabled",
                            "weight": 10,
                            "priority": 1,
                            "endpointLocation": "West US"
                        }
                    }
                ]
            }
        }"#;
        let profile: Profile = serde_json::from_str(body).expect("Error parsing profile");
        assert_eq!(profile.name.as_deref(), Some("traffic-manager-sample"));

        let props = profile.properties.expect("Missing properties");
        assert_eq!(props.profile_status.as_deref(), Some("Enabled"));
        assert_eq!(
            props.dns_config.as_ref().and_then(|d| d.fqdn.as_deref()),
            Some("traffic-manager-sample.trafficmanager.net")
        );

        let endpoints = props.endpoints.expect("Missing endpoints");
        assert_eq!(endpoints.len(), 1);
        let ep = endpoints[0].properties.as_ref().expect("Missing endpoint properties");
        assert_eq!(ep.target.as_deref(), Some("app1.example.com"));
        assert_eq!(ep.weight, Some(10));
        assert_eq!(ep.priority, Some(1));
    }

    #[test]
    fn test_deserialize_list_result() {
        let body = r#"{ "value": [] }"#;
        let result: ProfileListResult = serde_json::from_str(body).expect("Error parsing list");
        assert!(result.value.is_empty());
    }
}
