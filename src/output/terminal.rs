//! Indented key/value formatting for management API objects.
//!
//! The `format_*` functions build the output as a `String` so formatting is
//! testable; the `print_*` wrappers write it to stdout.

use crate::models::{Endpoint, Profile, ResourceGroup};
use std::collections::BTreeMap;

/// Format the common resource fields shared by groups and profiles.
fn push_item(
    out: &mut String,
    name: &Option<String>,
    id: &Option<String>,
    location: &Option<String>,
    tags: &Option<BTreeMap<String, String>>,
) {
    out.push_str(&format!("\tName: {}\n", opt(name)));
    out.push_str(&format!("\tId: {}\n", opt(id)));
    out.push_str(&format!("\tLocation: {}\n", opt(location)));
    out.push_str(&format!("\tTags: {}\n", format_tags(tags)));
}

pub fn format_resource_group(group: &ResourceGroup) -> String {
    let mut out = String::new();
    push_item(&mut out, &group.name, &group.id, &group.location, &group.tags);
    if let Some(state) = group
        .properties
        .as_ref()
        .and_then(|p| p.provisioning_state.as_deref())
    {
        out.push_str("\tProperties:\n");
        out.push_str(&format!("\t\tProvisioning State: {state}\n"));
    }
    out
}

pub fn format_profile(profile: &Profile) -> String {
    let mut out = String::new();
    push_item(
        &mut out,
        &profile.name,
        &profile.id,
        &profile.location,
        &profile.tags,
    );

    let empty: &[Endpoint] = &[];
    let (status, method, endpoints) = match &profile.properties {
        Some(props) => (
            opt(&props.profile_status),
            opt(&props.traffic_routing_method),
            props.endpoints.as_deref().unwrap_or(empty),
        ),
        None => ("", "", empty),
    };
    out.push_str(&format!("\tProfileStatus: {status}\n"));
    out.push_str(&format!("\tTrafficRoutingMethod: {method}\n"));

    out.push_str("\t\tEndpoints:\n");
    for endpoint in endpoints {
        push_endpoint(&mut out, endpoint);
    }
    out
}

fn push_endpoint(out: &mut String, endpoint: &Endpoint) {
    out.push_str(&format!("\tName: {}\n", opt(&endpoint.name)));
    out.push_str(&format!("\tId: {}\n", opt(&endpoint.id)));
    out.push_str(&format!("\tType: {}\n", opt(&endpoint.resource_type)));
    let props = endpoint.properties.clone().unwrap_or_default();
    out.push_str(&format!(
        "\tTargetResourceId: {}\n",
        opt(&props.target_resource_id)
    ));
    out.push_str(&format!("\tTarget: {}\n", opt(&props.target)));
    out.push_str(&format!(
        "\tEndpointStatus: {}\n",
        opt(&props.endpoint_status)
    ));
    out.push_str(&format!("\tWeight: {}\n", opt_num(props.weight)));
    out.push_str(&format!("\tPriority: {}\n", opt_num(props.priority)));
    out.push_str(&format!(
        "\tEndpointLocation: {}\n",
        opt(&props.endpoint_location)
    ));
}

pub fn print_resource_group(group: &ResourceGroup) {
    print!("{}", format_resource_group(group));
}

pub fn print_profile(profile: &Profile) {
    print!("{}", format_profile(profile));
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn opt_num(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Render tags as "key=value" pairs, empty when there are none.
fn format_tags(tags: &Option<BTreeMap<String, String>>) -> String {
    match tags {
        Some(tags) => tags
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<String>>()
            .join(", "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EndpointProperties, ProfileProperties, ResourceGroupProperties,
    };

    #[test]
    fn test_format_resource_group_no_tags() {
        let group = ResourceGroup {
            id: Some("/subscriptions/sub-1/resourceGroups/TrafficManagerSample".to_string()),
            name: Some("TrafficManagerSample".to_string()),
            location: Some("East US".to_string()),
            tags: None,
            properties: Some(ResourceGroupProperties {
                provisioning_state: Some("Succeeded".to_string()),
            }),
        };
        let out = format_resource_group(&group);
        assert!(out.contains("\tLocation: East US\n"), "got: {out}");
        assert!(out.contains("\tTags: \n"), "got: {out}");
        assert!(out.contains("\t\tProvisioning State: Succeeded\n"), "got: {out}");
    }

    #[test]
    fn test_format_resource_group_without_properties() {
        let group = ResourceGroup {
            name: Some("TrafficManagerSample".to_string()),
            ..Default::default()
        };
        let out = format_resource_group(&group);
        assert!(!out.contains("Properties:"), "got: {out}");
    }

    #[test]
    fn test_format_profile_zero_endpoints() {
        let profile = Profile {
            name: Some("traffic-manager-sample".to_string()),
            location: Some("global".to_string()),
            properties: Some(ProfileProperties {
                profile_status: Some("Enabled".to_string()),
                traffic_routing_method: Some("Performance".to_string()),
                endpoints: Some(vec![]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = format_profile(&profile);
        assert!(out.contains("\tProfileStatus: Enabled\n"), "got: {out}");
        assert!(out.contains("\tTrafficRoutingMethod: Performance\n"), "got: {out}");
        // Header present, nothing after it
        assert!(out.ends_with("\t\tEndpoints:\n"), "got: {out}");
    }

    #[test]
    fn test_format_profile_with_endpoint() {
        let profile = Profile {
            name: Some("traffic-manager-sample".to_string()),
            properties: Some(ProfileProperties {
                endpoints: Some(vec![Endpoint {
                    name: Some("ep1".to_string()),
                    properties: Some(EndpointProperties {
                        target: Some("app1.example.com".to_string()),
                        endpoint_status: Some("Enabled".to_string()),
                        weight: Some(10),
                        priority: Some(1),
                        endpoint_location: Some("West US".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = format_profile(&profile);
        assert!(out.contains("\tTarget: app1.example.com\n"), "got: {out}");
        assert!(out.contains("\tWeight: 10\n"), "got: {out}");
        assert!(out.contains("\tPriority: 1\n"), "got: {out}");
        assert!(out.contains("\tEndpointLocation: West US\n"), "got: {out}");
    }

    #[test]
    fn test_format_tags_sorted() {
        let mut tags = BTreeMap::new();
        tags.insert("env".to_string(), "demo".to_string());
        tags.insert("app".to_string(), "sample".to_string());
        assert_eq!(format_tags(&Some(tags)), "app=sample, env=demo");
        assert_eq!(format_tags(&None), "");
    }
}
