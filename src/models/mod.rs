//! ARM wire-format models.
//!
//! Request and response value objects for the resource and Traffic Manager
//! management APIs:
//! - [`resource_group`] - resource groups and provider registration
//! - [`profile`] - Traffic Manager profiles, DNS/monitor config, endpoints

mod profile;
mod resource_group;

// Re-export public types
pub use profile::{
    DnsConfig, Endpoint, EndpointProperties, MonitorConfig, Profile, ProfileListResult,
    ProfileProperties,
};
pub use resource_group::{Provider, ResourceGroup, ResourceGroupParams, ResourceGroupProperties};
