//! Azure management-plane access.
//!
//! This module handles all remote Azure operations:
//! - [`auth`] - service principal token acquisition
//! - [`arm`] - REST transport for the Azure Resource Manager endpoint
//! - [`resources`] - resource group and provider registration client
//! - [`traffic`] - Traffic Manager profile client

mod arm;
mod auth;
mod resources;
mod traffic;

// Re-export public types and functions
pub use arm::ArmClient;
pub use auth::{AccessToken, Credential};
pub use resources::ResourceGroupClient;
pub use traffic::TrafficManagerClient;
