//! Console presentation of ARM response objects.
//!
//! - [`terminal`] - indented key/value formatting for resource groups,
//!   profiles and endpoints

mod terminal;

// Re-export public functions
pub use terminal::{format_profile, format_resource_group, print_profile, print_resource_group};
