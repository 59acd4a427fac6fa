//! Resource name construction
//!
//! The API addresses everything by hierarchical resource name
//! (`projects/*/locations/*/clusters/*`). These helpers build well-formed
//! names so callers don't format paths by hand.

use crate::error::{Error, Result};

/// Project name: `projects/{project}`
pub fn project(project: &str) -> String {
    format!("projects/{project}")
}

/// Check that a name is rooted in a project (`projects/...`) before it
/// is spliced into a request URL.
pub fn ensure_project_scoped(name: &str) -> Result<()> {
    match name.strip_prefix("projects/") {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        _ => Err(Error::invalid_name(name, "projects/*")),
    }
}

/// Location name: `projects/{project}/locations/{location}`.
///
/// Location `-` matches all zones and regions in list calls.
pub fn location(project: &str, location: &str) -> String {
    format!("projects/{project}/locations/{location}")
}

/// Cluster name: `projects/{project}/locations/{location}/clusters/{cluster}`
pub fn cluster(project: &str, location: &str, cluster: &str) -> String {
    format!("projects/{project}/locations/{location}/clusters/{cluster}")
}

/// Node pool name:
/// `projects/{project}/locations/{location}/clusters/{cluster}/nodePools/{node_pool}`
pub fn node_pool(project: &str, location: &str, cluster: &str, node_pool: &str) -> String {
    format!("projects/{project}/locations/{location}/clusters/{cluster}/nodePools/{node_pool}")
}

/// Operation name:
/// `projects/{project}/locations/{location}/operations/{operation}`
pub fn operation(project: &str, location: &str, operation: &str) -> String {
    format!("projects/{project}/locations/{location}/operations/{operation}")
}
