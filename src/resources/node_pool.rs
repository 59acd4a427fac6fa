//! Node pool resource and listing messages

use serde::{Deserialize, Serialize};

/// A group of nodes within a cluster sharing the same configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePool {
    /// Node pool name
    pub name: String,

    /// Initial node count for the pool
    pub initial_node_count: i32,

    /// Kubernetes version running on the nodes
    pub version: String,

    /// Instance group URLs backing this pool
    pub instance_group_urls: Vec<String>,

    /// Current lifecycle state
    pub status: NodePoolStatus,

    /// Additional status detail, if any
    pub status_message: String,

    /// Server-assigned full resource path
    pub self_link: String,
}

/// Lifecycle state of a node pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodePoolStatus {
    #[default]
    StatusUnspecified,
    Provisioning,
    Running,
    /// Usable, but some nodes failed to create
    RunningWithError,
    Reconciling,
    Stopping,
    Error,
}

/// Result of listing the node pools of a cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListNodePoolsResponse {
    /// Node pools in the requested cluster
    pub node_pools: Vec<NodePool>,
}
