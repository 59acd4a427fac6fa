//! Cluster resource and listing messages

use super::node_pool::NodePool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Google Kubernetes Engine cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cluster {
    /// Cluster name, unique within the project and location
    pub name: String,

    /// Optional human-readable description
    pub description: String,

    /// Number of nodes created alongside the cluster when no explicit
    /// node pool is given
    pub initial_node_count: i32,

    /// Logging service in use, e.g. `logging.googleapis.com/kubernetes`
    pub logging_service: String,

    /// Monitoring service in use
    pub monitoring_service: String,

    /// Network the cluster is connected to
    pub network: String,

    /// Subnetwork the cluster is connected to
    pub subnetwork: String,

    /// Node pools attached to this cluster
    pub node_pools: Vec<NodePool>,

    /// Zones the cluster's nodes run in
    pub locations: Vec<String>,

    /// Compute Engine location of the cluster (zone or region)
    pub location: String,

    /// IP of the master endpoint
    pub endpoint: String,

    /// Version of the master
    pub current_master_version: String,

    /// Number of nodes currently serving
    pub current_node_count: i32,

    /// Current lifecycle state
    pub status: ClusterStatus,

    /// Additional status detail, if any
    pub status_message: String,

    /// Server-assigned full resource path,
    /// `projects/*/locations/*/clusters/*`
    pub self_link: String,

    /// Creation timestamp
    pub create_time: Option<DateTime<Utc>>,

    /// Expiration timestamp for alpha clusters
    pub expire_time: Option<DateTime<Utc>>,
}

/// Lifecycle state of a cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    #[default]
    StatusUnspecified,
    /// Being created
    Provisioning,
    /// Fully usable
    Running,
    /// Undergoing a configuration change
    Reconciling,
    /// Being deleted
    Stopping,
    /// Broken; details in `status_message`
    Error,
    /// Partially usable; details in `status_message`
    Degraded,
}

/// Result of listing clusters in a project and location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListClustersResponse {
    /// Clusters in the requested scope
    pub clusters: Vec<Cluster>,

    /// Zones that could not be reached; their clusters are missing from
    /// the result
    pub missing_zones: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_deserializes() {
        let cluster: Cluster = serde_json::from_value(json!({
            "name": "prod-us",
            "location": "us-central1",
            "initialNodeCount": 3,
            "currentMasterVersion": "1.27.3-gke.100",
            "status": "RUNNING",
            "createTime": "2023-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(cluster.name, "prod-us");
        assert_eq!(cluster.initial_node_count, 3);
        assert_eq!(cluster.status, ClusterStatus::Running);
        assert!(cluster.create_time.is_some());
        assert!(cluster.node_pools.is_empty());
    }

    #[test]
    fn test_list_clusters_response_defaults() {
        let response: ListClustersResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.clusters.is_empty());
        assert!(response.missing_zones.is_empty());
    }
}
