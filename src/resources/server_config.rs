//! Per-location server configuration

use serde::{Deserialize, Serialize};

/// Kubernetes versions and channels available in a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Version new clusters default to
    pub default_cluster_version: String,

    /// Node versions currently valid for new node pools
    pub valid_node_versions: Vec<String>,

    /// Node image new node pools default to
    pub default_image_type: String,

    /// Node images currently valid
    pub valid_image_types: Vec<String>,

    /// Master versions currently valid
    pub valid_master_versions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_config_deserializes() {
        let config: ServerConfig = serde_json::from_value(json!({
            "defaultClusterVersion": "1.27.3-gke.100",
            "validNodeVersions": ["1.27.3-gke.100", "1.26.5-gke.1200"],
            "defaultImageType": "COS_CONTAINERD"
        }))
        .unwrap();

        assert_eq!(config.default_cluster_version, "1.27.3-gke.100");
        assert_eq!(config.valid_node_versions.len(), 2);
        assert!(config.valid_master_versions.is_empty());
    }
}
