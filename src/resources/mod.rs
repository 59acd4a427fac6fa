//! Typed records for the cluster-manager API
//!
//! Mirrors the v1 REST resource and message shapes. All fields use the
//! API's camelCase JSON names and default when absent, matching the
//! server's habit of omitting empty fields.

mod cluster;
mod node_pool;
mod operation;
mod server_config;
mod subnetwork;

pub use cluster::{Cluster, ClusterStatus, ListClustersResponse};
pub use node_pool::{ListNodePoolsResponse, NodePool, NodePoolStatus};
pub use operation::{ListOperationsResponse, Operation, OperationStatus, OperationType};
pub use server_config::ServerConfig;
pub use subnetwork::{
    ListUsableSubnetworksRequest, ListUsableSubnetworksResponse, SecondaryRangeStatus,
    UsableSubnetwork, UsableSubnetworkSecondaryRange,
};
