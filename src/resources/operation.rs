//! Long-running operations
//!
//! Mutations on this API (create, delete, update) return an `Operation`
//! that the caller polls until it reaches `Done`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-side operation tracking an in-flight mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    /// Server-assigned operation ID
    pub name: String,

    /// Zone the operation runs in (zonal operations only)
    pub zone: String,

    /// What kind of mutation this operation tracks
    pub operation_type: OperationType,

    /// Current state
    pub status: OperationStatus,

    /// Human-readable operation detail
    pub detail: String,

    /// Error detail if the operation failed
    pub status_message: String,

    /// Server-assigned full resource path for the operation
    pub self_link: String,

    /// Full resource path of the resource being mutated
    pub target_link: String,

    /// When the operation started
    pub start_time: Option<DateTime<Utc>>,

    /// When the operation completed
    pub end_time: Option<DateTime<Utc>>,
}

impl Operation {
    /// Check whether the operation has finished (successfully or not)
    pub fn is_done(&self) -> bool {
        matches!(self.status, OperationStatus::Done)
    }
}

/// State of an operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    #[default]
    StatusUnspecified,
    Pending,
    Running,
    Done,
    Aborting,
}

/// Kind of mutation an operation tracks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    #[default]
    TypeUnspecified,
    CreateCluster,
    DeleteCluster,
    UpgradeMaster,
    UpgradeNodes,
    RepairCluster,
    UpdateCluster,
    CreateNodePool,
    DeleteNodePool,
    SetNodePoolManagement,
    AutoRepairNodes,
    AutoUpgradeNodes,
    SetLabels,
    SetMasterAuth,
    SetNodePoolSize,
    SetNetworkPolicy,
    SetMaintenancePolicy,
}

/// Result of listing operations in a project and location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOperationsResponse {
    /// Operations in the requested scope
    pub operations: Vec<Operation>,

    /// Zones that could not be reached
    pub missing_zones: Vec<String>,
}
