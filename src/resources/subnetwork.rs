//! Usable subnetworks and their paginated listing messages
//!
//! `ListUsableSubnetworks` is the one paginated method on this API; its
//! request/response pair implements the paging traits so it can be driven
//! by a [`Pager`](crate::pager::Pager).

use crate::pager::{PageableRequest, PageableResponse};
use serde::{Deserialize, Serialize};

/// A subnetwork that can host new clusters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsableSubnetwork {
    /// Subnetwork resource name, `projects/*/regions/*/subnetworks/*`
    pub subnetwork: String,

    /// Network resource name the subnetwork belongs to
    pub network: String,

    /// Primary IP range of the subnetwork
    pub ip_cidr_range: String,

    /// Secondary IP ranges usable for pods and services
    pub secondary_ip_ranges: Vec<UsableSubnetworkSecondaryRange>,

    /// Why some secondary ranges are missing, when the caller lacks
    /// permission to see them all
    pub status_message: String,
}

/// A secondary IP range of a usable subnetwork
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsableSubnetworkSecondaryRange {
    /// Name of the secondary range
    pub range_name: String,

    /// The range of IP addresses, in CIDR notation
    pub ip_cidr_range: String,

    /// Current usage of the range
    pub status: SecondaryRangeStatus,
}

/// Usage status of a secondary range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecondaryRangeStatus {
    #[default]
    Unknown,
    /// Free to use for either pods or services
    Unused,
    /// In use by a service range
    InUseService,
    /// In use as a pod range sharable with other clusters
    InUseShareablePod,
    /// In use as a pod range managed by a single cluster
    InUseManagedPod,
}

/// Request for the paginated usable-subnetworks listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUsableSubnetworksRequest {
    /// Parent project, `projects/*`
    pub parent: String,

    /// Filter expression, e.g. `networkProjectId=my-shared-vpc-project`
    pub filter: String,

    /// Maximum results per page; the server may return fewer. Zero lets
    /// the server pick.
    pub page_size: i32,

    /// Continuation token from a previous response; empty requests the
    /// first page
    pub page_token: String,
}

impl ListUsableSubnetworksRequest {
    /// Create a request scoped to a parent project
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Set the filter expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl PageableRequest for ListUsableSubnetworksRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }

    fn page_token(&self) -> &str {
        &self.page_token
    }
}

/// One page of usable subnetworks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListUsableSubnetworksResponse {
    /// Subnetworks in this page, in server order
    pub subnetworks: Vec<UsableSubnetwork>,

    /// Token for the next page; empty means this was the last one
    pub next_page_token: String,
}

impl PageableResponse for ListUsableSubnetworksResponse {
    type Item = UsableSubnetwork;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn items(&self) -> &[UsableSubnetwork] {
        &self.subnetworks
    }
}
