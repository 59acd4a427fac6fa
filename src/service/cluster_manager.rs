//! The cluster-manager service client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pager::{PageFetcher, Pager};
use crate::resources::{
    Cluster, ListClustersResponse, ListNodePoolsResponse, ListOperationsResponse,
    ListUsableSubnetworksRequest, ListUsableSubnetworksResponse, Operation, ServerConfig,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Client for Google Kubernetes Engine's cluster-management API.
///
/// One instance is cheap to clone-by-`Arc` internally and is safe to
/// share across tasks; each method performs one API call (the paginated
/// listing returns a pager that performs more on demand).
///
/// ```rust,ignore
/// use gke_cluster_manager::{ClientConfig, ClusterManager, Credentials};
///
/// let config = ClientConfig::new(Credentials::from_env_var("GKE_ACCESS_TOKEN"));
/// let client = ClusterManager::new(config)?;
///
/// let clusters = client.list_clusters("projects/p1/locations/-").await?;
/// for cluster in clusters.clusters {
///     println!("{} ({:?})", cluster.name, cluster.status);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClusterManager {
    http: Arc<HttpClient>,
}

impl ClusterManager {
    /// Create a client from configuration.
    ///
    /// Credentials are resolved once, here; a token rotation requires a
    /// new client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let token = config.credentials.resolve()?;
        let http = HttpClient::with_token(config.http_client_config(), token);
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Lists all clusters owned by a project across the given location
    /// (`projects/*/locations/*`, location `-` for all).
    pub async fn list_clusters(&self, parent: &str) -> Result<ListClustersResponse> {
        self.http.get_json(&format!("v1/{parent}/clusters")).await
    }

    /// Gets the details of a specific cluster
    /// (`projects/*/locations/*/clusters/*`).
    pub async fn get_cluster(&self, name: &str) -> Result<Cluster> {
        self.http.get_json(&format!("v1/{name}")).await
    }

    /// Creates a cluster in the given location. Returns the long-running
    /// operation tracking the creation.
    pub async fn create_cluster(&self, parent: &str, cluster: Cluster) -> Result<Operation> {
        self.http
            .post_json(
                &format!("v1/{parent}/clusters"),
                &json!({ "cluster": cluster }),
            )
            .await
    }

    /// Deletes a cluster, firewalls and routes included. Returns the
    /// long-running operation tracking the deletion.
    pub async fn delete_cluster(&self, name: &str) -> Result<Operation> {
        self.http.delete_json(&format!("v1/{name}")).await
    }

    /// Lists the node pools of a cluster
    /// (`projects/*/locations/*/clusters/*`).
    pub async fn list_node_pools(&self, parent: &str) -> Result<ListNodePoolsResponse> {
        self.http.get_json(&format!("v1/{parent}/nodePools")).await
    }

    /// Lists operations in a project and location
    /// (`projects/*/locations/*`, location `-` for all).
    pub async fn list_operations(&self, parent: &str) -> Result<ListOperationsResponse> {
        self.http.get_json(&format!("v1/{parent}/operations")).await
    }

    /// Gets a single operation (`projects/*/locations/*/operations/*`).
    pub async fn get_operation(&self, name: &str) -> Result<Operation> {
        self.http.get_json(&format!("v1/{name}")).await
    }

    /// Cancels a running operation. The server may take a while to act on
    /// the cancellation; poll [`get_operation`](Self::get_operation) to
    /// observe it.
    pub async fn cancel_operation(&self, name: &str) -> Result<()> {
        self.http
            .post(&format!("v1/{name}:cancel"), json!({}))
            .await?;
        Ok(())
    }

    /// Returns the Kubernetes versions and images available in a location
    /// (`projects/*/locations/*`).
    pub async fn get_server_config(&self, name: &str) -> Result<ServerConfig> {
        self.http
            .get_json(&format!("v1/{name}/serverConfig"))
            .await
    }

    /// Lists subnetworks usable for creating clusters in a project
    /// (`projects/*`).
    ///
    /// The first page is fetched before this returns; the pager fetches
    /// the rest on demand as it is consumed. The request passed in is
    /// left untouched.
    pub async fn list_usable_subnetworks(
        &self,
        request: ListUsableSubnetworksRequest,
    ) -> Result<Pager<ListUsableSubnetworksFetcher>> {
        super::paths::ensure_project_scoped(&request.parent)?;
        let fetcher = ListUsableSubnetworksFetcher {
            http: Arc::clone(&self.http),
        };
        let initial = fetcher.fetch_page(&request).await?;
        debug!(
            parent = %request.parent,
            first_page_len = initial.subnetworks.len(),
            "starting usable-subnetworks listing"
        );
        Ok(Pager::new(fetcher, &request, initial))
    }
}

/// Performs the round-trips for the usable-subnetworks listing.
///
/// Shares the service client's transport; each call maps the request onto
/// `GET v1/{parent}/aggregated/usableSubnetworks` with `filter`,
/// `pageSize` and `pageToken` query parameters.
#[derive(Debug, Clone)]
pub struct ListUsableSubnetworksFetcher {
    http: Arc<HttpClient>,
}

#[async_trait]
impl PageFetcher for ListUsableSubnetworksFetcher {
    type Request = ListUsableSubnetworksRequest;
    type Response = ListUsableSubnetworksResponse;

    async fn fetch_page(
        &self,
        request: &ListUsableSubnetworksRequest,
    ) -> Result<ListUsableSubnetworksResponse> {
        let mut config = RequestConfig::new();
        if !request.filter.is_empty() {
            config = config.query("filter", &request.filter);
        }
        if request.page_size > 0 {
            config = config.query("pageSize", request.page_size.to_string());
        }
        if !request.page_token.is_empty() {
            config = config.query("pageToken", &request.page_token);
        }

        self.http
            .get_json_with_config(
                &format!("v1/{}/aggregated/usableSubnetworks", request.parent),
                config,
            )
            .await
    }
}
