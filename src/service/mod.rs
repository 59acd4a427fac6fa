//! Typed service facade for the cluster-manager API
//!
//! [`ClusterManager`] maps API methods onto the HTTP transport: resource
//! paths, query parameters, request bodies, and typed responses. The one
//! paginated method returns a [`Pager`](crate::pager::Pager) wired to a
//! fetcher that re-issues the list call with successive page tokens.

mod cluster_manager;
pub mod paths;

pub use cluster_manager::{ClusterManager, ListUsableSubnetworksFetcher};
