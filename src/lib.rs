//! # GKE Cluster Manager Client
//!
//! A hand-written async Rust client for Google Kubernetes Engine's
//! cluster-management API (`container.googleapis.com/v1`).
//!
//! ## Features
//!
//! - **Typed API surface**: clusters, node pools, operations, server
//!   config, and usable subnetworks as plain serde records
//! - **Transparent pagination**: list results that span server pages are
//!   walked lazily by a [`Pager`], page-at-a-time or item-at-a-time
//! - **Resilient transport**: retries with configurable backoff, 429
//!   Retry-After handling, and client-side quota pacing
//! - **Simple credentials**: attach a pre-resolved access token; no
//!   OAuth2 machinery inside the crate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gke_cluster_manager::resources::ListUsableSubnetworksRequest;
//! use gke_cluster_manager::{ClientConfig, ClusterManager, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> gke_cluster_manager::Result<()> {
//!     let config = ClientConfig::new(Credentials::from_env_var("GKE_ACCESS_TOKEN"));
//!     let client = ClusterManager::new(config)?;
//!
//!     // One call per page behind the scenes; items stream out flat.
//!     let request = ListUsableSubnetworksRequest::new("projects/my-project");
//!     let mut pager = client.list_usable_subnetworks(request).await?;
//!     while let Some(subnet) = pager.next_item().await? {
//!         println!("{} {}", subnet.subnetwork, subnet.ip_cidr_range);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ClusterManager                         │
//! │  list_clusters()  get_cluster()  get_operation()  ...       │
//! │  list_usable_subnetworks() → Pager                          │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴───────┬───────────┬─────────────┐
//! │  Config  │        HTTP           │   Pager   │  Resources  │
//! ├──────────┼───────────────────────┼───────────┼─────────────┤
//! │ YAML/env │ Retry + Backoff       │ Pages     │ Cluster     │
//! │ Creds    │ Quota pacing          │ Items     │ NodePool    │
//! │ Builder  │ Bearer attachment     │ Streams   │ Operation   │
//! └──────────┴───────────────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credential attachment
pub mod auth;

/// Client configuration
pub mod config;

/// HTTP transport with retry and quota pacing
pub mod http;

/// Server-side pagination
pub mod pager;

/// Typed API records
pub mod resources;

/// The service facade
pub mod service;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Credentials;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pager::{PageFetcher, PageState, PageableRequest, PageableResponse, Pager};
pub use service::ClusterManager;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
