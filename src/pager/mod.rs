//! Server-side pagination
//!
//! # Overview
//!
//! List endpoints on the cluster-manager API return results one page at a
//! time, each page carrying an opaque `nextPageToken` cursor. This module
//! provides the client-side half of that protocol: a [`Pager`] that walks
//! the token chain on demand and exposes the results page-at-a-time or
//! item-at-a-time, without ever re-fetching or skipping a page.
//!
//! The pager is generic over a [`PageFetcher`], the capability to perform
//! one round-trip for a given list method. Wire concerns (serialization,
//! auth, timeouts, retry policy) belong to the fetcher; the pager only
//! tracks cursor state.

mod cursor;
mod types;

pub use cursor::{ItemOf, Pager};
pub use types::{PageFetcher, PageState, PageableRequest, PageableResponse};
