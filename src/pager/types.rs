//! Paging traits and shared types
//!
//! Defines the contracts between the pager and the request/response
//! records it drives, and the fetcher that performs the round-trips.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A list-style request that can carry a page token.
///
/// The pager clones the caller's request once at construction and only
/// ever mutates the clone, so a request handed to a pager is never
/// observed to change.
pub trait PageableRequest: Clone + Send + Sync {
    /// Set the page token for the next fetch
    fn set_page_token(&mut self, token: String);

    /// The currently set page token (empty means "first page")
    fn page_token(&self) -> &str;
}

/// A list-style response: one page of results plus a continuation token.
pub trait PageableResponse: Send {
    /// The record type held in the page's repeated field
    type Item: Clone + Send;

    /// The continuation token; empty means this is the last page
    fn next_page_token(&self) -> &str;

    /// The page's results, in server order
    fn items(&self) -> &[Self::Item];
}

/// The capability to perform one round-trip for a list method.
///
/// Implementations own every wire-level concern: serialization, transport
/// security, credential attachment, per-call timeout, and retry policy.
/// The pager calls `fetch_page` at most once per page and never retries a
/// failed fetch itself.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// The request record for this list method
    type Request: PageableRequest;

    /// The response record for this list method
    type Response: PageableResponse;

    /// Perform one list call with the given request
    async fn fetch_page(&self, request: &Self::Request) -> Result<Self::Response>;
}

// A fetcher handle is commonly shared between the call site that fetches
// the first page and the pager that fetches the rest.
#[async_trait]
impl<F: PageFetcher> PageFetcher for Arc<F> {
    type Request = F::Request;
    type Response = F::Response;

    async fn fetch_page(&self, request: &Self::Request) -> Result<Self::Response> {
        (**self).fetch_page(request).await
    }
}

/// Paging position of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// The latest page carries a continuation token; more fetches may occur
    HasMore,
    /// The latest page's token was empty. Terminal: no further fetch will
    /// ever be issued by this cursor.
    Exhausted,
}

impl PageState {
    /// Check if more pages can be fetched
    pub fn has_more(&self) -> bool {
        matches!(self, Self::HasMore)
    }

    /// Check if the cursor is exhausted
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
