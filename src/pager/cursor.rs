//! The paging cursor
//!
//! Wraps a single list call and its already-fetched first page, and walks
//! the `nextPageToken` chain on demand.

use super::types::{PageFetcher, PageState, PageableRequest, PageableResponse};
use crate::error::Result;
use futures::stream::{self, Stream};
use tracing::debug;

/// Item type produced by a fetcher's response pages
pub type ItemOf<F> = <<F as PageFetcher>::Response as PageableResponse>::Item;

/// A forward-only cursor over a paginated list result.
///
/// A `Pager` is created with the first page already in hand: the call site
/// issues the list call once, then wraps the response ("request now,
/// paginate later"). Construction performs no I/O. Later pages are fetched
/// lazily, one at a time, only when the consumer pulls past the current
/// page. There is no prefetching, so dropping the pager mid-traversal is
/// sufficient cancellation.
///
/// The pager keeps a private clone of the request and only mutates the
/// clone's page token between fetches; the caller's request is never
/// touched. Exactly one page is held in memory at a time.
///
/// A fetch error is returned verbatim at the page boundary where it
/// occurred. Items already yielded stay valid, nothing is buffered across
/// the failure, and the pager does not retry; retry policy belongs to
/// the fetcher.
///
/// A pager is not restartable: once the token chain has been walked to
/// its end, every further call yields nothing. A fresh traversal requires
/// a new pager built from a fresh first page.
pub struct Pager<F: PageFetcher> {
    /// The round-trip capability, shared with the original call site
    fetcher: F,
    /// Working clone of the caller's request; its page token is rewritten
    /// before every fetch
    request: F::Request,
    /// Most recently fetched page
    current: F::Response,
    /// Whether the initial page has been handed to the consumer yet
    started: bool,
    /// Read position within the current page's items
    item_index: usize,
}

impl<F: PageFetcher> Pager<F> {
    /// Create a pager from a fetcher, the original request, and the
    /// response of the first call made with that request.
    pub fn new(fetcher: F, request: &F::Request, initial_response: F::Response) -> Self {
        Self {
            fetcher,
            request: request.clone(),
            current: initial_response,
            started: false,
            item_index: 0,
        }
    }

    /// The most recently fetched page.
    ///
    /// Before the first [`next_page`](Self::next_page) call this is the
    /// initial response; afterwards it tracks the traversal. Useful for
    /// reading page-level metadata without disturbing iteration.
    pub fn latest_page(&self) -> &F::Response {
        &self.current
    }

    /// Paging position, derived from the latest page's token.
    ///
    /// [`PageState::Exhausted`] is terminal: the fetcher will never be
    /// invoked again. Note this reflects whether further *fetches* can
    /// occur, not whether the initial page has been consumed yet.
    pub fn state(&self) -> PageState {
        if self.current.next_page_token().is_empty() {
            PageState::Exhausted
        } else {
            PageState::HasMore
        }
    }

    /// Check if more pages can be fetched
    pub fn has_more(&self) -> bool {
        self.state().has_more()
    }

    /// Advance to the next page and return a reference to it.
    ///
    /// The first call yields the initial page without any I/O. Each later
    /// call copies the current page's `nextPageToken` into the working
    /// request and performs one fetch. Returns `Ok(None)` once the token
    /// chain ends; from then on every call returns `Ok(None)`.
    pub async fn next_page(&mut self) -> Result<Option<&F::Response>> {
        if !self.started {
            self.started = true;
            self.item_index = 0;
            return Ok(Some(&self.current));
        }

        let token = self.current.next_page_token().to_string();
        if token.is_empty() {
            return Ok(None);
        }

        debug!(page_token = %token, "fetching next page");
        self.request.set_page_token(token);
        self.current = self.fetcher.fetch_page(&self.request).await?;
        self.item_index = 0;
        Ok(Some(&self.current))
    }

    /// Yield the next individual item, fetching pages as needed.
    ///
    /// Items appear in exactly the order the server returned them: the
    /// concatenation of page item lists, no reordering or deduplication.
    /// A page with zero items but a non-empty token does not end the
    /// sequence; only an empty token does.
    pub async fn next_item(&mut self) -> Result<Option<ItemOf<F>>> {
        loop {
            if self.started {
                if let Some(item) = self.current.items().get(self.item_index) {
                    let item = item.clone();
                    self.item_index += 1;
                    return Ok(Some(item));
                }
            }
            if self.next_page().await?.is_none() {
                return Ok(None);
            }
        }
    }

    /// Drain the remaining items into a vector.
    pub async fn all_items(&mut self) -> Result<Vec<ItemOf<F>>> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Consume the pager into a lazy stream of pages.
    pub fn into_pages(self) -> impl Stream<Item = Result<F::Response>>
    where
        F::Response: Clone,
    {
        stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?.cloned();
            Ok(page.map(|p| (p, pager)))
        })
    }

    /// Consume the pager into a lazy stream of individual items.
    pub fn into_items(self) -> impl Stream<Item = Result<ItemOf<F>>> {
        stream::try_unfold(self, |mut pager| async move {
            let item = pager.next_item().await?;
            Ok(item.map(|i| (i, pager)))
        })
    }
}

impl<F: PageFetcher> std::fmt::Debug for Pager<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("state", &self.state())
            .field("started", &self.started)
            .field("item_index", &self.item_index)
            .finish_non_exhaustive()
    }
}
