//! `nextToken` continuation for listing operations

use super::FraudDetectorClient;
use crate::error::{Result, SdkError};
use crate::operation::{Paginated, PaginatedOperation};
use crate::transport::Transport;

/// Page-by-page cursor over a listing operation
///
/// Each page's `nextToken` is passed back verbatim on the following
/// request. The cursor is exhausted once a page arrives without one.
pub struct Paginator<'a, T: Transport, O: PaginatedOperation> {
    client: &'a FraudDetectorClient<T>,
    request: Option<O>,
    pages: usize,
}

impl<'a, T, O> Paginator<'a, T, O>
where
    T: Transport,
    O: PaginatedOperation,
    O::Output: Paginated,
{
    pub(crate) fn new(client: &'a FraudDetectorClient<T>, request: O) -> Self {
        Self {
            client,
            request: Some(request),
            pages: 0,
        }
    }

    /// Pages fetched so far
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Fetch the next page, or `None` once the listing is exhausted
    ///
    /// A failed fetch leaves the cursor where it was, so calling again
    /// retries the same page.
    pub async fn next_page(&mut self) -> Result<Option<O::Output>> {
        let Some(request) = self.request.as_ref() else {
            return Ok(None);
        };

        let page = self.client.send(request).await?;
        self.pages += 1;

        let next_token = page.next_token().map(str::to_owned);
        tracing::debug!(
            operation = O::NAME,
            page = self.pages,
            "Fetched page, more: {}",
            next_token.is_some()
        );
        self.request = next_token.map(|token| request.with_next_token(token));
        Ok(Some(page))
    }
}

impl<T: Transport> FraudDetectorClient<T> {
    /// Iterate a listing page by page
    pub fn paginate<O>(&self, request: O) -> Paginator<'_, T, O>
    where
        O: PaginatedOperation,
        O::Output: Paginated,
    {
        Paginator::new(self, request)
    }

    /// Fetch every page of a listing and concatenate the items
    ///
    /// Stops with [`SdkError::PageLimitExceeded`] if the listing is still
    /// going after `max_pages` pages.
    pub async fn collect_pages<O>(
        &self,
        request: O,
    ) -> Result<Vec<<O::Output as Paginated>::Item>>
    where
        O: PaginatedOperation,
        O::Output: Paginated,
    {
        let max_pages = self.config().max_pages;
        let mut paginator = self.paginate(request);
        let mut items = Vec::new();

        while let Some(page) = paginator.next_page().await? {
            items.extend(page.into_items());
            if paginator.request.is_some() && paginator.pages() >= max_pages {
                tracing::warn!(
                    operation = O::NAME,
                    "Listing still has pages after {} pages",
                    max_pages
                );
                return Err(SdkError::PageLimitExceeded {
                    operation: O::NAME,
                    pages: max_pages,
                });
            }
        }

        Ok(items)
    }
}
