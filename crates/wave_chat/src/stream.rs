use async_stream::try_stream;
use futures::Stream;
use tracing::trace;

use crate::{client::ChatClient, error::Result, page::Collection, params::ListParams};

/// Lazily enumerates a collection across all pages the server returns.
///
/// Every item of a page is yielded, in server order, before the next page
/// is requested, so at most one page is buffered and a consumer that stops
/// drawing items causes no further network activity. The caller's filter is
/// owned by the stream and never mutated; the cursor threading pages
/// together lives in a generator-local variable, seeded from
/// `params.cursor` when resuming.
///
/// The stream is single-pass and forward-only: it terminates cleanly when a
/// page carries no `next` link, and an empty page that does carry one still
/// advances. How many pages the server produces is entirely up to the
/// server; no client-side bound is applied.
pub(crate) fn paginate<T: Collection>(
    client: ChatClient,
    path: String,
    mut params: ListParams,
) -> impl Stream<Item = Result<T>> {
    let mut cursor = params.cursor.take();
    let base_query = params.to_query();

    try_stream! {
        loop {
            let mut query = base_query.clone();
            if let Some(cursor) = &cursor {
                query.push(("cursor".to_owned(), cursor.clone()));
            }

            let page = client.fetch_page::<T>(&path, &query).await?;
            let next = page.links.next_cursor();

            for item in page.items {
                yield item;
            }

            match next {
                Some(next) => {
                    trace!(%path, "advancing to next page");
                    cursor = Some(next);
                }
                None => break,
            }
        }
    }
}
