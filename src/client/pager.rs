//! Cursor pager: flattens a cursor-paginated listing into one lazy sequence.
//!
//! Two flavours share the same cursor bookkeeping:
//! - [`CursorPager`] is a blocking [`Iterator`] over a synchronous fetch function
//! - [`paginate`] is a [`Stream`] over an async fetch function
//!
//! Both issue exactly one fetch per page, never prefetch, yield items in
//! server order, and stop for good after the first error.

use std::collections::VecDeque;
use std::future::Future;

use futures::stream::{self, Stream};
use log::debug;

use super::pagination::{Page, PaginationParams};
use crate::error::{ApiError, Error, Result};

/// Where the pager is in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CursorState {
    /// No page fetched yet
    Start,
    /// Next page starts at this cursor
    At(String),
    /// The server handed back the cursor it was just given
    Stalled(String),
    /// Final page consumed, or an error was reported
    Done,
}

/// What to do when the item buffer runs dry.
enum Step {
    Fetch(Option<String>),
    Fail(Error),
    Stop,
}

impl CursorState {
    fn step(&mut self) -> Step {
        match self {
            CursorState::Start => Step::Fetch(None),
            CursorState::At(cursor) => Step::Fetch(Some(cursor.clone())),
            CursorState::Stalled(cursor) => {
                let err = ApiError::InvalidResponse(format!(
                    "pagination cursor '{}' did not advance",
                    cursor
                ));
                *self = CursorState::Done;
                Step::Fail(err.into())
            }
            CursorState::Done => Step::Stop,
        }
    }

    fn advance(&mut self, sent: Option<&str>, next: Option<String>) {
        *self = match next {
            None => CursorState::Done,
            Some(next) if Some(next.as_str()) == sent => CursorState::Stalled(next),
            Some(next) => CursorState::At(next),
        };
    }
}

fn request_for(base: &PaginationParams, cursor: Option<String>) -> PaginationParams {
    PaginationParams {
        cursor,
        ..base.clone()
    }
}

/// Blocking pager over a synchronous page-fetch function.
///
/// # Example
/// ```ignore
/// let pager = CursorPager::new(PaginationParams::new().limit(100), |params| {
///     client.list_targets_blocking(params)
/// });
/// for target in pager {
///     println!("{}", target?.address);
/// }
/// ```
pub struct CursorPager<T, F> {
    fetch: F,
    params: PaginationParams,
    buffer: VecDeque<T>,
    state: CursorState,
}

impl<T, F> CursorPager<T, F>
where
    F: FnMut(PaginationParams) -> Result<Page<T>>,
{
    /// Create a pager. Any cursor already set on `params` is ignored; the
    /// listing always starts from the beginning.
    pub fn new(params: PaginationParams, fetch: F) -> Self {
        Self {
            fetch,
            params,
            buffer: VecDeque::new(),
            state: CursorState::Start,
        }
    }
}

impl<T, F> Iterator for CursorPager<T, F>
where
    F: FnMut(PaginationParams) -> Result<Page<T>>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }

            let cursor = match self.state.step() {
                Step::Fetch(cursor) => cursor,
                Step::Fail(err) => return Some(Err(err)),
                Step::Stop => return None,
            };

            match (self.fetch)(request_for(&self.params, cursor.clone())) {
                Ok(page) => {
                    debug!(
                        "Fetched page at cursor {:?}: {} items, next {:?}",
                        cursor,
                        page.items.len(),
                        page.next_cursor
                    );
                    self.state.advance(cursor.as_deref(), page.next_cursor);
                    self.buffer.extend(page.items);
                }
                Err(err) => {
                    self.state = CursorState::Done;
                    return Some(Err(err));
                }
            }
        }
    }
}

struct StreamState<T, F> {
    fetch: F,
    params: PaginationParams,
    buffer: VecDeque<T>,
    state: CursorState,
}

/// Lazily stream every item of a cursor-paginated listing.
///
/// `fetch` is called with `params` (cursor replaced) once per page, only when
/// the consumer asks for an item past the end of the current page.
///
/// # Example
/// ```ignore
/// let targets = paginate(PaginationParams::new(), |p| client.list_targets(p));
/// let mut targets = std::pin::pin!(targets);
/// while let Some(target) = targets.next().await {
///     println!("{}", target?.address);
/// }
/// ```
pub fn paginate<T, F, Fut>(params: PaginationParams, fetch: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(PaginationParams) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let initial = StreamState {
        fetch,
        params,
        buffer: VecDeque::new(),
        state: CursorState::Start,
    };

    stream::unfold(initial, |mut st| async move {
        loop {
            if let Some(item) = st.buffer.pop_front() {
                return Some((Ok(item), st));
            }

            let cursor = match st.state.step() {
                Step::Fetch(cursor) => cursor,
                Step::Fail(err) => return Some((Err(err), st)),
                Step::Stop => return None,
            };

            match (st.fetch)(request_for(&st.params, cursor.clone())).await {
                Ok(page) => {
                    debug!(
                        "Fetched page at cursor {:?}: {} items, next {:?}",
                        cursor,
                        page.items.len(),
                        page.next_cursor
                    );
                    st.state.advance(cursor.as_deref(), page.next_cursor);
                    st.buffer.extend(page.items);
                }
                Err(err) => {
                    st.state = CursorState::Done;
                    return Some((Err(err), st));
                }
            }
        }
    })
}
