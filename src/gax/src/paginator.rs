// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streams over paginated list RPCs.
//!
//! List RPCs return results in pages. Each response carries a
//! `next_page_token`, the request for the next page echoes that token back,
//! and an empty token marks the last page. [Paginator] turns this protocol
//! into a [Stream] of pages, and [ItemPaginator] into a [Stream] of the items
//! in those pages.
//!
//! The [blocking] module offers the same iteration shapes as [Iterator]s.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

pub mod blocking;

/// Describes a type that can be iterated over asynchronously when used with
/// [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response and returns the items in this page.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page, empty for the last page.
    fn next_page_token(&self) -> String;
}

/// A stream of pages from a list RPC.
///
/// The stream fetches pages strictly in sequence: the request for page N+1
/// uses the token returned in page N. The stream ends after the page with an
/// empty `next_page_token`, or after the first error.
///
/// Dropping the stream cancels any in-flight page fetch, and no further pages
/// are requested.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
    metadata: Vec<(String, String)>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    ///
    /// `metadata` are the request headers sent with every page fetch, they
    /// are retained for inspection via [Paginator::metadata].
    pub fn new<F, X>(seed_token: String, metadata: Vec<(String, String)>, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
            metadata,
        }
    }
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// The request headers sent with each page fetch.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// A stream of the items returned by a list RPC.
///
/// Yields the items of each page in order, fetching the next page when the
/// current one is exhausted. Empty pages are skipped.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    pages: Paginator<T, E>,
    current: std::vec::IntoIter<T::PageItem>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: Vec::new().into_iter(),
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// The request headers sent with each page fetch.
    pub fn metadata(&self) -> &[(String, String)] {
        self.pages.metadata()
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(item) = this.current.next() {
                return Poll::Ready(Some(Ok(item)));
            }
            match ready!(this.pages.as_mut().poll_next(cx)) {
                None => return Poll::Ready(None),
                Some(Err(e)) => return Poll::Ready(Some(Err(e))),
                Some(Ok(page)) => *this.current = page.items().into_iter(),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::TryStreamExt;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct TestResponse {
        pub items: Vec<String>,
        pub next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    pub(crate) type TestError = Box<dyn std::error::Error + Send + Sync>;

    // Pages with [3, 0, 1, 2] items, linked by the tokens abc, def, ghi.
    pub(crate) fn four_pages() -> VecDeque<TestResponse> {
        let page = |items: &[&str], token: &str| TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        };
        VecDeque::from([
            page(&["a", "b", "c"], "abc"),
            page(&[], "def"),
            page(&["d"], "ghi"),
            page(&["e", "f"], ""),
        ])
    }

    // Returns a paginator over `responses`, and the tokens it requests.
    pub(crate) fn fake_paginator(
        responses: VecDeque<TestResponse>,
    ) -> (Paginator<TestResponse, TestError>, Arc<Mutex<Vec<String>>>) {
        let responses = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let requested = tokens.clone();
        let execute = move |token: String| {
            tokens.lock().unwrap().push(token);
            let resp = responses.lock().unwrap().pop_front();
            async move { resp.ok_or_else(|| TestError::from("no more responses")) }
        };
        let metadata = vec![(
            "x-goog-request-params".to_string(),
            "parent=".to_string(),
        )];
        (Paginator::new(String::new(), metadata, execute), requested)
    }

    #[tokio::test]
    async fn pages() -> anyhow::Result<()> {
        let (paginator, tokens) = fake_paginator(four_pages());
        let got = paginator
            .map_ok(|p| p.next_page_token)
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        assert_eq!(got, vec!["abc", "def", "ghi", ""]);
        assert_eq!(*tokens.lock().unwrap(), vec!["", "abc", "def", "ghi"]);
        Ok(())
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let (paginator, tokens) = fake_paginator(four_pages());
        let got = paginator
            .items()
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        assert_eq!(got, vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(*tokens.lock().unwrap(), vec!["", "abc", "def", "ghi"]);
        Ok(())
    }

    #[tokio::test]
    async fn metadata_is_preserved() {
        let (paginator, _) = fake_paginator(four_pages());
        let want = vec![("x-goog-request-params".to_string(), "parent=".to_string())];
        assert_eq!(paginator.metadata(), want.as_slice());
        assert_eq!(paginator.items().metadata(), want.as_slice());
    }

    #[tokio::test]
    async fn seed_token() {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let requested = tokens.clone();
        let execute = move |token: String| {
            tokens.lock().unwrap().push(token);
            async move {
                Ok::<_, TestError>(TestResponse {
                    items: vec![],
                    next_page_token: String::new(),
                })
            }
        };
        let mut paginator = Paginator::new("seed".to_string(), vec![], execute);
        while paginator.next().await.is_some() {}
        assert_eq!(*requested.lock().unwrap(), vec!["seed"]);
    }

    #[tokio::test]
    async fn error_stops_the_stream() {
        let mut responses = four_pages();
        responses.truncate(1);
        let (mut paginator, tokens) = fake_paginator(responses);
        assert!(matches!(paginator.next().await, Some(Ok(_))));
        assert!(matches!(paginator.next().await, Some(Err(_))));
        assert!(paginator.next().await.is_none());
        assert_eq!(tokens.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn items_after_error() {
        let mut responses = four_pages();
        responses.truncate(1);
        let (paginator, _) = fake_paginator(responses);
        let mut items = paginator.items();
        let mut got = Vec::new();
        while let Some(Ok(item)) = items.next().await {
            got.push(item);
        }
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn drop_stops_fetching() {
        let (mut paginator, tokens) = fake_paginator(four_pages());
        assert!(matches!(paginator.next().await, Some(Ok(_))));
        drop(paginator);
        assert_eq!(*tokens.lock().unwrap(), vec![""]);
    }

    #[test]
    fn is_send() {
        static_assertions::assert_impl_all!(Paginator<TestResponse, TestError>: Send);
        static_assertions::assert_impl_all!(ItemPaginator<TestResponse, TestError>: Send);
    }
}
