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

//! Blocking iteration over paginated list RPCs.
//!
//! These types drive a [Paginator][super::Paginator] on a Tokio runtime owned
//! by the (blocking) client. They must not be used from within an async
//! context.

use super::{ItemPaginator, PageableResponse, Paginator};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// An [Iterator] over the pages of a list RPC.
pub struct Pages<T, E> {
    runtime: Arc<Runtime>,
    inner: Paginator<T, E>,
}

impl<T, E> Pages<T, E>
where
    T: PageableResponse,
{
    pub fn new(runtime: Arc<Runtime>, inner: Paginator<T, E>) -> Self {
        Self { runtime, inner }
    }

    /// The request headers sent with each page fetch.
    pub fn metadata(&self) -> &[(String, String)] {
        self.inner.metadata()
    }

    /// Converts the iterator over pages into an iterator over items.
    pub fn items(self) -> Items<T, E> {
        Items {
            runtime: self.runtime,
            inner: self.inner.items(),
        }
    }
}

impl<T, E> Iterator for Pages<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.inner.next())
    }
}

/// An [Iterator] over the items of a list RPC.
pub struct Items<T, E>
where
    T: PageableResponse,
{
    runtime: Arc<Runtime>,
    inner: ItemPaginator<T, E>,
}

impl<T, E> Items<T, E>
where
    T: PageableResponse,
{
    /// The request headers sent with each page fetch.
    pub fn metadata(&self) -> &[(String, String)] {
        self.inner.metadata()
    }
}

impl<T, E> Iterator for Items<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.inner.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::tests::{fake_paginator, four_pages};
    use pretty_assertions::assert_eq;

    fn runtime() -> anyhow::Result<Arc<Runtime>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Arc::new(rt))
    }

    #[test]
    fn pages() -> anyhow::Result<()> {
        let (paginator, tokens) = fake_paginator(four_pages());
        let pages = Pages::new(runtime()?, paginator);
        assert_eq!(pages.metadata().len(), 1);
        let got = pages
            .map(|p| p.map(|p| p.next_page_token))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        assert_eq!(got, vec!["abc", "def", "ghi", ""]);
        assert_eq!(*tokens.lock().unwrap(), vec!["", "abc", "def", "ghi"]);
        Ok(())
    }

    #[test]
    fn items() -> anyhow::Result<()> {
        let (paginator, _) = fake_paginator(four_pages());
        let items = Pages::new(runtime()?, paginator).items();
        let got = items
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        assert_eq!(got, vec!["a", "b", "c", "d", "e", "f"]);
        Ok(())
    }

    #[test]
    fn error() -> anyhow::Result<()> {
        let mut responses = four_pages();
        responses.truncate(2);
        let (paginator, _) = fake_paginator(responses);
        let got = Pages::new(runtime()?, paginator).collect::<Vec<_>>();
        assert_eq!(got.len(), 3);
        assert!(got[2].is_err());
        Ok(())
    }
}
