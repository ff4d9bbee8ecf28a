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

#[cfg(test)]
mod test {
    use futures::TryStreamExt;
    use gax::error::Error;
    use gax::paginator::{PageableResponse, Paginator};
    use google_cloud_dlp_gax as gax;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, Default)]
    struct ListTemplatesRequest {
        parent: String,
        page_token: String,
    }

    #[derive(Clone, Debug)]
    struct ListTemplatesResponse {
        templates: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for ListTemplatesResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.templates
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    #[derive(Clone)]
    struct FakeService {
        pages: Arc<Mutex<VecDeque<ListTemplatesResponse>>>,
        requests: Arc<Mutex<Vec<ListTemplatesRequest>>>,
    }

    impl FakeService {
        fn new() -> Self {
            let page = |n: usize, token: &str| ListTemplatesResponse {
                templates: (0..n).map(|i| format!("{token}-{i}")).collect(),
                next_page_token: token.to_string(),
            };
            let pages = VecDeque::from([page(3, "abc"), page(0, "def"), page(1, "ghi"), page(2, "")]);
            Self {
                pages: Arc::new(Mutex::new(pages)),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn list(&self, req: ListTemplatesRequest) -> gax::Result<ListTemplatesResponse> {
            self.requests.lock().unwrap().push(req);
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::invalid_argument("no more pages"))
        }

        fn paginator(
            &self,
            req: ListTemplatesRequest,
        ) -> Paginator<ListTemplatesResponse, Error> {
            let service = self.clone();
            let token = req.page_token.clone();
            let metadata = gax::routing::with_routing_header(&[("parent", &req.parent)], &[]);
            let execute = move |token: String| {
                let mut req = req.clone();
                let service = service.clone();
                req.page_token = token;
                async move { service.list(req).await }
            };
            Paginator::new(token, metadata, execute)
        }
    }

    #[tokio::test]
    async fn pages_and_tokens() -> anyhow::Result<()> {
        let service = FakeService::new();
        let pages = service
            .paginator(ListTemplatesRequest::default())
            .try_collect::<Vec<_>>()
            .await?;
        let tokens = pages
            .iter()
            .map(|p| p.next_page_token.as_str())
            .collect::<Vec<_>>();
        assert_eq!(tokens, vec!["abc", "def", "ghi", ""]);
        let requested = service
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.page_token.clone())
            .collect::<Vec<_>>();
        assert_eq!(requested, vec!["", "abc", "def", "ghi"]);
        Ok(())
    }

    #[tokio::test]
    async fn items() -> anyhow::Result<()> {
        let service = FakeService::new();
        let items = service
            .paginator(ListTemplatesRequest::default())
            .items()
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(items, vec!["abc-0", "abc-1", "abc-2", "ghi-0", "-0", "-1"]);
        Ok(())
    }

    #[tokio::test]
    async fn routing_header_with_empty_parent() {
        let service = FakeService::new();
        let paginator = service.paginator(ListTemplatesRequest::default());
        assert_eq!(
            paginator.metadata(),
            &[("x-goog-request-params".to_string(), "parent=".to_string())]
        );
    }
}
