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

//! Verify the JSON and protobuf encodings of the message types.

#[cfg(test)]
mod model {
    use google_cloud_privacy_dlp_v2::model::*;
    use pretty_assertions::assert_eq;
    use prost::Message;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    #[test]
    fn inspect_request_json() -> Result {
        let mut config = InspectConfig {
            info_types: vec![InfoType {
                name: "EMAIL_ADDRESS".to_string(),
                ..Default::default()
            }],
            include_quote: true,
            ..Default::default()
        };
        config.set_min_likelihood(Likelihood::Likely);
        let request = InspectContentRequest {
            parent: "projects/p/locations/global".to_string(),
            inspect_config: Some(config),
            item: Some(ContentItem {
                data_item: Some(content_item::DataItem::Value("a@example.com".to_string())),
            }),
            ..Default::default()
        };
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "parent": "projects/p/locations/global",
            "inspectConfig": {
                "infoTypes": [{"name": "EMAIL_ADDRESS"}],
                "minLikelihood": 4,
                "includeQuote": true,
            },
            "item": {"value": "a@example.com"},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn byte_item_json() -> Result {
        let item = ContentItem {
            data_item: Some(content_item::DataItem::ByteItem(ByteContentItem {
                r#type: byte_content_item::BytesType::TextUtf8 as i32,
                data: b"hello".to_vec(),
            })),
        };
        let got = serde_json::to_value(&item)?;
        assert_eq!(got["byteItem"]["data"], json!("aGVsbG8="));
        let back = serde_json::from_value::<ContentItem>(got)?;
        assert_eq!(back, item);
        Ok(())
    }

    #[test]
    fn inspect_response_json() -> Result {
        let input = json!({
            "result": {
                "findings": [{
                    "quote": "a@example.com",
                    "infoType": {"name": "EMAIL_ADDRESS"},
                    "likelihood": 5,
                    "location": {"byteRange": {"start": "4", "end": "17"}},
                    "createTime": "2025-01-02T03:04:05Z",
                    "unknownField": "ignored",
                }],
                "findingsTruncated": true,
            }
        });
        let response = serde_json::from_value::<InspectContentResponse>(input)?;
        let result = response.result.unwrap_or_default();
        assert!(result.findings_truncated);
        assert_eq!(result.findings.len(), 1);
        let finding = &result.findings[0];
        assert_eq!(finding.quote, "a@example.com");
        assert_eq!(finding.likelihood(), Likelihood::VeryLikely);
        let range = finding
            .location
            .as_ref()
            .and_then(|l| l.byte_range.clone())
            .unwrap_or_default();
        assert_eq!((range.start, range.end), (4, 17));
        assert_eq!(
            finding.create_time.as_ref().map(|t| (t.seconds, t.nanos)),
            Some((1735787045, 0))
        );
        Ok(())
    }

    #[test]
    fn empty_json() -> Result {
        let empty = serde_json::from_value::<Empty>(json!({}))?;
        assert_eq!(empty, Empty::default());
        assert_eq!(serde_json::to_value(&empty)?, json!({}));
        Ok(())
    }

    #[test]
    fn oneof_wire_tag() -> Result {
        let item = ContentItem {
            data_item: Some(content_item::DataItem::Value("abc".to_string())),
        };
        // Field 3, length delimited.
        assert_eq!(item.encode_to_vec(), [0x1a, 3, b'a', b'b', b'c']);
        let back = ContentItem::decode([0x1a, 3, b'a', b'b', b'c'].as_slice())?;
        assert_eq!(back, item);
        Ok(())
    }

    #[test]
    fn list_response_pages() {
        use gax::paginator::PageableResponse;
        let response = ListDlpJobsResponse {
            jobs: vec![DlpJob {
                name: "projects/p/dlpJobs/j".to_string(),
                ..Default::default()
            }],
            next_page_token: "next".to_string(),
        };
        assert_eq!(response.next_page_token(), "next");
        let names = response
            .items()
            .into_iter()
            .map(|j| j.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["projects/p/dlpJobs/j"]);
    }
}
