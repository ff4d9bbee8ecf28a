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

//! Serializes request fields as query parameters.
//!
//! Methods using `GET` or `DELETE` send every request field that is not part of
//! the path as a query parameter. The fields are converted to JSON first, so
//! the query parameters use the same names and formats as the JSON body would.
//! Nested messages use dotted names, and repeated fields repeat the name.

use gax::error::Error;

/// Types that can be used as a query parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

/// Adds the fields of `request` as query parameters, except those in `skip`.
///
/// `skip` contains the JSON names of the fields already used in the path.
pub fn add_request<T: serde::Serialize>(
    builder: reqwest::RequestBuilder,
    request: &T,
    skip: &[&str],
) -> gax::Result<reqwest::RequestBuilder> {
    let value = serde_json::to_value(request).map_err(Error::ser)?;
    let serde_json::Value::Object(object) = value else {
        return Ok(builder);
    };
    let builder = object
        .into_iter()
        .filter(|(k, _)| !skip.contains(&k.as_str()))
        .fold(builder, |builder, (k, v)| v.add(builder, &k));
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> reqwest::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://dlp.googleapis.com/v2/unused"))
    }

    #[test]
    fn object() -> TestResult {
        let value = json!({
            "a": 123,
            "b": [123, 456, 789],
            "c": "123",
            "d": true,
            "e": {
                "f": "abc",
                "g": false,
                "h": {
                    "i": 42,
                }
            }
        });
        let request = value.add(builder()?, "name").build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "name.a=123",
                "name.b=123",
                "name.b=456",
                "name.b=789",
                "name.c=123",
                "name.d=true",
                "name.e.f=abc",
                "name.e.g=false",
                "name.e.h.i=42",
            ]
        );
        Ok(())
    }

    #[test_case(json!([1, 3, 5, 7]), vec!["name=1", "name=3", "name=5", "name=7"]; "array")]
    #[test_case(json!(null), vec![]; "null")]
    #[test_case(json!("abc123"), vec!["name=abc123"]; "string")]
    #[test_case(json!(7.5), vec!["name=7.5"]; "number")]
    #[test_case(json!(true), vec!["name=true"]; "boolean")]
    fn scalar(value: serde_json::Value, want: Vec<&str>) -> TestResult {
        let request = value.add(builder()?, "name").build()?;
        assert_eq!(split_query(&request), want);
        Ok(())
    }

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ListRequest {
        parent: String,
        page_size: i32,
        page_token: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        location_id: Option<String>,
    }

    #[test]
    fn request() -> TestResult {
        let request = ListRequest {
            parent: "projects/p".into(),
            page_size: 10,
            page_token: "abc".into(),
            location_id: None,
        };
        let request = add_request(builder()?, &request, &["parent"])?.build()?;
        assert_eq!(split_query(&request), vec!["pageSize=10", "pageToken=abc"]);
        Ok(())
    }
}
