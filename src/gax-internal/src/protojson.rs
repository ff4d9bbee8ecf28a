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

//! Helpers to serialize Protobuf messages using the canonical JSON mapping.
//!
//! The message types derive both [prost::Message] and [serde]. The well-known
//! types from [prost_types] have no serde support, these modules are used with
//! `#[serde(with = "...")]` to map them.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Returns true if `v` is the default value, used to elide fields.
pub fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// 64-bit integers are strings in JSON.
pub mod int64 {
    use super::*;

    pub fn serialize<S: Serializer>(v: &i64, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(v)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i64),
            String(String),
        }
        match Repr::deserialize(d)? {
            Repr::Number(n) => Ok(n),
            Repr::String(s) => s.parse().map_err(D::Error::custom),
        }
    }
}

/// `google.protobuf.Timestamp` is an RFC 3339 string.
pub mod timestamp {
    use super::*;
    use prost_types::Timestamp;
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub(crate) fn format(v: &Timestamp) -> Result<String, String> {
        let nanos = i128::from(v.seconds) * 1_000_000_000 + i128::from(v.nanos);
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|e| e.to_string())?
            .format(&Rfc3339)
            .map_err(|e| e.to_string())
    }

    pub(crate) fn parse(s: &str) -> Result<Timestamp, String> {
        let t = OffsetDateTime::parse(s, &Rfc3339).map_err(|e| e.to_string())?;
        Ok(Timestamp {
            seconds: t.unix_timestamp(),
            nanos: t.nanosecond() as i32,
        })
    }

    pub fn serialize<S: Serializer>(v: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            None => s.serialize_none(),
            Some(t) => s.serialize_str(&format(t).map_err(serde::ser::Error::custom)?),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Timestamp>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| parse(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// `google.protobuf.Duration` is a string with an `s` suffix, e.g. `1.5s`.
pub mod duration {
    use super::*;
    use prost_types::Duration;

    pub(crate) fn format(v: &Duration) -> String {
        let sign = if v.seconds < 0 || v.nanos < 0 { "-" } else { "" };
        let seconds = v.seconds.unsigned_abs();
        let nanos = v.nanos.unsigned_abs();
        if nanos == 0 {
            return format!("{sign}{seconds}s");
        }
        let fraction = format!("{nanos:09}");
        format!("{sign}{seconds}.{}s", fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<Duration, String> {
        let value = s
            .strip_suffix('s')
            .ok_or_else(|| format!("duration {s} is missing the `s` suffix"))?;
        let (negative, value) = match value.strip_prefix('-') {
            Some(v) => (true, v),
            None => (false, value),
        };
        let (seconds, fraction) = value.split_once('.').unwrap_or((value, ""));
        if fraction.len() > 9 {
            return Err(format!("duration {s} has more than nanosecond precision"));
        }
        let seconds: i64 = seconds.parse().map_err(|e| format!("{s}: {e}"))?;
        let nanos: i32 = if fraction.is_empty() {
            0
        } else {
            format!("{fraction:0<9}")
                .parse()
                .map_err(|e| format!("{s}: {e}"))?
        };
        Ok(match negative {
            true => Duration { seconds: -seconds, nanos: -nanos },
            false => Duration { seconds, nanos },
        })
    }

    pub fn serialize<S: Serializer>(v: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            None => s.serialize_none(),
            Some(d) => s.serialize_str(&format(d)),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| parse(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// `google.protobuf.FieldMask` is a comma separated list of camelCase paths.
pub mod field_mask {
    use super::*;
    use prost_types::FieldMask;

    fn to_camel(path: &str) -> String {
        let mut out = String::with_capacity(path.len());
        let mut upper = false;
        for c in path.chars() {
            match c {
                '_' => upper = true,
                c if upper => {
                    out.extend(c.to_uppercase());
                    upper = false;
                }
                c => out.push(c),
            }
        }
        out
    }

    fn to_snake(path: &str) -> String {
        let mut out = String::with_capacity(path.len() + 4);
        for c in path.chars() {
            if c.is_ascii_uppercase() {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    pub fn serialize<S: Serializer>(v: &Option<FieldMask>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            None => s.serialize_none(),
            Some(m) => {
                let paths: Vec<String> = m.paths.iter().map(|p| to_camel(p)).collect();
                s.serialize_str(&paths.join(","))
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<FieldMask>, D::Error> {
        Ok(Option::<String>::deserialize(d)?.map(|s| FieldMask {
            paths: s
                .split(',')
                .filter(|p| !p.is_empty())
                .map(to_snake)
                .collect(),
        }))
    }
}

/// `bytes` fields are base64 strings.
pub mod bytes {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE};

    pub fn serialize<S: Serializer>(v: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&STANDARD.encode(v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = Option::<String>::deserialize(d)?.unwrap_or_default();
        // Both the standard and URL-safe alphabets are valid input.
        STANDARD
            .decode(&s)
            .or_else(|_| URL_SAFE.decode(&s))
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::{Duration, FieldMask, Timestamp};
    use serde::Serialize;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Message {
        #[serde(with = "int64", skip_serializing_if = "is_default")]
        size: i64,
        #[serde(with = "timestamp", skip_serializing_if = "Option::is_none")]
        create_time: Option<Timestamp>,
        #[serde(with = "duration", skip_serializing_if = "Option::is_none")]
        ttl: Option<Duration>,
        #[serde(with = "field_mask", skip_serializing_if = "Option::is_none")]
        update_mask: Option<FieldMask>,
        #[serde(with = "bytes", skip_serializing_if = "Vec::is_empty")]
        data: Vec<u8>,
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        let got = serde_json::to_value(Message::default())?;
        assert_eq!(got, json!({}));
        let got = serde_json::from_value::<Message>(json!({}))?;
        assert_eq!(got, Message::default());
        Ok(())
    }

    #[test]
    fn full() -> anyhow::Result<()> {
        let input = Message {
            size: 1234567890123,
            create_time: Some(Timestamp {
                seconds: 1_700_000_000,
                nanos: 500_000_000,
            }),
            ttl: Some(Duration {
                seconds: 90,
                nanos: 0,
            }),
            update_mask: Some(FieldMask {
                paths: vec!["display_name".into(), "inspect_config.min_likelihood".into()],
            }),
            data: b"hello".to_vec(),
        };
        let json = serde_json::to_value(&input)?;
        assert_eq!(
            json,
            json!({
                "size": "1234567890123",
                "createTime": "2023-11-14T22:13:20.5Z",
                "ttl": "90s",
                "updateMask": "displayName,inspectConfig.minLikelihood",
                "data": "aGVsbG8=",
            })
        );
        let got = serde_json::from_value::<Message>(json)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn int64_from_number() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Message>(json!({"size": 42}))?;
        assert_eq!(got.size, 42);
        Ok(())
    }

    #[test_case(0, 0, "0s")]
    #[test_case(1, 500_000_000, "1.5s")]
    #[test_case(0, 1, "0.000000001s")]
    #[test_case(-2, -250_000_000, "-2.25s")]
    fn duration_format(seconds: i64, nanos: i32, want: &str) -> anyhow::Result<()> {
        let d = Duration { seconds, nanos };
        assert_eq!(duration::format(&d), want);
        assert_eq!(duration::parse(want).map_err(anyhow::Error::msg)?, d);
        Ok(())
    }

    #[test_case("1"; "missing suffix")]
    #[test_case("abcs"; "not a number")]
    #[test_case("1.0000000001s"; "too precise")]
    fn duration_errors(input: &str) {
        assert!(duration::parse(input).is_err(), "{input}");
    }

    #[test]
    fn timestamp_errors() {
        let got = serde_json::from_value::<Message>(json!({"createTime": "yesterday"}));
        assert!(got.is_err(), "{got:?}");
        assert!(timestamp::parse("2025-01-01T00:00:00Z").is_ok());
    }
}
