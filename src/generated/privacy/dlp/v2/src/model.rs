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

//! The messages and enums used by the Sensitive Data Protection (DLP) API.
//!
//! Messages implement both the protobuf encoding, used by the gRPC
//! transport, and the canonical JSON mapping, used by the HTTP/JSON transport.
//! Enum fields hold the integer value of the enum, use the generated getters
//! and setters (for example [InspectConfig::min_likelihood]) to work with the
//! enum types.

/// A generic empty message, returned by the delete and cancel methods.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Empty {}

/// Type of information detected by the API.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoType {
    /// Name of the information type, for example `EMAIL_ADDRESS`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Optional version name for this InfoType.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub version: std::string::String,
}

/// Configuration to control the number of findings returned.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindingLimits {
    /// Max number of findings reported for each item.
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub max_findings_per_item: i32,

    /// Max number of findings reported per request.
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub max_findings_per_request: i32,
}

/// Configuration description of the scanning process.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectConfig {
    /// Restricts what info_types to look for.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub info_types: std::vec::Vec<crate::model::InfoType>,

    /// Only returns findings equal to or above this threshold.
    #[prost(enumeration = "crate::model::Likelihood", tag = "2")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub min_likelihood: i32,

    /// Configuration to control the number of findings returned.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limits: std::option::Option<crate::model::FindingLimits>,

    /// When true, a contextual quote from the data that triggered a finding is
    /// included in the response.
    #[prost(bool, tag = "4")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub include_quote: bool,

    /// When true, excludes type information of the findings.
    #[prost(bool, tag = "5")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub exclude_info_types: bool,

    /// Deprecated and unused.
    #[prost(enumeration = "crate::model::ContentOption", repeated, tag = "8")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub content_options: std::vec::Vec<i32>,
}

/// Container for bytes to inspect or redact.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ByteContentItem {
    /// The type of data stored in the bytes string. Default will be TEXT_UTF8.
    #[prost(enumeration = "crate::model::byte_content_item::BytesType", tag = "1")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub r#type: i32,

    /// Content data to inspect or redact.
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "gaxi::protojson::bytes", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub data: std::vec::Vec<u8>,
}

/// Nested message and enum types in `ByteContentItem`.
pub mod byte_content_item {
    /// The type of data being sent for inspection.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum BytesType {
        /// Unused
        Unspecified = 0,
        /// Any image type.
        Image = 6,
        /// plain text
        TextUtf8 = 5,
        /// csv
        Csv = 12,
        /// tsv
        Tsv = 13,
    }
}

/// Type of content to inspect.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentItem {
    /// Data of the item either in the byte array or UTF-8 string form.
    #[prost(oneof = "crate::model::content_item::DataItem", tags = "3, 5")]
    #[serde(flatten)]
    pub data_item: std::option::Option<crate::model::content_item::DataItem>,
}

/// Nested message and enum types in `ContentItem`.
pub mod content_item {
    /// Data of the item either in the byte array or UTF-8 string form.
    #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum DataItem {
        /// String data to inspect or redact.
        #[prost(string, tag = "3")]
        Value(std::string::String),
        /// Content data to inspect or redact.
        #[prost(message, tag = "5")]
        ByteItem(crate::model::ByteContentItem),
    }
}

/// Generic half-open interval [start, end)
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Range {
    /// Index of the first character of the range (inclusive).
    #[prost(int64, tag = "1")]
    #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
    pub start: i64,

    /// Index of the last character of the range (exclusive).
    #[prost(int64, tag = "2")]
    #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
    pub end: i64,
}

/// Specifies the location of the finding.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    /// Zero-based byte offsets delimiting the finding.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub byte_range: std::option::Option<crate::model::Range>,

    /// Unicode character offsets delimiting the finding.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub codepoint_range: std::option::Option<crate::model::Range>,
}

/// Represents a piece of potentially sensitive content.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Finding {
    /// The content that was found.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub quote: std::string::String,

    /// The type of content that might have been found.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub info_type: std::option::Option<crate::model::InfoType>,

    /// Confidence of how likely it is that the `info_type` is correct.
    #[prost(enumeration = "crate::model::Likelihood", tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub likelihood: i32,

    /// Where the content was found.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location: std::option::Option<crate::model::Location>,

    /// Timestamp when finding was detected.
    #[prost(message, optional, tag = "6")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<prost_types::Timestamp>,

    /// The job that stored the finding.
    #[prost(string, tag = "13")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub job_name: std::string::String,

    /// Resource name in format
    /// `projects/{project}/locations/{location}/findings/{finding}`.
    #[prost(string, tag = "14")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// All the findings for a single scanned item.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectResult {
    /// List of findings for an item.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub findings: std::vec::Vec<crate::model::Finding>,

    /// If true, then this item might have more findings than were returned.
    #[prost(bool, tag = "2")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub findings_truncated: bool,
}

/// Request to search for potentially sensitive info in a ContentItem.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectContentRequest {
    /// Parent resource name, for example `projects/example-project/locations/europe-west3`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Configuration for the inspector.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_config: std::option::Option<crate::model::InspectConfig>,

    /// The item to inspect.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item: std::option::Option<crate::model::ContentItem>,

    /// Template to use. Any configuration directly specified in
    /// `inspect_config` will override those set in the template.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub inspect_template_name: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Results of inspecting an item.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectContentResponse {
    /// The findings.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub result: std::option::Option<crate::model::InspectResult>,
}

/// Set of primitive values supported by the system.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Value {
    /// Value types.
    #[prost(oneof = "crate::model::value::Type", tags = "1, 2, 3, 4")]
    #[serde(flatten)]
    pub r#type: std::option::Option<crate::model::value::Type>,
}

/// Nested message and enum types in `Value`.
pub mod value {
    /// Value types.
    #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Type {
        /// integer
        #[prost(int64, tag = "1")]
        IntegerValue(#[serde(with = "gaxi::protojson::int64")] i64),
        /// float
        #[prost(double, tag = "2")]
        FloatValue(f64),
        /// string
        #[prost(string, tag = "3")]
        StringValue(std::string::String),
        /// boolean
        #[prost(bool, tag = "4")]
        BooleanValue(bool),
    }
}

/// Replace each input value with a given value.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplaceValueConfig {
    /// Value to replace it with.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub new_value: std::option::Option<crate::model::Value>,
}

/// Redact a given value.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RedactConfig {}

/// Replace each matching finding with the name of the info_type.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplaceWithInfoTypeConfig {}

/// Partially mask a string by replacing a given number of characters with a
/// fixed character.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterMaskConfig {
    /// Character to use to mask the sensitive values, for example, `*`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub masking_character: std::string::String,

    /// Number of characters to mask. If not set, all matching chars will be
    /// masked.
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub number_to_mask: i32,

    /// Mask characters in reverse order.
    #[prost(bool, tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub reverse_order: bool,
}

/// A rule for transforming a value.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrimitiveTransformation {
    /// Type of transformation.
    #[prost(oneof = "crate::model::primitive_transformation::Transformation", tags = "1, 2, 3, 7")]
    #[serde(flatten)]
    pub transformation: std::option::Option<crate::model::primitive_transformation::Transformation>,
}

/// Nested message and enum types in `PrimitiveTransformation`.
pub mod primitive_transformation {
    /// Type of transformation.
    #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Transformation {
        /// Replace with a specified value.
        #[prost(message, tag = "1")]
        ReplaceConfig(crate::model::ReplaceValueConfig),
        /// Redact
        #[prost(message, tag = "2")]
        RedactConfig(crate::model::RedactConfig),
        /// Mask
        #[prost(message, tag = "3")]
        CharacterMaskConfig(crate::model::CharacterMaskConfig),
        /// Replace with infotype
        #[prost(message, tag = "7")]
        ReplaceWithInfoTypeConfig(crate::model::ReplaceWithInfoTypeConfig),
    }
}

/// A transformation to apply to text that is identified as a specific
/// info_type.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoTypeTransformation {
    /// InfoTypes to apply the transformation to. An empty list will cause
    /// this transformation to apply to all findings that correspond to
    /// infoTypes that were requested in `InspectConfig`.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub info_types: std::vec::Vec<crate::model::InfoType>,

    /// Primitive transformation to apply to the infoType.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub primitive_transformation: std::option::Option<crate::model::PrimitiveTransformation>,
}

/// A type of transformation that will scan unstructured text and apply
/// various `PrimitiveTransformation`s to each finding.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoTypeTransformations {
    /// Transformation for each infoType.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub transformations: std::vec::Vec<crate::model::InfoTypeTransformation>,
}

/// The configuration that controls how the data will change.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeidentifyConfig {
    /// Treat the dataset as free-form text and apply the same free text
    /// transformation everywhere.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub info_type_transformations: std::option::Option<crate::model::InfoTypeTransformations>,
}

/// Overview of the modifications that occurred.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformationOverview {
    /// Total size in bytes that were transformed in some way.
    #[prost(int64, tag = "2")]
    #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
    pub transformed_bytes: i64,
}

/// Request to de-identify a ContentItem.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeidentifyContentRequest {
    /// Parent resource name, for example `projects/example-project/locations/europe-west3`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Configuration for the de-identification of the content item.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deidentify_config: std::option::Option<crate::model::DeidentifyConfig>,

    /// Configuration for the inspector.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_config: std::option::Option<crate::model::InspectConfig>,

    /// The item to de-identify.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item: std::option::Option<crate::model::ContentItem>,

    /// Template to use.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub inspect_template_name: std::string::String,

    /// Template to use.
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub deidentify_template_name: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Results of de-identifying a ContentItem.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeidentifyContentResponse {
    /// The de-identified item.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item: std::option::Option<crate::model::ContentItem>,

    /// An overview of the changes that were made on the `item`.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub overview: std::option::Option<crate::model::TransformationOverview>,
}

/// Request to re-identify an item.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReidentifyContentRequest {
    /// Parent resource name, for example `projects/example-project/locations/europe-west3`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Configuration for the re-identification of the content item.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reidentify_config: std::option::Option<crate::model::DeidentifyConfig>,

    /// Configuration for the inspector.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_config: std::option::Option<crate::model::InspectConfig>,

    /// The item to re-identify.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item: std::option::Option<crate::model::ContentItem>,

    /// Template to use.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub inspect_template_name: std::string::String,

    /// Template to use.
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub reidentify_template_name: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Results of re-identifying an item.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReidentifyContentResponse {
    /// The re-identified item.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item: std::option::Option<crate::model::ContentItem>,

    /// An overview of the changes that were made to the `item`.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub overview: std::option::Option<crate::model::TransformationOverview>,
}

/// InfoType description.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoTypeDescription {
    /// Internal name of the infoType.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Human readable form of the infoType name.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Which parts of the API supports this InfoType.
    #[prost(enumeration = "crate::model::InfoTypeSupportedBy", repeated, tag = "3")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub supported_by: std::vec::Vec<i32>,

    /// Description of the infotype.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,
}

/// Request for the list of infoTypes.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListInfoTypesRequest {
    /// The parent resource name, for example `locations/{location_id}`.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// BCP-47 language code for localized infoType friendly
    /// names. If omitted, or if localized strings are not available,
    /// en-US strings will be returned.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// filter to only return infoTypes supported by certain parts of the
    /// API. Defaults to supported_by=INSPECT.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Response to the ListInfoTypes request.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListInfoTypesResponse {
    /// Set of sensitive infoTypes.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub info_types: std::vec::Vec<crate::model::InfoTypeDescription>,
}

/// The inspectTemplate contains a configuration (set of types of sensitive data
/// to be detected) to be used anywhere you otherwise would normally specify
/// InspectConfig.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectTemplate {
    /// Output only. The template name, for example
    /// `projects/project-id/inspectTemplates/432452342`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Display name (max 256 chars).
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Short description (max 256 chars).
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// Output only. The creation timestamp of an inspectTemplate.
    #[prost(message, optional, tag = "4")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<prost_types::Timestamp>,

    /// Output only. The last update timestamp of an inspectTemplate.
    #[prost(message, optional, tag = "5")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<prost_types::Timestamp>,

    /// The core content of the template. Configuration of the scanning process.
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_config: std::option::Option<crate::model::InspectConfig>,
}

/// DeidentifyTemplates contains instructions on how to de-identify content.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeidentifyTemplate {
    /// Output only. The template name, for example
    /// `projects/project-id/deidentifyTemplates/432452342`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Display name (max 256 chars).
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Short description (max 256 chars).
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// Output only. The creation timestamp of a deidentifyTemplate.
    #[prost(message, optional, tag = "4")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<prost_types::Timestamp>,

    /// Output only. The last update timestamp of a deidentifyTemplate.
    #[prost(message, optional, tag = "5")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<prost_types::Timestamp>,

    /// The core content of the template.
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deidentify_config: std::option::Option<crate::model::DeidentifyConfig>,
}

/// Request message for CreateInspectTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateInspectTemplateRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The InspectTemplate to create.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_template: std::option::Option<crate::model::InspectTemplate>,

    /// The id can contain uppercase and lowercase letters,
    /// numbers, and hyphens. The maximum length is 100 characters.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub template_id: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Request message for UpdateInspectTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateInspectTemplateRequest {
    /// Required. Resource name of the resource to update.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// New value.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_template: std::option::Option<crate::model::InspectTemplate>,

    /// Mask to control which fields get updated.
    #[prost(message, optional, tag = "3")]
    #[serde(with = "gaxi::protojson::field_mask", skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<prost_types::FieldMask>,
}

/// Request message for GetInspectTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetInspectTemplateRequest {
    /// Required. Resource name of the resource to be read.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for ListInspectTemplates.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListInspectTemplatesRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Page token to continue retrieval. Comes from the previous call
    /// to `ListInspectTemplates`.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Size of the page. This value can be limited by the server. If zero server
    /// returns a page of max size 100.
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub page_size: i32,

    /// Comma-separated list of fields to order by.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Response message for ListInspectTemplates.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListInspectTemplatesResponse {
    /// List of InspectTemplates, up to page_size in ListInspectTemplatesRequest.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub inspect_templates: std::vec::Vec<crate::model::InspectTemplate>,

    /// If the next page is available then the next page token to be used in the
    /// following List call.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

/// Request message for DeleteInspectTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteInspectTemplateRequest {
    /// Required. Resource name of the resource to be deleted.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for CreateDeidentifyTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDeidentifyTemplateRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The DeidentifyTemplate to create.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deidentify_template: std::option::Option<crate::model::DeidentifyTemplate>,

    /// The id can contain uppercase and lowercase letters,
    /// numbers, and hyphens. The maximum length is 100 characters.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub template_id: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Request message for UpdateDeidentifyTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDeidentifyTemplateRequest {
    /// Required. Resource name of the resource to update.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// New value.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deidentify_template: std::option::Option<crate::model::DeidentifyTemplate>,

    /// Mask to control which fields get updated.
    #[prost(message, optional, tag = "3")]
    #[serde(with = "gaxi::protojson::field_mask", skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<prost_types::FieldMask>,
}

/// Request message for GetDeidentifyTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDeidentifyTemplateRequest {
    /// Required. Resource name of the resource to be read.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for ListDeidentifyTemplates.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDeidentifyTemplatesRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Page token to continue retrieval. Comes from the previous call
    /// to `ListDeidentifyTemplates`.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Size of the page. This value can be limited by the server. If zero server
    /// returns a page of max size 100.
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub page_size: i32,

    /// Comma-separated list of fields to order by.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Response message for ListDeidentifyTemplates.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDeidentifyTemplatesResponse {
    /// List of DeidentifyTemplates, up to page_size in ListDeidentifyTemplatesRequest.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub deidentify_templates: std::vec::Vec<crate::model::DeidentifyTemplate>,

    /// If the next page is available then the next page token to be used in the
    /// following List call.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

/// Request message for DeleteDeidentifyTemplate.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDeidentifyTemplateRequest {
    /// Required. Resource name of the resource to be deleted.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Message defining the location of a BigQuery table.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BigQueryTable {
    /// The Google Cloud project ID of the project containing the table.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project_id: std::string::String,

    /// Dataset ID of the table.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub dataset_id: std::string::String,

    /// Name of the table.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub table_id: std::string::String,
}

/// Options defining a file or a set of files within a Cloud Storage
/// bucket.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudStorageOptions {
    /// The set of one or more files to scan.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_set: std::option::Option<crate::model::cloud_storage_options::FileSet>,

    /// Max number of bytes to scan from a file.
    #[prost(int64, tag = "4")]
    #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
    pub bytes_limit_per_file: i64,

    /// Limits the number of files to scan to this percentage of the input
    /// FileSet.
    #[prost(int32, tag = "7")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub files_limit_percent: i32,
}

/// Nested message and enum types in `CloudStorageOptions`.
pub mod cloud_storage_options {
    /// Set of files to scan.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct FileSet {
        /// The Cloud Storage url of the file(s) to scan, in the format
        /// `gs://<bucket>/<path>`. Trailing wildcard in the path is allowed.
        #[prost(string, tag = "1")]
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub url: std::string::String,
    }
}

/// Options defining BigQuery table and row identifiers.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BigQueryOptions {
    /// Complete BigQuery table reference.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_reference: std::option::Option<crate::model::BigQueryTable>,

    /// Max number of rows to scan.
    #[prost(int64, tag = "3")]
    #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
    pub rows_limit: i64,
}

/// Shared message indicating Cloud storage type.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageConfig {
    /// Type of storage system to inspect.
    #[prost(oneof = "crate::model::storage_config::Type", tags = "3, 4")]
    #[serde(flatten)]
    pub r#type: std::option::Option<crate::model::storage_config::Type>,

    /// Configuration of the timespan of the items to include in scanning.
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timespan_config: std::option::Option<crate::model::storage_config::TimespanConfig>,
}

/// Nested message and enum types in `StorageConfig`.
pub mod storage_config {
    /// Configuration of the timespan of the items to include in scanning.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct TimespanConfig {
        /// Exclude files, tables, or rows older than this value.
        #[prost(message, optional, tag = "1")]
        #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
        pub start_time: std::option::Option<prost_types::Timestamp>,

        /// Exclude files, tables, or rows newer than this value.
        #[prost(message, optional, tag = "2")]
        #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
        pub end_time: std::option::Option<prost_types::Timestamp>,

        /// When the job is started by a JobTrigger we will automatically figure out
        /// a valid start_time to avoid scanning files that have not been modified
        /// since the last time the JobTrigger executed.
        #[prost(bool, tag = "4")]
        #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
        pub enable_auto_population_of_timespan_config: bool,
    }

    /// Type of storage system to inspect.
    #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Type {
        /// Cloud Storage options.
        #[prost(message, tag = "3")]
        CloudStorageOptions(crate::model::CloudStorageOptions),
        /// BigQuery options.
        #[prost(message, tag = "4")]
        BigQueryOptions(crate::model::BigQueryOptions),
    }
}

/// Cloud repository for storing output.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputStorageConfig {
    /// Store findings in an existing table or a new table in an existing
    /// dataset.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table: std::option::Option<crate::model::BigQueryTable>,
}

/// A task to execute on the completion of a job.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    /// Extra events to execute after the job has finished.
    #[prost(oneof = "crate::model::action::Action", tags = "1, 2")]
    #[serde(flatten)]
    pub action: std::option::Option<crate::model::action::Action>,
}

/// Nested message and enum types in `Action`.
pub mod action {
    /// If set, the detailed findings will be persisted to the specified
    /// OutputStorageConfig.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct SaveFindings {
        /// Location to store findings outside of DLP.
        #[prost(message, optional, tag = "1")]
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub output_config: std::option::Option<crate::model::OutputStorageConfig>,
    }

    /// Publish a message into a given Pub/Sub topic when DlpJob has completed.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct PublishToPubSub {
        /// Cloud Pub/Sub topic to send notifications to, in the format
        /// `projects/{project}/topics/{topic}`.
        #[prost(string, tag = "1")]
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub topic: std::string::String,
    }

    /// Extra events to execute after the job has finished.
    #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Action {
        /// Save resulting findings in a provided location.
        #[prost(message, tag = "1")]
        SaveFindings(crate::model::action::SaveFindings),
        /// Publish a notification to a Pub/Sub topic.
        #[prost(message, tag = "2")]
        PubSub(crate::model::action::PublishToPubSub),
    }
}

/// Controls what and how to inspect for findings.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectJobConfig {
    /// The data to scan.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub storage_config: std::option::Option<crate::model::StorageConfig>,

    /// How and what to scan for.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_config: std::option::Option<crate::model::InspectConfig>,

    /// If provided, will be used as the default for all values in InspectConfig.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub inspect_template_name: std::string::String,

    /// Actions to execute at the completion of the job.
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<crate::model::Action>,
}

/// Configuration for a risk analysis job.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskAnalysisJobConfig {
    /// Input dataset to compute metrics over.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_table: std::option::Option<crate::model::BigQueryTable>,

    /// Actions to execute at the completion of the job.
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<crate::model::Action>,
}

/// Schedule for inspect job triggers.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    /// With this option a job is started on a regular periodic basis.
    #[prost(message, optional, tag = "1")]
    #[serde(with = "gaxi::protojson::duration", skip_serializing_if = "std::option::Option::is_none")]
    pub recurrence_period_duration: std::option::Option<prost_types::Duration>,
}

/// Job trigger option for hybrid jobs. Jobs must be manually created
/// and finished.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Manual {}

/// Contains a configuration to make API calls on a repeating basis.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobTrigger {
    /// Unique resource name for the triggeredJob, assigned by the service when the
    /// triggeredJob is created, for example
    /// `projects/dlp-test-project/jobTriggers/53234423`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Display name (max 100 chars)
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// User provided description (max 256 chars)
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// For inspect jobs, a snapshot of the configuration.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_job: std::option::Option<crate::model::InspectJobConfig>,

    /// A list of triggers which will be OR'ed together.
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub triggers: std::vec::Vec<crate::model::job_trigger::Trigger>,

    /// Output only. The creation timestamp of a triggeredJob.
    #[prost(message, optional, tag = "7")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<prost_types::Timestamp>,

    /// Output only. The last update timestamp of a triggeredJob.
    #[prost(message, optional, tag = "8")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<prost_types::Timestamp>,

    /// Output only. The timestamp of the last time this trigger executed.
    #[prost(message, optional, tag = "9")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub last_run_time: std::option::Option<prost_types::Timestamp>,

    /// Required. A status for this trigger.
    #[prost(enumeration = "crate::model::job_trigger::Status", tag = "10")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub status: i32,
}

/// Nested message and enum types in `JobTrigger`.
pub mod job_trigger {
    /// What event needs to occur for a new job to be started.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Trigger {
        /// What event needs to occur for a new job to be started.
        #[prost(oneof = "crate::model::job_trigger::trigger::Trigger", tags = "1, 2")]
        #[serde(flatten)]
        pub trigger: std::option::Option<crate::model::job_trigger::trigger::Trigger>,
    }

    /// Nested message and enum types in `Trigger`.
    pub mod trigger {
        /// What event needs to occur for a new job to be started.
        #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum Trigger {
            /// Create a job on a repeating basis based on the elapse of time.
            #[prost(message, tag = "1")]
            Schedule(crate::model::Schedule),
            /// For use with hybrid jobs.
            #[prost(message, tag = "2")]
            Manual(crate::model::Manual),
        }
    }

    /// Whether the trigger is currently active.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        /// Unused.
        Unspecified = 0,
        /// Trigger is healthy.
        Healthy = 1,
        /// Trigger is temporarily paused.
        Paused = 2,
        /// Trigger is cancelled and can not be resumed.
        Cancelled = 3,
    }
}

/// The results of an inspect DataSource job.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InspectDataSourceDetails {
    /// The configuration used for this job.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requested_options: std::option::Option<crate::model::inspect_data_source_details::RequestedOptions>,

    /// A summary of the outcome of this inspection job.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub result: std::option::Option<crate::model::inspect_data_source_details::Result>,
}

/// Nested message and enum types in `InspectDataSourceDetails`.
pub mod inspect_data_source_details {
    /// Snapshot of the inspection configuration.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct RequestedOptions {
        /// If run with an InspectTemplate, a snapshot of its state at the time of
        /// this run.
        #[prost(message, optional, tag = "1")]
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub snapshot_inspect_template: std::option::Option<crate::model::InspectTemplate>,

        /// Inspect config.
        #[prost(message, optional, tag = "3")]
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub job_config: std::option::Option<crate::model::InspectJobConfig>,
    }

    /// All result fields mentioned below are updated while the job is
    /// processing.
    #[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Result {
        /// Total size in bytes that were processed.
        #[prost(int64, tag = "1")]
        #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
        pub processed_bytes: i64,

        /// Estimate of the number of bytes to process.
        #[prost(int64, tag = "2")]
        #[serde(with = "gaxi::protojson::int64", skip_serializing_if = "gaxi::protojson::is_default")]
        pub total_estimated_bytes: i64,
    }
}

/// Combines all of the information about a DLP job.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DlpJob {
    /// The server-assigned name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The type of job.
    #[prost(enumeration = "crate::model::DlpJobType", tag = "2")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub r#type: i32,

    /// State of a job.
    #[prost(enumeration = "crate::model::dlp_job::JobState", tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub state: i32,

    /// Results from inspecting a data source.
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inspect_details: std::option::Option<crate::model::InspectDataSourceDetails>,

    /// Time when the job was created.
    #[prost(message, optional, tag = "6")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<prost_types::Timestamp>,

    /// Time when the job started.
    #[prost(message, optional, tag = "7")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<prost_types::Timestamp>,

    /// Time when the job finished.
    #[prost(message, optional, tag = "8")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<prost_types::Timestamp>,

    /// If created by a job trigger, the resource name of the trigger that
    /// instantiated the job.
    #[prost(string, tag = "10")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub job_trigger_name: std::string::String,

    /// Time when the job was last modified by the system.
    #[prost(message, optional, tag = "15")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified: std::option::Option<prost_types::Timestamp>,
}

/// Nested message and enum types in `DlpJob`.
pub mod dlp_job {
    /// Possible states of a job.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum JobState {
        /// Unused.
        Unspecified = 0,
        /// The job has not yet started.
        Pending = 1,
        /// The job is currently running.
        Running = 2,
        /// The job is no longer running.
        Done = 3,
        /// The job was canceled before it could be completed.
        Canceled = 4,
        /// The job had an error and did not complete.
        Failed = 5,
        /// The job is currently accepting findings via hybridInspect.
        Active = 6,
    }
}

/// Request message for CreateJobTrigger.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateJobTriggerRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The JobTrigger to create.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_trigger: std::option::Option<crate::model::JobTrigger>,

    /// The id can contain uppercase and lowercase letters,
    /// numbers, and hyphens. The maximum length is 100 characters.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub trigger_id: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Request message for UpdateJobTrigger.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateJobTriggerRequest {
    /// Required. Resource name of the resource to update.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// New value.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_trigger: std::option::Option<crate::model::JobTrigger>,

    /// Mask to control which fields get updated.
    #[prost(message, optional, tag = "3")]
    #[serde(with = "gaxi::protojson::field_mask", skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<prost_types::FieldMask>,
}

/// Request message for GetJobTrigger.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetJobTriggerRequest {
    /// Required. Resource name of the resource to be read.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for ListJobTriggers.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobTriggersRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Page token to continue retrieval. Comes from the previous call
    /// to `ListJobTriggers`.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Size of the page. This value can be limited by the server. If zero server
    /// returns a page of max size 100.
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub page_size: i32,

    /// Comma-separated list of fields to order by.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// Allows filtering. Supported syntax includes `status`, `inspected_storage`
    /// and `last_run_time`.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The type of jobs. Will use `DlpJobType.INSPECT` if not set.
    #[prost(enumeration = "crate::model::DlpJobType", tag = "6")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub r#type: i32,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Response message for ListJobTriggers.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobTriggersResponse {
    /// List of JobTriggers, up to page_size in ListJobTriggersRequest.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub job_triggers: std::vec::Vec<crate::model::JobTrigger>,

    /// If the next page is available then the next page token to be used in the
    /// following List call.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

/// Request message for DeleteJobTrigger.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteJobTriggerRequest {
    /// Required. Resource name of the resource to be deleted.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for ActivateJobTrigger.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivateJobTriggerRequest {
    /// Required. Resource name of the trigger to activate, for example
    /// `projects/dlp-test-project/jobTriggers/53234423`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for CreateDlpJobRequest. Used to initiate long running
/// jobs such as calculating risk metrics or inspecting Google Cloud
/// Storage.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDlpJobRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The configuration details for the specific type of job to run.
    #[prost(oneof = "crate::model::create_dlp_job_request::Job", tags = "2, 3")]
    #[serde(flatten)]
    pub job: std::option::Option<crate::model::create_dlp_job_request::Job>,

    /// The job id can contain uppercase and lowercase letters,
    /// numbers, and hyphens.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub job_id: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// Nested message and enum types in `CreateDlpJobRequest`.
pub mod create_dlp_job_request {
    /// The configuration details for the specific type of job to run.
    #[derive(Clone, PartialEq, prost::Oneof, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Job {
        /// An inspection job scans a storage repository for InfoTypes.
        #[prost(message, tag = "2")]
        InspectJob(crate::model::InspectJobConfig),
        /// A risk analysis job calculates re-identification risk metrics for a
        /// BigQuery table.
        #[prost(message, tag = "3")]
        RiskJob(crate::model::RiskAnalysisJobConfig),
    }
}

/// The request message for listing DLP jobs.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDlpJobsRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Allows filtering.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// The standard list page size.
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// The type of job. Defaults to `DlpJobType.INSPECT`
    #[prost(enumeration = "crate::model::DlpJobType", tag = "5")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub r#type: i32,

    /// Comma-separated list of fields to order by.
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// Deprecated. This field has no effect.
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location_id: std::string::String,
}

/// The response message for listing DLP jobs.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDlpJobsResponse {
    /// A list of DlpJobs that matches the specified filter in the request.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub jobs: std::vec::Vec<crate::model::DlpJob>,

    /// The standard List next-page token.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

/// The request message for `GetDlpJob`.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDlpJobRequest {
    /// Required. The name of the DlpJob resource.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// The request message for deleting a DLP job.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDlpJobRequest {
    /// Required. The name of the DlpJob resource to be deleted.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// The request message for canceling a DLP job.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CancelDlpJobRequest {
    /// Required. The name of the DlpJob resource to be cancelled.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Project and scan location information. Only set when the parent is an org.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrgConfig {
    /// The project that will run the scan. The DLP service
    /// account that exists within this project must have access to all resources
    /// that are profiled, and the DLP API must be enabled.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project_id: std::string::String,
}

/// Configuration for discovery to scan resources for profile generation.
/// Only one discovery configuration may exist per organization, folder,
/// or project.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscoveryConfig {
    /// Unique resource name for the DiscoveryConfig, assigned by the service when the
    /// DiscoveryConfig is created, for example
    /// `projects/dlp-test-project/locations/global/discoveryConfigs/53234423`.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Display name (max 100 chars)
    #[prost(string, tag = "11")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Only set when the parent is an org.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub org_config: std::option::Option<crate::model::OrgConfig>,

    /// Detection logic for profile generation.
    #[prost(string, repeated, tag = "3")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub inspect_templates: std::vec::Vec<std::string::String>,

    /// Output only. The creation timestamp of a DiscoveryConfig.
    #[prost(message, optional, tag = "6")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<prost_types::Timestamp>,

    /// Output only. The last update timestamp of a DiscoveryConfig.
    #[prost(message, optional, tag = "7")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<prost_types::Timestamp>,

    /// Output only. The timestamp of the last time this config was executed.
    #[prost(message, optional, tag = "8")]
    #[serde(with = "gaxi::protojson::timestamp", skip_serializing_if = "std::option::Option::is_none")]
    pub last_run_time: std::option::Option<prost_types::Timestamp>,

    /// Required. A status for this configuration.
    #[prost(enumeration = "crate::model::discovery_config::Status", tag = "10")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub status: i32,
}

/// Nested message and enum types in `DiscoveryConfig`.
pub mod discovery_config {
    /// Whether the discovery config is currently active.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        /// Unused
        Unspecified = 0,
        /// The discovery config is currently active.
        Running = 1,
        /// The discovery config is paused temporarily.
        Paused = 2,
    }
}

/// Request message for CreateDiscoveryConfig.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDiscoveryConfigRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The DiscoveryConfig to create.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub discovery_config: std::option::Option<crate::model::DiscoveryConfig>,

    /// The id can contain uppercase and lowercase letters,
    /// numbers, and hyphens. The maximum length is 100 characters.
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub config_id: std::string::String,
}

/// Request message for UpdateDiscoveryConfig.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDiscoveryConfigRequest {
    /// Required. Resource name of the resource to update.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// New value.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub discovery_config: std::option::Option<crate::model::DiscoveryConfig>,

    /// Mask to control which fields get updated.
    #[prost(message, optional, tag = "3")]
    #[serde(with = "gaxi::protojson::field_mask", skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<prost_types::FieldMask>,
}

/// Request message for GetDiscoveryConfig.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDiscoveryConfigRequest {
    /// Required. Resource name of the resource to be read.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Request message for ListDiscoveryConfigs.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDiscoveryConfigsRequest {
    /// Required. Parent resource name.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Page token to continue retrieval. Comes from the previous call
    /// to `ListDiscoveryConfigs`.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// Size of the page. This value can be limited by the server. If zero server
    /// returns a page of max size 100.
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "gaxi::protojson::is_default")]
    pub page_size: i32,

    /// Comma-separated list of fields to order by.
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,
}

/// Response message for ListDiscoveryConfigs.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDiscoveryConfigsResponse {
    /// List of DiscoveryConfigs, up to page_size in ListDiscoveryConfigsRequest.
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub discovery_configs: std::vec::Vec<crate::model::DiscoveryConfig>,

    /// If the next page is available then the next page token to be used in the
    /// following List call.
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

/// Request message for DeleteDiscoveryConfig.
#[derive(Clone, PartialEq, prost::Message, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDiscoveryConfigRequest {
    /// Required. Resource name of the resource to be deleted.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

/// Coarse-grained confidence level of how well a particular finding
/// satisfies the criteria to match a particular infoType.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Likelihood {
    /// Default value; same as POSSIBLE.
    Unspecified = 0,
    /// Highest chance of a false positive.
    VeryUnlikely = 1,
    /// High chance of a false positive.
    Unlikely = 2,
    /// Some matching signals. The default value.
    Possible = 3,
    /// Low chance of a false positive.
    Likely = 4,
    /// Confidence level is high. Lowest chance of a false positive.
    VeryLikely = 5,
}

/// An enum to represent the various types of DLP jobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DlpJobType {
    /// Defaults to INSPECT_JOB.
    Unspecified = 0,
    /// The job inspected Google Cloud for sensitive data.
    InspectJob = 1,
    /// The job executed a Risk Analysis computation.
    RiskAnalysisJob = 2,
}

/// Deprecated and unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ContentOption {
    /// Includes entire content of a file or a data stream.
    ContentUnspecified = 0,
    /// Text content within the data, excluding any metadata.
    ContentText = 1,
    /// Images found in the data.
    ContentImage = 2,
}

/// Parts of the APIs which use certain infoTypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum InfoTypeSupportedBy {
    /// Unused.
    EnumTypeUnspecified = 0,
    /// Supported by the inspect operations.
    Inspect = 1,
    /// Supported by the risk analysis operations.
    RiskAnalysis = 2,
}

impl gax::paginator::PageableResponse for ListInspectTemplatesResponse {
    type PageItem = InspectTemplate;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.inspect_templates
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListDeidentifyTemplatesResponse {
    type PageItem = DeidentifyTemplate;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.deidentify_templates
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListJobTriggersResponse {
    type PageItem = JobTrigger;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.job_triggers
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListDlpJobsResponse {
    type PageItem = DlpJob;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.jobs
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.clone()
    }
}

impl gax::paginator::PageableResponse for ListDiscoveryConfigsResponse {
    type PageItem = DiscoveryConfig;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.discovery_configs
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.clone()
    }
}
