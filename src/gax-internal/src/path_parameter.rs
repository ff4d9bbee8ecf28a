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

//! Binds request fields to URI templates.
//!
//! Each HTTP/JSON method has one or more URI templates, such as
//! `/v2/{parent=projects/*/locations/*}/inspectTemplates`. The transport tries
//! each template in order and uses the first one whose variable matches the
//! request field.

use gax::error::Error;
use gax::error::binding::{BindingError, PathMismatch, SubstitutionFail};
use http::Method;

/// One segment in a path template variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Matches exactly one path component with this value.
    Literal(&'static str),
    /// Matches exactly one non-empty path component, i.e., `*`.
    SingleWildcard,
    /// Matches one or more non-empty path components, i.e., `**`.
    MultiWildcard,
}

/// Checks if a string field matches a given path template.
///
/// If it matches, it returns `Some(value)`. Having a composable function
/// simplifies the generated code.
///
/// # Example
/// ```
/// # use google_cloud_dlp_gax_internal::path_parameter::{try_match, Segment};
/// use Segment::{Literal, SingleWildcard};
/// let p = try_match("projects/my-project", &[Literal("projects"), SingleWildcard]);
/// assert_eq!(p, Some("projects/my-project"));
/// ```
pub fn try_match<'a>(value: &'a str, template: &[Segment]) -> Option<&'a str> {
    let mut parts = value.split('/');
    for segment in template {
        match segment {
            Segment::Literal(l) => {
                if parts.next()? != *l {
                    return None;
                }
            }
            Segment::SingleWildcard => {
                if parts.next()?.is_empty() {
                    return None;
                }
            }
            Segment::MultiWildcard => {
                let mut count = 0;
                for p in parts.by_ref() {
                    if p.is_empty() {
                        return None;
                    }
                    count += 1;
                }
                if count == 0 {
                    return None;
                }
            }
        }
    }
    parts.next().is_none().then_some(value)
}

/// Parses a variable pattern such as `projects/*/locations/*`.
fn segments(pattern: &'static str) -> Vec<Segment> {
    pattern
        .split('/')
        .map(|s| match s {
            "*" => Segment::SingleWildcard,
            "**" => Segment::MultiWildcard,
            l => Segment::Literal(l),
        })
        .collect()
}

/// A URI template for an HTTP/JSON method.
///
/// Templates have at most one variable, with the format `{field=pattern}`.
#[derive(Clone, Debug)]
pub struct PathTemplate {
    pub method: Method,
    pub template: &'static str,
}

struct Variable {
    prefix: &'static str,
    field_name: &'static str,
    pattern: &'static str,
    suffix: &'static str,
}

impl PathTemplate {
    pub const fn new(method: Method, template: &'static str) -> Self {
        Self { method, template }
    }

    fn variable(&self) -> Option<Variable> {
        let (prefix, rest) = self.template.split_once('{')?;
        let (variable, suffix) = rest.split_once('}')?;
        let (field_name, pattern) = variable.split_once('=').unwrap_or((variable, "*"));
        Some(Variable {
            prefix,
            field_name,
            pattern,
            suffix,
        })
    }

    /// The name of the request field used in this template, if any.
    pub fn field_name(&self) -> Option<&'static str> {
        self.variable().map(|v| v.field_name)
    }

    /// Expands the template using `value` for its variable.
    pub fn expand(&self, value: &str) -> std::result::Result<String, PathMismatch> {
        let Some(variable) = self.variable() else {
            return Ok(self.template.to_string());
        };
        let mismatch = |problem| PathMismatch {
            template: self.template,
            field_name: variable.field_name,
            problem,
        };
        if value.is_empty() {
            return Err(mismatch(SubstitutionFail::UnsetExpecting(variable.pattern)));
        }
        let matched = try_match(value, &segments(variable.pattern)).ok_or_else(|| {
            mismatch(SubstitutionFail::MismatchExpecting(
                value.to_string(),
                variable.pattern,
            ))
        })?;
        Ok(format!("{}{matched}{}", variable.prefix, variable.suffix))
    }
}

/// Selects the first template in `templates` that matches `value`.
///
/// Returns the HTTP method and the expanded path. If no template matches the
/// error lists every template and why it failed.
pub fn bind(templates: &[PathTemplate], value: &str) -> gax::Result<(Method, String)> {
    let mut paths = Vec::new();
    for t in templates {
        match t.expand(value) {
            Ok(path) => return Ok((t.method.clone(), path)),
            Err(e) => paths.push(e),
        }
    }
    Err(Error::binding(BindingError { paths }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("projects/my-project", Some("projects/my-project"))]
    #[test_case("", None)]
    #[test_case("projects/", None)]
    #[test_case("projects/my-project/", None)]
    #[test_case("projects/my-project/locations/my-location", None)]
    #[test_case("organizations/my-org", None)]
    fn single(input: &str, want: Option<&str>) {
        let got = try_match(input, &[Segment::Literal("projects"), Segment::SingleWildcard]);
        assert_eq!(got, want);
    }

    #[test_case("projects/p/dlpJobs/j", Some("projects/p/dlpJobs/j"))]
    #[test_case("projects/p/dlpJobs/j/extra", Some("projects/p/dlpJobs/j/extra"))]
    #[test_case("projects/p", None)]
    #[test_case("projects/p/dlpJobs/j//x", None)]
    fn multi(input: &str, want: Option<&str>) {
        let got = try_match(
            input,
            &[Segment::Literal("projects"), Segment::SingleWildcard, Segment::MultiWildcard],
        );
        assert_eq!(got, want);
    }

    const TEMPLATES: [PathTemplate; 3] = [
        PathTemplate::new(Method::GET, "/v2/{parent=organizations/*}/inspectTemplates"),
        PathTemplate::new(Method::GET, "/v2/{parent=projects/*/locations/*}/inspectTemplates"),
        PathTemplate::new(Method::GET, "/v2/{parent=projects/*}/inspectTemplates"),
    ];

    #[test_case("organizations/o", "/v2/organizations/o/inspectTemplates")]
    #[test_case("projects/p/locations/l", "/v2/projects/p/locations/l/inspectTemplates")]
    #[test_case("projects/p", "/v2/projects/p/inspectTemplates")]
    fn bind_success(value: &str, want: &str) -> anyhow::Result<()> {
        let (method, path) = bind(&TEMPLATES, value)?;
        assert_eq!(method, Method::GET);
        assert_eq!(path, want);
        Ok(())
    }

    #[test]
    fn bind_no_variable() -> anyhow::Result<()> {
        let templates = [
            PathTemplate::new(Method::GET, "/v2/{parent=locations/*}/infoTypes"),
            PathTemplate::new(Method::GET, "/v2/infoTypes"),
        ];
        assert_eq!(templates[1].field_name(), None);
        let (_, path) = bind(&templates, "")?;
        assert_eq!(path, "/v2/infoTypes");
        let (_, path) = bind(&templates, "locations/l")?;
        assert_eq!(path, "/v2/locations/l/infoTypes");
        Ok(())
    }

    #[test]
    fn bind_unset() {
        let err = bind(&TEMPLATES, "").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<BindingError>());
        let paths = source.map(|e| e.paths.len());
        assert_eq!(paths, Some(3), "{err:?}");
        let first = source.and_then(|e| e.paths.first());
        assert_eq!(
            first.map(|p| &p.problem),
            Some(&SubstitutionFail::UnsetExpecting("organizations/*"))
        );
        assert_eq!(first.map(|p| p.field_name), Some("parent"));
    }

    #[test]
    fn bind_mismatch() {
        let err = bind(&TEMPLATES, "folders/f").unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("folders/f"), "{err}");
    }
}
