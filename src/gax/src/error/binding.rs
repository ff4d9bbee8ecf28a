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

/// A failure to determine the request [URI].
///
/// Some RPCs correspond to multiple URIs. The contents of the request determine
/// which URI is used. The client library considers all possible URIs, and only
/// returns an error if no URIs work.
///
/// For more details on the specification, see: [AIP-127].
///
/// [aip-127]: https://google.aip.dev/127
/// [uri]: https://developer.mozilla.org/en-US/docs/Glossary/URI
#[derive(thiserror::Error, Debug, PartialEq)]
pub struct BindingError {
    /// All the templates considered, and why the binding failed for each.
    pub paths: Vec<PathMismatch>,
}

/// A failure to bind the request to one URI template.
#[derive(Debug, PartialEq)]
pub struct PathMismatch {
    /// The URI template, for example `/v2/{parent=projects/*}/dlpJobs`.
    pub template: &'static str,
    /// The name of the request field used in the template.
    pub field_name: &'static str,
    /// Why the substitution failed.
    pub problem: SubstitutionFail,
}

/// Ways substituting a request field into a URI template can fail.
#[derive(Debug, PartialEq)]
pub enum SubstitutionFail {
    /// The field was not set, the template expects the given format.
    UnsetExpecting(&'static str),
    /// The field was set to `.0` but does not match the format in `.1`.
    MismatchExpecting(String, &'static str),
}

impl std::fmt::Display for PathMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            SubstitutionFail::UnsetExpecting(expected) => write!(
                f,
                "[{}] field `{}` needs to be set and match: '{}'",
                self.template, self.field_name, expected
            ),
            SubstitutionFail::MismatchExpecting(actual, expected) => write!(
                f,
                "[{}] field `{}` should match: '{}'; found: '{}'",
                self.template, self.field_name, expected, actual
            ),
        }
    }
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at least one of the conditions must be met: ")?;
        for (i, sub) in self.paths.iter().enumerate() {
            if i != 0 {
                write!(f, " OR ")?;
            }
            write!(f, "({}) {}", i + 1, sub)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_path_mismatch() {
        let pm = PathMismatch {
            template: "/v2/{parent=projects/*}/dlpJobs",
            field_name: "parent",
            problem: SubstitutionFail::MismatchExpecting(
                "project-id-only".to_string(),
                "projects/*",
            ),
        };
        let fmt = pm.to_string();
        assert!(fmt.contains("parent"), "{fmt}");
        assert!(fmt.contains("should match"), "{fmt}");
        assert!(fmt.contains("projects/*"), "{fmt}");
        assert!(fmt.contains("project-id-only"), "{fmt}");

        let pm = PathMismatch {
            template: "/v2/{name=projects/*/dlpJobs/*}",
            field_name: "name",
            problem: SubstitutionFail::UnsetExpecting("projects/*/dlpJobs/*"),
        };
        let fmt = pm.to_string();
        assert!(fmt.contains("needs to be set"), "{fmt}");
        assert!(!fmt.contains("found"), "{fmt}");
    }

    #[test]
    fn fmt_binding_error() {
        let e = BindingError {
            paths: vec![
                PathMismatch {
                    template: "/v2/{parent=projects/*}/dlpJobs",
                    field_name: "parent",
                    problem: SubstitutionFail::MismatchExpecting(
                        "organizations/o".to_string(),
                        "projects/*",
                    ),
                },
                PathMismatch {
                    template: "/v2/{parent=projects/*/locations/*}/dlpJobs",
                    field_name: "parent",
                    problem: SubstitutionFail::MismatchExpecting(
                        "organizations/o".to_string(),
                        "projects/*/locations/*",
                    ),
                },
            ],
        };
        let fmt = e.to_string();
        assert!(fmt.contains("one of the conditions must be met"), "{fmt}");
        let clauses: Vec<&str> = fmt.split(" OR ").collect();
        assert_eq!(clauses.len(), 2, "{fmt}");
        assert!(clauses[0].contains("(1)"), "{fmt}");
        assert!(clauses[1].contains("(2)"), "{fmt}");
        assert!(clauses[1].contains("projects/*/locations/*"), "{fmt}");
    }
}
