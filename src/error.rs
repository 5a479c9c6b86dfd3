#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the referral-seo crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Slug parsing, building and display derivation never fail; these errors
//! only arise while loading router configuration or audit inputs and while
//! writing reports.

use std::path::{Path, PathBuf};

/// Unified error type returned by the configuration loader, the audit and
/// the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading input documents.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse document: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when a document violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps JSON errors when writing reports or reading JSON inputs.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation
    /// and is what the CLI prints before exiting.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("something went wrong");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "something went wrong");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::validation("display me");
        assert_eq!(error.to_string(), error.to_display_string());
        assert_eq!(error.to_display_string(), "invalid configuration: display me");
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/router.yaml");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn serde_json_conversion_maps_to_serialize_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Serialize { .. }));
    }
}
