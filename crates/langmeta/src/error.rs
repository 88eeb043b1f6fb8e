// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for langmeta operations.

use miette::Diagnostic;
use thiserror::Error;

/// Convenience Result type with langmeta Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a profile.
///
/// Reading a profile never fails; only the text encoders can.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Profile could not be encoded as JSON
    #[error("Failed to encode profile as JSON: {0}")]
    #[diagnostic(code(langmeta::json_encode))]
    Json(#[from] serde_json::Error),

    /// Profile could not be encoded as YAML
    #[error("Failed to encode profile as YAML: {0}")]
    #[diagnostic(code(langmeta::yaml_encode))]
    Yaml(#[from] serde_yaml::Error),
}
