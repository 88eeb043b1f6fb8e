// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! langmeta - Static Language Ecosystem Profile
//!
//! This crate declares the tooling and conventions of the Python ecosystem
//! (package managers, linters, style rules, deployment targets) as one
//! immutable [`LanguageProfile`], and exposes it through [`get_config`].
//!
//! # Example
//!
//! ```
//! let profile = langmeta::get_config();
//! assert_eq!(profile.language, "python");
//! assert_eq!(profile.tools.linter, "pylint");
//! assert_eq!(profile.style.line_length, 88);
//! ```
//!
//! The profile can be rendered for display:
//!
//! ```
//! let json = langmeta::get_config().to_json().unwrap();
//! assert!(json.contains("\"language\": \"python\""));
//! ```

pub mod error;
pub mod profile;
pub mod python;
pub mod registry;
pub mod render;

pub use error::{Error, Result};
pub use profile::{
    Activation, Deployment, Frameworks, LanguageProfile, Naming, PackageManagement, Patterns,
    Style, Testing, Tools, Typing, VirtualEnv,
};
pub use python::{PYTHON_LINE_LENGTH, python_profile};
pub use registry::get_config;
pub use render::Format;
