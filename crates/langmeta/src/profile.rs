// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! Data types describing a language ecosystem profile.
//!
//! Field order in every struct is the order of the rendered output.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./profile_test.rs"]
mod profile_test;

/// Tooling and conventions of one programming ecosystem.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Language identifier, eg: `python`.
    pub language: String,

    /// Source file extensions, each including the leading `.`.
    pub extensions: Vec<String>,

    pub package_management: PackageManagement,
    pub frameworks: Frameworks,
    pub tools: Tools,
    pub testing: Testing,
    pub virtual_env: VirtualEnv,
    pub style: Style,
    pub typing: Typing,
    pub deployment: Deployment,
    pub patterns: Patterns,
}

/// Package managers and the files they own.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PackageManagement {
    pub primary: String,
    pub alternatives: Vec<String>,

    /// Dependency manifest read by the primary tool.
    pub requirements_file: String,

    /// Lock files written by the alternative tools.
    pub lock_files: Vec<String>,
}

/// Commonly used frameworks, by category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Frameworks {
    pub web: Vec<String>,
    pub data_science: Vec<String>,
    pub testing: Vec<String>,
    #[serde(rename = "async")]
    pub asynchronous: Vec<String>,
}

/// One tool name per development role.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Tools {
    pub linter: String,
    pub formatter: String,
    pub type_checker: String,
    pub security: String,
    pub complexity: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Testing {
    pub framework: String,
    pub coverage: String,
    pub config_file: String,
    pub test_directory: String,

    /// Human-readable description of test file naming.
    pub conventions: String,
}

/// Environment isolation tooling.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VirtualEnv {
    pub tool: String,
    pub alternatives: Vec<String>,
    pub activation: Activation,
}

/// Shell commands that activate an isolated environment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Activation {
    pub unix: String,
    pub windows: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Style {
    pub guide: String,

    /// Maximum line length enforced by the default formatter.
    pub line_length: u32,

    pub naming: Naming,
}

/// Naming convention per code element.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Naming {
    pub functions: String,
    pub classes: String,
    pub constants: String,
    pub modules: String,
}

/// Static type annotation support.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Typing {
    pub supported: bool,

    /// Minimum runtime version with full support, eg: `3.9+`.
    pub version: String,

    pub imports: String,
    pub checker: String,
}

/// Hosting platforms and serving stacks.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Deployment {
    pub platforms: Vec<String>,
    pub containerization: String,
    pub wsgi: Vec<String>,
    pub asgi: Vec<String>,
}

/// Idioms that are common in the ecosystem.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Patterns {
    pub dependency_injection: bool,
    pub decorators: bool,
    pub context_managers: bool,
    pub generators: bool,
    pub async_await: bool,
    pub dataclasses: bool,
}
