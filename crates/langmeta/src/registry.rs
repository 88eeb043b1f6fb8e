// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! Process-wide access to the language profile.

use once_cell::sync::Lazy;

use crate::profile::LanguageProfile;
use crate::python::python_profile;

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

static PROFILE: Lazy<LanguageProfile> = Lazy::new(|| {
    let profile = python_profile();
    tracing::debug!(language = %profile.language, "loaded language profile");
    profile
});

/// Return the complete language profile.
///
/// The profile is built on first access and never changes afterwards, so
/// every call returns the same instance.
pub fn get_config() -> &'static LanguageProfile {
    &PROFILE
}
