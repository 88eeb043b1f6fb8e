// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_async_frameworks_use_async_key() {
    let json = r#"{"web": [], "data_science": [], "testing": [], "async": ["trio"]}"#;
    let frameworks: Frameworks = serde_json::from_str(json).expect("Should parse frameworks");
    assert_eq!(frameworks.asynchronous, vec!["trio"]);

    let value = serde_json::to_value(&frameworks).unwrap();
    assert!(value.get("async").is_some());
    assert!(value.get("asynchronous").is_none());
}

#[rstest]
fn test_profile_from_yaml_document() {
    let yaml = r#"
language: python
extensions: [".py", ".pyw", ".pyx", ".pyi"]
package_management:
  primary: pip
  alternatives: [poetry, pipenv, conda]
  requirements_file: requirements.txt
  lock_files: [Pipfile.lock, poetry.lock]
frameworks:
  web: [Django, Flask, FastAPI, Pyramid, Tornado]
  data_science: [NumPy, Pandas, Scikit-learn, TensorFlow, PyTorch]
  testing: [pytest, unittest, nose2, doctest]
  async: [asyncio, aiohttp, Twisted]
tools:
  linter: pylint
  formatter: black
  type_checker: mypy
  security: bandit
  complexity: radon
testing:
  framework: pytest
  coverage: coverage
  config_file: pytest.ini
  test_directory: tests/
  conventions: "test_*.py or *_test.py"
virtual_env:
  tool: venv
  alternatives: [virtualenv, conda, pyenv]
  activation:
    unix: source venv/bin/activate
    windows: 'venv\Scripts\activate'
style:
  guide: PEP 8
  line_length: 88
  naming:
    functions: snake_case
    classes: PascalCase
    constants: UPPER_SNAKE_CASE
    modules: snake_case
typing:
  supported: true
  version: "3.9+"
  imports: from typing import ...
  checker: mypy
deployment:
  platforms: [Heroku, AWS Lambda, Google Cloud, Azure]
  containerization: Docker
  wsgi: [Gunicorn, uWSGI, Waitress]
  asgi: [Uvicorn, Hypercorn, Daphne]
patterns:
  dependency_injection: true
  decorators: true
  context_managers: true
  generators: true
  async_await: true
  dataclasses: true
"#;
    let profile: LanguageProfile = serde_yaml::from_str(yaml).expect("Should parse profile");
    assert_eq!(profile, crate::python_profile());
}

#[rstest]
fn test_missing_group_is_rejected() {
    let result: Result<LanguageProfile, _> =
        serde_yaml::from_str("language: python\nextensions: [\".py\"]\n");
    assert!(result.is_err(), "Profile groups are not optional");
}
