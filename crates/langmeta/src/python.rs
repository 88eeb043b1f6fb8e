// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! The Python ecosystem profile.

use crate::profile::{
    Activation, Deployment, Frameworks, LanguageProfile, Naming, PackageManagement, Patterns,
    Style, Testing, Tools, Typing, VirtualEnv,
};

#[cfg(test)]
#[path = "./python_test.rs"]
mod python_test;

/// Line length used by black, not the 79 of PEP 8.
pub const PYTHON_LINE_LENGTH: u32 = 88;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build an owned copy of the Python profile.
///
/// Prefer [`crate::get_config`], which shares a single instance.
pub fn python_profile() -> LanguageProfile {
    LanguageProfile {
        language: "python".to_string(),
        extensions: strings(&[".py", ".pyw", ".pyx", ".pyi"]),
        package_management: PackageManagement {
            primary: "pip".to_string(),
            alternatives: strings(&["poetry", "pipenv", "conda"]),
            requirements_file: "requirements.txt".to_string(),
            lock_files: strings(&["Pipfile.lock", "poetry.lock"]),
        },
        frameworks: Frameworks {
            web: strings(&["Django", "Flask", "FastAPI", "Pyramid", "Tornado"]),
            data_science: strings(&["NumPy", "Pandas", "Scikit-learn", "TensorFlow", "PyTorch"]),
            testing: strings(&["pytest", "unittest", "nose2", "doctest"]),
            asynchronous: strings(&["asyncio", "aiohttp", "Twisted"]),
        },
        tools: Tools {
            linter: "pylint".to_string(),
            formatter: "black".to_string(),
            type_checker: "mypy".to_string(),
            security: "bandit".to_string(),
            complexity: "radon".to_string(),
        },
        testing: Testing {
            framework: "pytest".to_string(),
            coverage: "coverage".to_string(),
            config_file: "pytest.ini".to_string(),
            test_directory: "tests/".to_string(),
            conventions: "test_*.py or *_test.py".to_string(),
        },
        virtual_env: VirtualEnv {
            tool: "venv".to_string(),
            alternatives: strings(&["virtualenv", "conda", "pyenv"]),
            activation: Activation {
                unix: "source venv/bin/activate".to_string(),
                windows: r"venv\Scripts\activate".to_string(),
            },
        },
        style: Style {
            guide: "PEP 8".to_string(),
            line_length: PYTHON_LINE_LENGTH,
            naming: Naming {
                functions: "snake_case".to_string(),
                classes: "PascalCase".to_string(),
                constants: "UPPER_SNAKE_CASE".to_string(),
                modules: "snake_case".to_string(),
            },
        },
        typing: Typing {
            supported: true,
            version: "3.9+".to_string(),
            imports: "from typing import ...".to_string(),
            checker: "mypy".to_string(),
        },
        deployment: Deployment {
            platforms: strings(&["Heroku", "AWS Lambda", "Google Cloud", "Azure"]),
            containerization: "Docker".to_string(),
            wsgi: strings(&["Gunicorn", "uWSGI", "Waitress"]),
            asgi: strings(&["Uvicorn", "Hypercorn", "Daphne"]),
        },
        patterns: Patterns {
            dependency_injection: true,
            decorators: true,
            context_managers: true,
            generators: true,
            async_await: true,
            dataclasses: true,
        },
    }
}
