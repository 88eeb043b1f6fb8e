// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `langmeta show` command.

use std::io::Write;

use clap::{Args, ValueEnum};
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use serde_yaml::Value;

#[cfg(test)]
#[path = "./cmd_show_test.rs"]
mod cmd_show_test;

/// Display the language profile
#[derive(Debug, Default, Args)]
pub struct CmdShow {
    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let profile = langmeta::get_config();
        tracing::debug!(format = ?self.format, "rendering profile");

        let text = match self.format {
            OutputFormat::Json => profile.render(langmeta::Format::Json)? + "\n",
            // serde_yaml already ends the document with a newline
            OutputFormat::Yaml => profile.render(langmeta::Format::Yaml)?,
            OutputFormat::Table => render_table(profile)?,
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes()).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;
        Ok(0)
    }
}

/// Render the profile as colored, indented sections.
///
/// Groups become bold headers, lists are joined on one line.
fn render_table(profile: &langmeta::LanguageProfile) -> Result<String> {
    let value = serde_yaml::to_value(profile).into_diagnostic()?;
    let mut out = String::new();
    if let Value::Mapping(groups) = &value {
        for (key, value) in groups {
            if let Value::Mapping(_) = value {
                out.push('\n');
            }
            write_entry(&mut out, &scalar_text(key)?, value, 0)?;
        }
    }
    Ok(out)
}

fn write_entry(out: &mut String, key: &str, value: &Value, depth: usize) -> Result<()> {
    let indent = "  ".repeat(depth);
    match value {
        Value::Mapping(children) => {
            out.push_str(&format!("{indent}{}\n", format!("{key}:").bold()));
            for (child_key, child) in children {
                write_entry(out, &scalar_text(child_key)?, child, depth + 1)?;
            }
        }
        Value::Sequence(items) => {
            let items = items.iter().map(scalar_text).collect::<Result<Vec<_>>>()?;
            out.push_str(&format!(
                "{indent}{}: {}\n",
                key.cyan(),
                items.join(", ").green()
            ));
        }
        other => {
            out.push_str(&format!(
                "{indent}{}: {}\n",
                key.cyan(),
                scalar_text(other)?.green()
            ));
        }
    }
    Ok(())
}

/// Plain text of a profile leaf; the profile holds only strings, bools and numbers.
fn scalar_text(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(miette::miette!("Unexpected profile value: {other:?}")),
    }
}
