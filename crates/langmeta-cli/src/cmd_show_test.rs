// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_table_lists_every_group() {
    colored::control::set_override(false);
    let table = render_table(langmeta::get_config()).unwrap();

    assert!(table.starts_with("language: python\n"));
    assert!(table.contains("extensions: .py, .pyw, .pyx, .pyi\n"));
    assert!(table.contains("\ntools:\n  linter: pylint\n"));
    assert!(table.contains("\nvirtual_env:\n"));
    assert!(table.contains("  activation:\n    unix: source venv/bin/activate\n"));
    assert!(table.contains("    windows: venv\\Scripts\\activate\n"));
    assert!(table.contains("  line_length: 88\n"));
    assert!(table.contains("  supported: true\n"));
    assert!(table.contains("  wsgi: Gunicorn, uWSGI, Waitress\n"));
    assert!(table.contains("  async: asyncio, aiohttp, Twisted\n"));
}

#[rstest]
#[case(Value::Bool(false), "false")]
#[case(Value::String("PEP 8".to_string()), "PEP 8")]
#[case(Value::Number(88u64.into()), "88")]
fn test_scalar_text(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(scalar_text(&value).unwrap(), expected);
}

#[rstest]
fn test_nested_value_is_not_a_leaf() {
    let value = Value::Sequence(vec![Value::Bool(true)]);
    assert!(scalar_text(&value).is_err());
    assert!(scalar_text(&Value::Null).is_err());
}
