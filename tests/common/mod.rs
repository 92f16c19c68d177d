//! Shared fixtures for the tristate integration tests.
//!
//! Each integration test binary compiles this module separately, so not
//! every fixture is used by every binary.
#![allow(dead_code)]

use serde_json::json;
use tristate::value::Value;

/// Spellings that must classify as true.
pub const TRUE_SPELLINGS: [&str; 5] = ["y", "Y", "yes", "Yes", "YES"];

/// Spellings that must classify as false.
pub const FALSE_SPELLINGS: [&str; 5] = ["n", "N", "no", "No", "NO"];

/// Text that must classify as unknown without erroring.
pub const UNMAPPED_TEXT: [&str; 8] = ["maybe", "", "1", "xyz", "true", "yess", " y", "nope"];

/// One value of every non-text `Value` variant.
pub fn non_text_values() -> Vec<Value> {
    vec![
        Value::Nil,
        Value::Number(1.0),
        Value::Bool(false),
        Value::List(vec![Value::from("yes")]),
        Value::from(json!({"answer": "yes"})),
    ]
}

/// One value of every non-text JSON variant.
pub fn non_text_json() -> Vec<serde_json::Value> {
    vec![
        json!(null),
        json!(1),
        json!(2.5),
        json!(true),
        json!(["y"]),
        json!({"y": "n"}),
    ]
}
