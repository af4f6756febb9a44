//! In-memory settings store shared between the CLI and the validation core.
//!
//! The store is a plain key-value map owned by the caller and passed
//! explicitly to whoever needs it. Reads of unset keys yield empty values,
//! so "never set" and "set to empty" behave uniformly.

use std::collections::BTreeMap;

/// Key for the test-selection focus regex.
pub const FOCUS: &str = "focus";
/// Key for flags forwarded verbatim to the underlying test runner.
pub const EXTRA_ARGS: &str = "extra-args";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Str(String),
    List(Vec<String>),
}

/// Mutable settings store keyed by name.
///
/// Sets replace any previous value under the key and are immediately visible
/// to subsequent reads. The store does no locking; exclusive access during a
/// validation call is enforced by the `&mut` borrow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string value under `key`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), Value::Str(value.into()));
    }

    /// Set a string-list value under `key`.
    pub fn set_list(&mut self, key: &str, values: Vec<String>) {
        self.values.insert(key.to_string(), Value::List(values));
    }

    /// Read a string value; unset or non-string keys read as `""`.
    pub fn string(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(Value::Str(value)) => value,
            _ => "",
        }
    }

    /// Read a string-list value; unset or non-list keys read as `[]`.
    pub fn string_list(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(Value::List(values)) => values,
            _ => &[],
        }
    }
}
