// SPDX-FileCopyrightText: 2025 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Lenient field access over parsed JSON documents.
//!
//! Backends disagree on which fields they send, so every read goes through
//! [`field_or`]: a missing key and a key holding the wrong JSON type both
//! yield the caller's default.

use serde_json::Value;

/// A Rust type that can be read out of a single JSON value without coercion.
pub trait FieldValue: Sized {
    /// Returns `None` when `value` is not exactly representable as `Self`.
    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for i32 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl FieldValue for i64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FieldValue for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

/// Whether `doc` is an object containing `key`, whatever its value.
pub fn has_field(doc: &Value, key: &str) -> bool {
    doc.as_object().is_some_and(|obj| obj.contains_key(key))
}

/// Read `key` from `doc`, or `default` if absent or of the wrong type.
pub fn field_or<T: FieldValue>(doc: &Value, key: &str, default: T) -> T {
    doc.get(key).and_then(T::from_json).unwrap_or(default)
}
