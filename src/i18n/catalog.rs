// SPDX-License-Identifier: MPL-2.0
//! Flattened view of one JSON locale file.
//!
//! Locale files are nested objects of strings. Lookups use dotted keys, so
//! `{"voice": {"actions": {"success": "..."}}}` is reached as
//! `voice.actions.success`.

use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Separator between nested key segments.
pub const KEY_SEPARATOR: char = '.';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parses a JSON locale document.
    pub fn from_json(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Self::from_value(&value))
    }

    /// Flattens a parsed document. Non-string leaves are ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut entries = HashMap::new();
        flatten(value, &mut String::new(), &mut entries);
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(value: &Value, prefix: &mut String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push(KEY_SEPARATOR);
                }
                prefix.push_str(key);
                flatten(child, prefix, out);
                prefix.truncate(restore);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix.clone(), text.clone());
        }
        _ => {}
    }
}

/// Replaces `{{name}}` placeholders with their values.
///
/// Unknown placeholders are left untouched.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{{{name}}}}}"), value);
    }
    result
}
