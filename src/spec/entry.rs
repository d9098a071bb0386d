//! Typed view of a single `argument_specs` option.

use crate::utils::serde::{deserialize_flexible_bool, is_false};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Ansible accepts a description as one string or as a list of paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

impl Description {
    /// The description as plain text, paragraphs separated by newlines
    pub fn text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Lines(lines) => lines.join("\n"),
        }
    }
}

/// One variable of a role's argument specification.
///
/// Keys the tooling does not model (`choices`, `elements`, nested `options`,
/// ...) are not part of this struct; they stay in the raw document untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgumentEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_flexible_bool",
        skip_serializing_if = "is_false"
    )]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ArgumentEntry {
    /// Entry for a variable that callers must provide
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// Entry for a variable with a default value
    pub fn with_default(value: Value) -> Self {
        Self {
            required: false,
            default: Some(value),
            ..Self::default()
        }
    }

    pub fn described(mut self, description: Option<String>) -> Self {
        self.description = description.map(Description::Text);
        self
    }

    pub fn description_text(&self) -> Option<String> {
        self.description.as_ref().map(Description::text)
    }

    /// Parse an entry from its YAML value; a bare `name:` is an empty entry
    pub fn from_value(value: &Value) -> std::result::Result<Self, serde_yaml::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            other => serde_yaml::from_value(other.clone()),
        }
    }
}
