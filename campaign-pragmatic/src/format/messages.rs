//! Specifies logic to resolve localized messages by their ids.

#[cfg(test)]
#[path = "../../tests/unit/format/messages_test.rs"]
mod messages_test;

use crate::format::{MultiFormatError, create_deserialize_error};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, Read};

/// A message id with parameter values which is resolved to a text by [`MessageCatalog`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    /// A message id.
    pub id: String,
    /// Values of message parameters.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

impl Message {
    /// Creates a new instance of `Message` without parameter values.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), values: BTreeMap::default() }
    }

    /// Adds a parameter value.
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

/// A message resolved to its text.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolvedMessage {
    /// A message id.
    pub id: String,
    /// A message text.
    pub text: String,
}

/// Keeps message templates by their ids. A template refers to parameters as `{name}`.
#[derive(Clone, Debug, Default)]
pub struct MessageCatalog {
    templates: FxHashMap<String, String>,
}

impl MessageCatalog {
    /// Creates a new instance of `MessageCatalog`.
    pub fn new(templates: FxHashMap<String, String>) -> Self {
        Self { templates }
    }

    /// Formats message using its template. Unknown message is formatted as its id, unknown
    /// parameters are left as they are.
    pub fn format(&self, message: &Message) -> String {
        self.templates
            .get(message.id.as_str())
            .map_or_else(|| message.id.clone(), |template| substitute(template.as_str(), &message.values))
    }

    /// Resolves message to its text keeping message id.
    pub fn resolve(&self, message: &Message) -> ResolvedMessage {
        ResolvedMessage { id: message.id.clone(), text: self.format(message) }
    }
}

/// Deserializes message catalog from a flat json object.
pub fn deserialize_messages<R: Read>(reader: BufReader<R>) -> Result<MessageCatalog, MultiFormatError> {
    serde_json::from_reader(reader)
        .map(MessageCatalog::new)
        .map_err(|err| create_deserialize_error("E0002", "message catalog", err))
}

fn substitute(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let tail = &rest[start..];

        let Some(end) = tail.find('}') else {
            break;
        };

        // NOTE a placeholder starts at the last brace before the closing one: "{a{b}" keeps "{a"
        let open = tail[..end].rfind('{').unwrap_or_default();
        result.push_str(&rest[..start + open]);

        match values.get(&tail[open + 1..end]) {
            Some(value) => result.push_str(value),
            None => result.push_str(&tail[open..=end]),
        }

        rest = &tail[end + 1..];
    }

    result.push_str(rest);

    result
}
