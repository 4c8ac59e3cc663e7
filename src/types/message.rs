use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A Slack attachment under construction.
///
/// Keys other than `text` and `fields` (title, color, ...) belong to the
/// caller and are carried through untouched.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OutgoingMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl OutgoingMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn push_short_field(&mut self, title: impl Into<String>, value: impl Into<String>) {
        self.fields.push(Field {
            title: title.into(),
            value: value.into(),
            short: true,
        });
    }
}
