use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct JiraUser {
    /// Tracker username, the key looked up in a [`UserMap`].
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

/// Jira username to Slack username.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct UserMap(HashMap<String, String>);

impl UserMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, jira: impl Into<String>, slack: impl Into<String>) {
        self.0.insert(jira.into(), slack.into());
    }

    pub fn get(&self, jira: &str) -> Option<&str> {
        self.0.get(jira).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for UserMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}
