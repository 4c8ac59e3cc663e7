use serde::{Deserialize, Serialize};

use super::JiraUser;
use crate::error::Result;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    #[serde(default)]
    pub key: Option<String>,
    pub fields: IssueFields,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub reporter: JiraUser,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
    /// Raw tracker timestamp, e.g. `2017-03-14T15:04:05.000+0000`
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Status {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Priority {
    pub name: String,
}

impl Issue {
    /// Parse an issue as returned by the tracker's REST API.
    ///
    /// Fails when a required nested object (`status`, `priority`,
    /// `reporter`) is missing.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
