//! Formats Jira issues into Slack attachment payloads.
//!
//! ```no_run
//! use jira_slack_response::{transform, Issue, OutgoingMessage, UserMap};
//!
//! # fn main() -> jira_slack_response::Result<()> {
//! let issue = Issue::from_json(&std::fs::read_to_string("issue.json")?)?;
//! let users: UserMap = [("jdoe", "john")].into_iter().collect();
//!
//! let mut message = OutgoingMessage::new(transform::transform_description(
//!     issue.fields.description.as_deref(),
//!     None,
//! ));
//! transform::transform_minimal_response(&issue, &mut message);
//! transform::transform_full_response(&issue, &mut message, Some(&users));
//! println!("{}", message.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod markup;
pub mod transform;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{Field, Issue, JiraUser, OutgoingMessage, UserMap};
