mod issue;
mod message;
mod user;

pub use issue::{Issue, IssueFields, Priority, Status};
pub use message::{Field, OutgoingMessage};
pub use user::{JiraUser, UserMap};
