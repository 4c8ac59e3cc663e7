//! Shapes an [`Issue`] into a Slack [`OutgoingMessage`].

use chrono::{DateTime, Local, TimeZone};

use crate::calendar::{calendar_from_str, INVALID_DATE};
use crate::markup::jira_to_slack;
use crate::types::{Issue, JiraUser, OutgoingMessage, UserMap};

pub const DEFAULT_TRUNCATION_LENGTH: usize = 1000;
pub const EMPTY_DESCRIPTION: &str = "Ticket does not contain a description";
pub const UNASSIGNED: &str = "Unassigned";

/// `@handle` for a mapped Jira username, empty when there is no mapping.
pub fn resolve_slack_username(user_map: &UserMap, username: &str) -> String {
    match user_map.get(username) {
        Some(slack) if !slack.is_empty() => format!("@{slack}"),
        _ => String::new(),
    }
}

/// Format a ticket description for display.
///
/// A missing or empty description is replaced with a placeholder. The text is
/// cut to `truncation_length` characters (default 1000) with `...` appended
/// when anything was dropped, then converted to Slack markup. Truncation
/// happens first, so a cut inside a `{quote}` block leaves an open fence.
pub fn transform_description(description: Option<&str>, truncation_length: Option<usize>) -> String {
    let desc = match description {
        Some(d) if !d.is_empty() => d,
        _ => EMPTY_DESCRIPTION,
    };
    let limit = truncation_length.unwrap_or(DEFAULT_TRUNCATION_LENGTH);

    let truncated = match desc.char_indices().nth(limit) {
        Some((cut, _)) => {
            tracing::debug!(limit, total = desc.chars().count(), "truncating description");
            format!("{}...", &desc[..cut])
        }
        None => desc.to_string(),
    };

    jira_to_slack(&truncated)
}

/// Prefix the message text with the issue's status and priority.
pub fn transform_minimal_response(issue: &Issue, response: &mut OutgoingMessage) {
    response.text = format!(
        "`Status: {}` `Priority: {}`: {}",
        issue.fields.status.name, issue.fields.priority.name, response.text
    );
}

/// Append the Created, Updated, Status, Priority, Reporter and Assignee
/// fields, with dates rendered relative to the current local time.
pub fn transform_full_response(
    issue: &Issue,
    response: &mut OutgoingMessage,
    user_map: Option<&UserMap>,
) {
    transform_full_response_at(issue, response, user_map, &Local::now());
}

/// [`transform_full_response`] with an explicit reference instant.
pub fn transform_full_response_at<Tz: TimeZone>(
    issue: &Issue,
    response: &mut OutgoingMessage,
    user_map: Option<&UserMap>,
    now: &DateTime<Tz>,
) {
    let empty = UserMap::new();
    let user_map = user_map.unwrap_or(&empty);
    let fields = &issue.fields;

    response.push_short_field("Created", render_timestamp(fields.created.as_deref(), now));
    response.push_short_field("Updated", render_timestamp(fields.updated.as_deref(), now));
    response.push_short_field("Status", fields.status.name.as_str());
    response.push_short_field("Priority", fields.priority.name.as_str());
    response.push_short_field("Reporter", user_label(user_map, &fields.reporter));

    let assignee = match &fields.assignee {
        Some(user) => user_label(user_map, user),
        None => UNASSIGNED.to_string(),
    };
    response.push_short_field("Assignee", assignee);
}

fn render_timestamp<Tz: TimeZone>(raw: Option<&str>, now: &DateTime<Tz>) -> String {
    match raw {
        Some(raw) => calendar_from_str(raw, now),
        None => INVALID_DATE.to_string(),
    }
}

fn user_label(user_map: &UserMap, user: &JiraUser) -> String {
    let handle = user
        .name
        .as_deref()
        .map(|name| resolve_slack_username(user_map, name))
        .unwrap_or_default();

    if handle.is_empty() {
        user.display_name.clone()
    } else {
        handle
    }
}
