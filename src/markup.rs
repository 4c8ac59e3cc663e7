//! Jira wiki markup to Slack mrkdwn.
//!
//! Bold (`*x*`) and italic (`_x_`) are spelled the same in both dialects and
//! pass through unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{code(?:[:|][^}]*)?\}(.*?)\{code\}").unwrap());
static NOFORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{noformat\}").unwrap());
static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{quote\}").unwrap());
static MONOSPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*h[1-6]\.[ \t]*(.*?)[ \t]*(\r?)$").unwrap());
static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^bq\.[ \t]+").unwrap());
static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[~([^\]]+)\]").unwrap());
static NAMED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^|\]\n]+)\|([^\]\n]+)\]").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^|\]\s]+)\]").unwrap());
static COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{color(?::[^}]*)?\}").unwrap());
static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?\?([^?\n]+)\?\?").unwrap());
static STRIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|\s)-([^\s-](?:[^\n]*?[^\s-])?)-(\s|$)").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(#+)[ \t]+").unwrap());
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\*+)[ \t]+").unwrap());

/// Convert Jira wiki markup to Slack mrkdwn.
///
/// Block markers are translated one by one, so an opening `{quote}` without
/// its closing marker yields a lone fence.
pub fn jira_to_slack(text: &str) -> String {
    let mut result = CODE_BLOCK.replace_all(text, "```$1```").into_owned();
    result = NOFORMAT.replace_all(&result, "```").into_owned();
    result = QUOTE.replace_all(&result, "```").into_owned();
    result = MONOSPACE.replace_all(&result, "`$1`").into_owned();

    result = HEADER.replace_all(&result, "*$1*$2").into_owned();
    result = BLOCKQUOTE.replace_all(&result, "> ").into_owned();

    // Mentions before links: `[~user]` also matches the plain link pattern
    result = MENTION.replace_all(&result, "@$1").into_owned();
    result = NAMED_LINK.replace_all(&result, "<$2|$1>").into_owned();
    result = LINK.replace_all(&result, "<$1>").into_owned();

    result = COLOR.replace_all(&result, "").into_owned();
    result = CITATION.replace_all(&result, "_${1}_").into_owned();
    result = strike(result);

    result = ORDERED_ITEM
        .replace_all(&result, |caps: &Captures| {
            format!("{}1. ", indent(caps[1].len()))
        })
        .into_owned();
    BULLET_ITEM
        .replace_all(&result, |caps: &Captures| {
            format!("{}• ", indent(caps[1].len()))
        })
        .into_owned()
}

/// A match consumes its trailing whitespace, which hides the leading
/// whitespace of an adjacent `-word-`; repeat until nothing changes.
fn strike(mut text: String) -> String {
    loop {
        let next = STRIKE.replace_all(&text, "$1~$2~$3").into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(
            jira_to_slack("Ticket does not contain a description"),
            "Ticket does not contain a description"
        );
        assert_eq!(jira_to_slack("cut short..."), "cut short...");
        assert_eq!(jira_to_slack(""), "");
    }

    #[test]
    fn test_quote() {
        assert_eq!(jira_to_slack("{quote}hello{quote}"), "```hello```");
        assert_eq!(
            jira_to_slack("see:\n{quote}\nline one\nline two\n{quote}"),
            "see:\n```\nline one\nline two\n```"
        );
    }

    #[test]
    fn test_unbalanced_quote_kept() {
        assert_eq!(jira_to_slack("{quote}cut off"), "```cut off");
    }

    #[test]
    fn test_code_blocks() {
        assert_eq!(jira_to_slack("{code}let x = 1;{code}"), "```let x = 1;```");
        assert_eq!(
            jira_to_slack("{code:java}\nint x;\n{code}"),
            "```\nint x;\n```"
        );
        assert_eq!(
            jira_to_slack("{code:title=Main.java|borderStyle=solid}x{code}"),
            "```x```"
        );
        assert_eq!(jira_to_slack("{noformat}raw{noformat}"), "```raw```");
    }

    #[test]
    fn test_inline_markup() {
        assert_eq!(jira_to_slack("run {{cargo test}} now"), "run `cargo test` now");
        assert_eq!(jira_to_slack("*bold* and _italic_"), "*bold* and _italic_");
        assert_eq!(jira_to_slack("this is -gone- now"), "this is ~gone~ now");
        assert_eq!(jira_to_slack("??Someone Famous??"), "_Someone Famous_");
        assert_eq!(
            jira_to_slack("{color:red}alert{color} raised"),
            "alert raised"
        );
    }

    #[test]
    fn test_adjacent_strikethrough() {
        assert_eq!(jira_to_slack("a -one- -two- b"), "a ~one~ ~two~ b");
        assert_eq!(jira_to_slack("-x- -y- -z-"), "~x~ ~y~ ~z~");
    }

    #[test]
    fn test_dashes_without_strike() {
        assert_eq!(jira_to_slack("----"), "----");
        assert_eq!(jira_to_slack("- item"), "- item");
        assert_eq!(jira_to_slack("well-known re-use"), "well-known re-use");
    }

    #[test]
    fn test_headers_and_blockquote() {
        assert_eq!(jira_to_slack("h1. Summary"), "*Summary*");
        assert_eq!(jira_to_slack("intro\nh3.  Steps \nbody"), "intro\n*Steps*\nbody");
        assert_eq!(jira_to_slack("bq. quoted line"), "> quoted line");
        assert_eq!(
            jira_to_slack("h1. Summary\r\nbody\r\nh2. Steps \r\n"),
            "*Summary*\r\nbody\r\n*Steps*\r\n"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            jira_to_slack("[Docs|https://example.com/docs]"),
            "<https://example.com/docs|Docs>"
        );
        assert_eq!(
            jira_to_slack("see [https://example.com]"),
            "see <https://example.com>"
        );
        assert_eq!(jira_to_slack("ping [~jdoe] please"), "ping @jdoe please");
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            jira_to_slack("* one\n** nested\n* two"),
            "• one\n  • nested\n• two"
        );
        assert_eq!(jira_to_slack("# first\n## sub\n# second"), "1. first\n  1. sub\n1. second");
    }
}
