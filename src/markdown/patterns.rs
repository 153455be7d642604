//! Cached regex patterns for the Markdown passes.
//!
//! Every pattern is a literal compiled once on first use. Patterns marked
//! `(?m)` are line anchored; everything else scans the whole text.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markdown pattern literal must compile")
}

// === Headers ===

pub static H3: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^### (.*)$"));
pub static H2: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^## (.*)$"));
pub static H1: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^# (.*)$"));

// === Inline spans ===

/// Non-greedy so `**a** and **b**` yields two spans.
pub static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
pub static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));

/// Triple backtick fence; the body may span lines.
pub static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| compile(r"```((?s:.*?))```"));
pub static CODE_INLINE: LazyLock<Regex> = LazyLock::new(|| compile(r"`(.*?)`"));

pub static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[(.*?)\]\((.*?)\)"));

// === Blocks ===

pub static RULE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^---$"));

/// A whole line framed by pipes; group 1 is the inner cell text.
pub static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^\|(.*)\|$"));
pub static TABLE_SEPARATOR_CELL: LazyLock<Regex> = LazyLock::new(|| compile(r"^-+$"));
pub static TABLE_ROW_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"(<tr>.*</tr>\s*)+"));

/// Leading `\s*` may reach back over blank lines, as it always has.
pub static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^\s*-\s+(.*)$"));
pub static LIST_ITEM_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"(<li>.*</li>\s*)+"));
pub static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^[0-9]+\.\s+(.*)$"));

/// Candidate paragraph line: at least one character, not ending in `>`.
/// Block tag detection happens in the replacer since `regex` has no lookahead.
pub static PARAGRAPH_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^(.*[^>])$"));

// === Cleanup ===

pub static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| compile(r"<p>\s*</p>"));
pub static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{2,}"));
