//! Markdown subset to HTML conversion.

use regex::Captures;

use super::patterns::{
    BOLD, CODE_FENCE, CODE_INLINE, EMPTY_PARAGRAPH, H1, H2, H3, ITALIC, LINK, LIST_ITEM_RUN,
    NEWLINE_RUN, ORDERED_ITEM, PARAGRAPH_LINE, RULE, TABLE_ROW, TABLE_ROW_RUN,
    TABLE_SEPARATOR_CELL, UNORDERED_ITEM,
};

/// Second characters of the tags that keep a line out of paragraph wrapping.
///
/// The set is matched on the character after `<`, so `<hr />`, `<li>`,
/// `<table>`, `<pre>`, `<code>`, `<a ...>` and `<strong>` all qualify while
/// `<em>` and closing tags do not. `|` is in the set for raw table lines.
const BLOCK_TAG_INITIALS: [char; 10] = ['h', 'u', 'o', 'l', 't', 'p', 'c', 'a', 's', '|'];

/// Renders a Markdown subset to an HTML fragment.
///
/// Applies a fixed sequence of whole-text substitutions: headers, bold,
/// italic, fenced then inline code, links, horizontal rules, pipe tables,
/// unordered then ordered list items, paragraph wrapping and cleanup. Later
/// passes see the markup produced by earlier ones, so the order is part of
/// the output format.
///
/// The function is total. Unbalanced emphasis, unterminated fences and
/// malformed table rows are left as literal text or partially rendered.
/// No sanitization is performed; post bodies are trusted content.
///
/// Ordered list items become `<li>` elements without an enclosing `<ol>`.
///
/// # Arguments
///
/// * `markdown`: Post body in the supported Markdown subset
///
/// # Returns
///
/// HTML fragment ready to embed in a page body
///
/// # Examples
///
/// ```
/// let html = tumweb::markdown::render("# Hello\n\nSome **bold** text");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<strong>bold</strong>"));
/// ```
pub fn render(markdown: &str) -> String {
    let mut html = markdown.to_string();

    // Longest marker first so `###` is never eaten by the `#` rule
    html = H3.replace_all(&html, "<h3>${1}</h3>").into_owned();
    html = H2.replace_all(&html, "<h2>${1}</h2>").into_owned();
    html = H1.replace_all(&html, "<h1>${1}</h1>").into_owned();

    html = BOLD.replace_all(&html, "<strong>${1}</strong>").into_owned();
    html = ITALIC.replace_all(&html, "<em>${1}</em>").into_owned();

    html = CODE_FENCE
        .replace_all(&html, "<pre><code>${1}</code></pre>")
        .into_owned();
    html = CODE_INLINE.replace_all(&html, "<code>${1}</code>").into_owned();

    html = LINK
        .replace_all(
            &html,
            r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
        )
        .into_owned();

    html = RULE.replace_all(&html, "<hr />").into_owned();

    html = TABLE_ROW.replace_all(&html, table_row).into_owned();
    html = TABLE_ROW_RUN
        .replace_all(&html, "<table><tbody>${0}</tbody></table>")
        .into_owned();

    html = UNORDERED_ITEM.replace_all(&html, "<li>${1}</li>").into_owned();
    html = LIST_ITEM_RUN.replace_all(&html, "<ul>${0}</ul>").into_owned();
    html = ORDERED_ITEM.replace_all(&html, "<li>${1}</li>").into_owned();

    html = PARAGRAPH_LINE.replace_all(&html, paragraph).into_owned();

    html = EMPTY_PARAGRAPH.replace_all(&html, "").into_owned();
    NEWLINE_RUN.replace_all(&html, "\n").into_owned()
}

/// Converts one `|a|b|` line into a table row.
///
/// Separator rows (every cell made of dashes) render as an empty string so
/// that header and body rows merge into the same table.
fn table_row(caps: &Captures<'_>) -> String {
    let cells: Vec<&str> = caps[1].split('|').map(str::trim).collect();

    if cells
        .iter()
        .all(|cell| TABLE_SEPARATOR_CELL.is_match(cell))
    {
        return String::new();
    }

    let mut row = String::from("<tr>");
    for cell in cells {
        row.push_str("<td>");
        row.push_str(cell);
        row.push_str("</td>");
    }
    row.push_str("</tr>");
    row
}

/// Wraps a candidate line in `<p>` unless it already opens a block tag.
fn paragraph(caps: &Captures<'_>) -> String {
    let line = &caps[1];

    if starts_with_block_tag(line) {
        return caps[0].to_string();
    }

    format!("<p>{}</p>", line)
}

fn starts_with_block_tag(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| BLOCK_TAG_INITIALS.contains(&c))
}
