//! Tests for the blog Markdown renderer through the public API.

use tumweb::markdown::render;

/// Tests a heading line becomes an h1.
#[test]
fn test_header_renders_h1() {
    // Arrange & Act
    let html = render("# Title");

    // Assert
    assert!(html.contains("<h1>Title</h1>"), "{}", html);
}

/// Tests bold and italic spans on one line.
#[test]
fn test_bold_and_italic() {
    // Arrange & Act
    let html = render("**bold** and *italic*");

    // Assert
    assert!(html.contains("<strong>bold</strong>"), "{}", html);
    assert!(html.contains("<em>italic</em>"), "{}", html);
}

/// Tests links open in a new browsing context.
#[test]
fn test_link_target_blank() {
    // Arrange & Act
    let html = render("[Go](https://example.com)");

    // Assert
    assert!(html.contains(r#"href="https://example.com""#), "{}", html);
    assert!(html.contains(r#"target="_blank""#), "{}", html);
    assert!(html.contains(r#"rel="noopener noreferrer""#), "{}", html);
    assert!(html.contains(">Go</a>"), "{}", html);
}

/// Tests consecutive list items share one list element.
#[test]
fn test_unordered_list_wrapped_once() {
    // Arrange & Act
    let html = render("- a\n- b");

    // Assert
    assert_eq!(html.matches("<ul>").count(), 1, "{}", html);
    assert_eq!(html.matches("</ul>").count(), 1, "{}", html);
    assert_eq!(html.matches("<li>").count(), 2, "{}", html);
}

/// Tests the header separator row of a table is omitted.
#[test]
fn test_table_separator_omitted() {
    // Arrange & Act
    let html = render("| a | b |\n| - | - |\n| 1 | 2 |");

    // Assert
    assert_eq!(html.matches("<tr>").count(), 2, "{}", html);
    assert!(html.contains("<td>a</td><td>b</td>"), "{}", html);
    assert!(html.contains("<td>1</td><td>2</td>"), "{}", html);
    assert!(!html.contains("<td>-</td>"), "{}", html);
}

/// Tests a realistic post body renders every construct in order.
#[test]
fn test_full_post_body() {
    // Arrange
    let markdown = "\
# Building a Website

Every business needs a **fast** site.

## Checklist

- Domain
- Hosting

### Costs

| Item | THB |
|------|-----|
| Domain | 500 |

---

Run `npm run build` and see [our work](https://tum-web.com/portfolio).";

    // Act
    let html = render(markdown);

    // Assert
    assert!(html.contains("<h1>Building a Website</h1>"), "{}", html);
    assert!(html.contains("<h2>Checklist</h2>"), "{}", html);
    assert!(html.contains("<h3>Costs</h3>"), "{}", html);
    assert!(html.contains("<p>Every business needs a <strong>fast</strong> site."), "{}", html);
    assert!(html.contains("<ul><li>Domain</li>"), "{}", html);
    assert!(html.contains("<table><tbody><tr><td>Item</td><td>THB</td></tr>"), "{}", html);
    assert!(html.contains("<td>Domain</td><td>500</td>"), "{}", html);
    assert!(html.contains("<hr />"), "{}", html);
    assert!(html.contains("<code>npm run build</code>"), "{}", html);
    assert!(html.contains(r#"<a href="https://tum-web.com/portfolio""#), "{}", html);
    assert!(!html.contains("\n\n"), "{:?}", html);
}

/// Tests rendering arbitrary and hostile input never panics.
#[test]
fn test_total_over_odd_inputs() {
    // Arrange
    let inputs = [
        "",
        "\n",
        "***",
        "****",
        "```",
        "``````",
        "[",
        "](",
        "| | |",
        "|-|-|",
        "- ",
        "   - indented",
        "99.",
        "<script>alert(1)</script>",
        "ทดสอบ *ภาษาไทย* `โค้ด`",
        "\r\n\r\n",
        "# \n## \n### ",
    ];

    // Act & Assert
    for input in inputs {
        let _ = render(input);
    }
}

/// Tests ordered items are not given a list wrapper.
#[test]
fn test_ordered_items_remain_unwrapped() {
    // Arrange & Act
    let html = render("1. One\n2. Two");

    // Assert
    assert_eq!(html, "<li>One</li>\n<li>Two</li>");
}
