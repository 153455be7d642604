//! Blog post card component

use maud::{Markup, html};

use crate::content::BlogPost;
use crate::locale::{Label, Locale, format_date};

/// Renders a clickable summary card for a post
///
/// Shows the category emoji banner and badge, localized date, reading
/// time, title, excerpt and a read-more prompt. The `data-category`
/// attribute drives the category filter on the blog index.
///
/// # Arguments
///
/// * `post`: Post to summarize
/// * `locale`: Locale for dates and labels
/// * `href`: Relative link to the post page
///
/// # Returns
///
/// Card markup
pub fn post_card(post: &BlogPost, locale: Locale, href: &str) -> Markup {
    html! {
        a.post-card href=(href) data-category=(post.category.as_str()) {
            div.card-banner {
                span.card-emoji { (post.category.emoji()) }
                span.category-badge { (post.category.label(locale)) }
            }
            div.card-body {
                div.card-meta {
                    span.card-date { (format_date(post.published_at, locale)) }
                    span.card-reading {
                        (post.reading_time) " " (locale.text(Label::ReadingTime))
                    }
                }
                h3.card-title { (post.title) }
                p.card-excerpt { (post.excerpt) }
                span.card-more { (locale.text(Label::ReadMore)) " →" }
            }
        }
    }
}
