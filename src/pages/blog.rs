//! Blog index page generation

use maud::{Markup, PreEscaped, html};

use super::PageContext;
use crate::components::footer::footer;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{breadcrumb, site_header};
use crate::components::post_card::post_card;
use crate::content::{BlogPost, categories};
use crate::locale::{Label, Locale};
use crate::seo::{Crumb, breadcrumb_schema, website_schema};

/// Client-side category filter for the card grid.
///
/// Cards stay visible without scripts; the chips only narrow the list.
const FILTER_SCRIPT: &str = r#"document.querySelectorAll('.filter-chip').forEach(function (chip) {
  chip.addEventListener('click', function () {
    var selected = chip.dataset.filter;
    document.querySelectorAll('.filter-chip').forEach(function (c) { c.classList.toggle('active', c === chip); });
    document.querySelectorAll('.post-card').forEach(function (card) {
      card.hidden = selected !== 'all' && card.dataset.category !== selected;
    });
  });
});"#;

/// Generates the blog index page
///
/// Lists every post as a card, newest first, with category filter chips
/// for the categories present. Carries `WebSite` and `BreadcrumbList`
/// structured data.
///
/// # Arguments
///
/// * `ctx`: Site context for the page locale
/// * `posts`: All posts, already sorted newest first
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(ctx: &PageContext<'_>, posts: &[BlogPost]) -> Markup {
    let locale = ctx.locale;
    let title = locale.text(Label::BlogTitle);
    let home = locale.text(Label::Home);

    let crumbs = vec![
        Crumb::new(home, format!("/{}", locale.code())),
        Crumb::new(title, format!("/{}/blog", locale.code())),
    ];

    let meta = PageMeta {
        title,
        description: locale.text(Label::BlogSubtitle),
        site_name: ctx.site_name,
        locale,
        canonical: ctx.blog_url(),
        alternates: Locale::ALL
            .iter()
            .map(|l| (*l, format!("{}/{}/blog", ctx.base_url, l.code())))
            .collect(),
        stylesheet: ctx.stylesheet("blog.css"),
        og_type: "website",
        og_image: None,
        structured_data: vec![
            website_schema(ctx.base_url, ctx.site_name),
            breadcrumb_schema(&crumbs, ctx.base_url),
        ],
    };

    let switches: Vec<(Locale, String)> = Locale::ALL
        .iter()
        .map(|l| (*l, ctx.sibling_href(*l, "index.html")))
        .collect();
    let home_url = ctx.home_url();
    let found_categories = categories(posts);

    page_wrapper(
        &meta,
        html! {
            (site_header(ctx.site_name, "index.html", locale, &switches))

            main.container {
                (breadcrumb(&[(home, Some(home_url)), (title, None)]))

                section.blog-hero {
                    h1.page-title { (title) }
                    p.page-subtitle { (locale.text(Label::BlogSubtitle)) }
                }

                @if posts.is_empty() {
                    div.empty-state {
                        p { (locale.text(Label::NoPosts)) }
                    }
                } @else {
                    @if found_categories.len() > 1 {
                        div.category-filter {
                            button.filter-chip.active type="button" data-filter="all" {
                                (locale.text(Label::AllCategories))
                            }
                            @for category in &found_categories {
                                button.filter-chip type="button" data-filter=(category.as_str()) {
                                    (category.label(locale))
                                }
                            }
                        }
                    }

                    div.post-grid {
                        @for post in posts {
                            (post_card(post, locale, &post.file_name()))
                        }
                    }

                    @if found_categories.len() > 1 {
                        script { (PreEscaped(FILTER_SCRIPT)) }
                    }
                }
            }

            (footer(ctx.site_name, locale))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use chrono::NaiveDate;

    fn post(slug: &str, category: Category) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            excerpt: "Excerpt".to_string(),
            content: String::new(),
            category,
            author: "TUM-WEB Team".to_string(),
            published_at: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            reading_time: 3,
            tags: Vec::new(),
            featured_image: None,
        }
    }

    fn ctx(locale: Locale) -> PageContext<'static> {
        PageContext {
            site_name: "TUM-WEB",
            base_url: "https://tum-web.com",
            locale,
        }
    }

    #[test]
    fn test_blog_index_lists_posts() {
        // Arrange
        let posts = vec![post("one", Category::Seo), post("two", Category::Ai)];

        // Act
        let html = generate(&ctx(Locale::En), &posts).into_string();

        // Assert
        assert!(html.contains("<title>Blog | TUM-WEB</title>"));
        assert!(html.contains(r#"href="one.html""#));
        assert!(html.contains(r#"href="two.html""#));
        assert!(html.contains(r#"data-filter="seo""#), "Filter chip per category");
        assert!(html.contains(r#"data-filter="ai""#));
        assert!(html.contains("https://tum-web.com/en/blog"), "Canonical URL");
        assert!(html.contains(r#""@type":"WebSite""#), "WebSite schema");
        assert!(html.contains(r#"href="../../assets/blog.css""#));
    }

    #[test]
    fn test_blog_index_thai_labels() {
        // Arrange
        let posts = vec![post("one", Category::Website)];

        // Act
        let html = generate(&ctx(Locale::Th), &posts).into_string();

        // Assert
        assert!(html.contains(r#"<html lang="th">"#));
        assert!(html.contains("บทความ"));
        assert!(html.contains("เว็บไซต์"), "Thai category label");
        assert!(!html.contains("filter-chip"), "No filter for a single category");
    }

    #[test]
    fn test_blog_index_empty() {
        // Arrange & Act
        let html = generate(&ctx(Locale::En), &[]).into_string();

        // Assert
        assert!(html.contains("No posts yet"));
        assert!(!html.contains("post-card"));
    }
}
