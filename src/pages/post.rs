//! Blog post article page generation

use maud::{Markup, PreEscaped, html};

use super::PageContext;
use crate::components::footer::{LINE_URL, footer};
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::{breadcrumb, site_header};
use crate::components::post_card::post_card;
use crate::content::BlogPost;
use crate::locale::{Label, Locale, format_date};
use crate::markdown;
use crate::seo::{Crumb, article_schema, breadcrumb_schema};

/// Generates a blog post page
///
/// Renders the post body through the Markdown renderer and wraps it with
/// breadcrumb, category badge, title, byline, author box and related post
/// cards. Carries `Article` and `BreadcrumbList` structured data and a
/// canonical URL of `{base_url}/{locale}/blog/{slug}`.
///
/// # Arguments
///
/// * `ctx`: Site context for the page locale
/// * `post`: Post to render
/// * `related`: Posts to recommend below the article
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(ctx: &PageContext<'_>, post: &BlogPost, related: &[&BlogPost]) -> Markup {
    let locale = ctx.locale;
    let home = locale.text(Label::Home);
    let blog = locale.text(Label::BlogTitle);
    let file_name = post.file_name();

    let crumbs = vec![
        Crumb::new(home, format!("/{}", locale.code())),
        Crumb::new(blog, format!("/{}/blog", locale.code())),
        Crumb::new(post.title.as_str(), post.url_path(locale)),
    ];

    let meta = PageMeta {
        title: &post.title,
        description: &post.excerpt,
        site_name: ctx.site_name,
        locale,
        canonical: format!("{}{}", ctx.base_url, post.url_path(locale)),
        alternates: Locale::ALL
            .iter()
            .map(|l| (*l, format!("{}{}", ctx.base_url, post.url_path(*l))))
            .collect(),
        stylesheet: ctx.stylesheet("post.css"),
        og_type: "article",
        og_image: post
            .featured_image
            .as_ref()
            .map(|image| format!("{}{}", ctx.base_url, image)),
        structured_data: vec![
            article_schema(post, locale, ctx.base_url, ctx.site_name),
            breadcrumb_schema(&crumbs, ctx.base_url),
        ],
    };

    let switches: Vec<(Locale, String)> = Locale::ALL
        .iter()
        .map(|l| (*l, ctx.sibling_href(*l, &file_name)))
        .collect();
    let body_html = markdown::render(&post.content);

    page_wrapper(
        &meta,
        html! {
            (site_header(ctx.site_name, "index.html", locale, &switches))

            main.container {
                article.post {
                    (breadcrumb(&[
                        (home, Some(ctx.home_url())),
                        (blog, Some("index.html".to_string())),
                        (post.title.as_str(), None),
                    ]))

                    a.back-link href="index.html" { "← " (locale.text(Label::BackToBlog)) }

                    span.category-badge { (post.category.label(locale)) }

                    h1.post-title { (post.title) }

                    div.post-meta {
                        span.post-author { (post.author) }
                        time.post-date datetime=(post.published_at.to_string()) {
                            (format_date(post.published_at, locale))
                        }
                        span.post-reading {
                            (post.reading_time) " " (locale.text(Label::ReadingTime))
                        }
                    }

                    div.post-banner {
                        span.banner-emoji { (post.category.emoji()) }
                    }

                    div.prose { (PreEscaped(body_html)) }

                    aside.author-box {
                        div.author-avatar { "👨‍💻" }
                        div.author-info {
                            h3.author-name { (post.author) }
                            p.author-bio { (locale.text(Label::AuthorBio)) }
                            a.line-button href=(LINE_URL) target="_blank" rel="noopener noreferrer" {
                                (locale.text(Label::ContactLine))
                            }
                        }
                    }
                }

                @if !related.is_empty() {
                    section.related-posts {
                        h2.section-title { (locale.text(Label::RelatedPosts)) }
                        div.post-grid {
                            @for other in related {
                                (post_card(other, locale, &other.file_name()))
                            }
                        }
                    }
                }
            }

            (footer(ctx.site_name, locale))
        },
    )
}
