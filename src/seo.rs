//! schema.org structured data for search engines.

use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

use crate::content::BlogPost;
use crate::locale::Locale;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    /// Site-relative path starting with `/`.
    pub path: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Builds the `Article` schema for a blog post.
///
/// The post's own URL is `{base_url}/{locale}/blog/{slug}`. The image is
/// omitted when the post has no featured image.
///
/// # Arguments
///
/// * `post`: Post being published
/// * `locale`: Locale of the page carrying the schema
/// * `base_url`: Site URL without trailing slash
/// * `site_name`: Publisher name
///
/// # Returns
///
/// JSON-LD object
pub fn article_schema(post: &BlogPost, locale: Locale, base_url: &str, site_name: &str) -> Value {
    let page_url = format!("{}{}", base_url, post.url_path(locale));
    let published = post.published_at.to_string();

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": post.title,
        "description": post.excerpt,
        "datePublished": published,
        "dateModified": published,
        "inLanguage": locale.html_lang(),
        "author": {
            "@type": "Organization",
            "name": post.author,
            "url": base_url,
        },
        "publisher": {
            "@type": "Organization",
            "name": site_name,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}/logo.png", base_url),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": page_url,
        },
    });

    if let Some(image) = &post.featured_image {
        schema["image"] = Value::String(format!("{}{}", base_url, image));
    }

    if !post.tags.is_empty() {
        schema["keywords"] = Value::String(post.tags.join(", "));
    }

    schema
}

/// Builds a `BreadcrumbList` schema with 1-based positions.
pub fn breadcrumb_schema(items: &[Crumb], base_url: &str) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": format!("{}{}", base_url, item.path),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Builds the `WebSite` schema placed on listing pages.
pub fn website_schema(base_url: &str, site_name: &str) -> Value {
    let languages: Vec<&str> = Locale::ALL.iter().map(|l| l.html_lang()).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site_name,
        "url": base_url,
        "publisher": {
            "@type": "Organization",
            "name": site_name,
        },
        "inLanguage": languages,
    })
}

/// Wraps a schema in a JSON-LD script element.
///
/// `</` is written as `<\/` so string values cannot terminate the script
/// element early. Both spellings decode to the same JSON.
pub fn json_ld(schema: &Value) -> Markup {
    let payload = schema.to_string().replace("</", r"<\/");

    html! {
        script type="application/ld+json" { (PreEscaped(payload)) }
    }
}
