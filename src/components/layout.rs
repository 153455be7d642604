//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};
use serde_json::Value;

use crate::locale::Locale;
use crate::seo::json_ld;

/// Head metadata for one generated page.
#[derive(Debug, Clone)]
pub struct PageMeta<'a> {
    /// Page title without the site name suffix
    pub title: &'a str,
    pub description: &'a str,
    pub site_name: &'a str,
    pub locale: Locale,
    /// Absolute canonical URL
    pub canonical: String,
    /// Absolute URLs of the same page in every locale
    pub alternates: Vec<(Locale, String)>,
    /// Stylesheet path relative to the page
    pub stylesheet: String,
    /// Open Graph type, `website` or `article`
    pub og_type: &'a str,
    /// Absolute Open Graph image URL
    pub og_image: Option<String>,
    pub structured_data: Vec<Value>,
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, `lang` attribute, viewport, canonical and hreflang
/// links, Open Graph and Twitter card tags and JSON-LD blocks. The caller
/// provides page-specific body content.
///
/// # Arguments
///
/// * `meta`: Head metadata
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(meta: &PageMeta<'_>, body: Markup) -> Markup {
    let full_title = format!("{} | {}", meta.title, meta.site_name);

    html! {
        (DOCTYPE)
        html lang=(meta.locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(meta.description);
                link rel="canonical" href=(meta.canonical);
                @for (locale, href) in &meta.alternates {
                    link rel="alternate" hreflang=(locale.code()) href=(href);
                }
                meta property="og:type" content=(meta.og_type);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:url" content=(meta.canonical);
                meta property="og:site_name" content=(meta.site_name);
                meta property="og:locale" content=(meta.locale.html_lang().replace('-', "_"));
                @if let Some(image) = &meta.og_image {
                    meta property="og:image" content=(image);
                    meta name="twitter:card" content="summary_large_image";
                    meta name="twitter:image" content=(image);
                } @else {
                    meta name="twitter:card" content="summary";
                }
                meta name="twitter:title" content=(meta.title);
                meta name="twitter:description" content=(meta.description);
                link rel="stylesheet" href=(meta.stylesheet);
                @for schema in &meta.structured_data {
                    (json_ld(schema))
                }
            }
            body {
                (body)
            }
        }
    }
}
