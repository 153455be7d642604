//! Site header and breadcrumb navigation components

use maud::{Markup, html};

use crate::locale::Locale;

/// Renders the site header with brand link and language switcher
///
/// The switcher lists every locale; the current one is rendered as plain
/// text and the others link to the same page in that locale.
///
/// # Arguments
///
/// * `site_name`: Brand text
/// * `home_href`: Relative link to the blog index of the current locale
/// * `current`: Locale of the page being rendered
/// * `switch_hrefs`: Relative link to this page for each locale
///
/// # Returns
///
/// Header markup
pub fn site_header(
    site_name: &str,
    home_href: &str,
    current: Locale,
    switch_hrefs: &[(Locale, String)],
) -> Markup {
    html! {
        header.site-header {
            a.brand href=(home_href) { (site_name) }
            nav.lang-switch {
                @for (locale, href) in switch_hrefs {
                    @if *locale == current {
                        span.lang-current { (locale.code().to_uppercase()) }
                    } @else {
                        a.lang-link href=(href) hreflang=(locale.code()) {
                            (locale.code().to_uppercase())
                        }
                    }
                }
            }
        }
    }
}

/// Renders breadcrumb navigation
///
/// Items with a link target render as anchors; the last item is usually
/// the current page and has none.
///
/// # Arguments
///
/// * `items`: Labels with optional link targets (None for current)
///
/// # Returns
///
/// Breadcrumb navigation markup with separators
pub fn breadcrumb(items: &[(&str, Option<String>)]) -> Markup {
    html! {
        nav.breadcrumb aria-label="breadcrumb" {
            @for (index, (label, href)) in items.iter().enumerate() {
                @if index > 0 {
                    span.breadcrumb-separator { "›" }
                }
                @if let Some(link) = href {
                    a.breadcrumb-link href=(link) { (*label) }
                } @else {
                    span.breadcrumb-current { (*label) }
                }
            }
        }
    }
}
