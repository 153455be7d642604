//! Site footer component

use maud::{Markup, html};

use crate::locale::{Label, Locale};

/// LINE official account used for all contact links.
pub const LINE_URL: &str = "https://lin.ee/EE6XyPL";

/// Renders the site footer with the LINE contact link
pub fn footer(site_name: &str, locale: Locale) -> Markup {
    html! {
        footer.site-footer {
            a.line-link href=(LINE_URL) target="_blank" rel="noopener noreferrer" {
                (locale.text(Label::ContactLine))
            }
            p.copyright { "© " (site_name) }
        }
    }
}
