//! Root page that forwards visitors to the default locale

use maud::{DOCTYPE, Markup, html};

/// Generates a redirect page
///
/// Uses a meta refresh with a visible fallback link, so it works without
/// scripts and on static hosts without rewrite rules.
///
/// # Arguments
///
/// * `target`: Relative URL to redirect to
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(format!("0; url={}", target));
                link rel="canonical" href=(target);
                title { "Redirecting…" }
            }
            body {
                a href=(target) { (target) }
            }
        }
    }
}
