//! Static blog generator for the TUM-WEB agency site.

mod assets;
pub mod components;
mod config;
mod content;
mod generators;
mod locale;
pub mod markdown;
pub mod pages;
mod seo;
mod util;

pub use assets::{CSS_ASSETS, write_css_assets};
pub use config::Config;
pub use content::{
    BlogPost, Category, categories, find_by_slug, load_posts, parse_post, related_posts,
};
pub use generators::{SiteSummary, generate_site};
pub use locale::{Label, Locale, format_date};
pub use seo::{Crumb, article_schema, breadcrumb_schema, json_ld, website_schema};
pub use util::{estimate_reading_time, generate_slug};
