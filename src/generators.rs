//! Static site generation for the blog.

use anyhow::{Context, Result};
use log::{debug, info};
use maud::Markup;
use std::fs;
use std::path::Path;

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::content::{load_posts, related_posts};
use crate::locale::Locale;
use crate::pages::{self, PageContext};

/// Counts reported after a successful generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSummary {
    pub posts: usize,
    pub pages: usize,
}

/// Generates the complete blog site.
///
/// Loads posts from the content directory and writes, for every locale,
/// `{locale}/blog/index.html` plus one `{locale}/blog/{slug}.html` per
/// post. Also writes bundled stylesheets under `assets/` and a root
/// `index.html` redirecting to the default locale.
///
/// # Arguments
///
/// * `config`: Validated configuration
///
/// # Returns
///
/// Number of posts loaded and HTML pages written
///
/// # Errors
///
/// Returns error if:
/// - The content directory cannot be read or holds duplicate slugs
/// - Any output directory or file cannot be written
pub fn generate_site(config: &Config) -> Result<SiteSummary> {
    let posts = load_posts(&config.content).context("Failed to load posts")?;
    info!(
        "Loaded {} posts from {}",
        posts.len(),
        config.content.display()
    );

    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;
    write_css_assets(&config.output.join("assets")).context("Failed to write CSS assets")?;

    let mut pages_written = 0;

    for locale in Locale::ALL {
        let blog_dir = config.output.join(locale.code()).join("blog");
        fs::create_dir_all(&blog_dir).with_context(|| {
            format!("Failed to create blog directory: {}", blog_dir.display())
        })?;

        let ctx = PageContext {
            site_name: &config.site_name,
            base_url: config.base_url(),
            locale,
        };

        write_page(&blog_dir.join("index.html"), pages::blog::generate(&ctx, &posts))?;
        pages_written += 1;

        for post in &posts {
            let related = related_posts(&posts, &post.slug, config.related);
            let path = blog_dir.join(post.file_name());
            write_page(&path, pages::post::generate(&ctx, post, &related))?;
            debug!("Generated: {}", path.display());
            pages_written += 1;
        }

        info!("Generated blog pages for locale {}", locale);
    }

    let target = format!("{}/blog/index.html", Locale::default().code());
    write_page(
        &config.output.join("index.html"),
        pages::redirect::generate(&target),
    )?;
    pages_written += 1;

    Ok(SiteSummary {
        posts: posts.len(),
        pages: pages_written,
    })
}

fn write_page(path: &Path, markup: Markup) -> Result<()> {
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page: {}", path.display()))
}
