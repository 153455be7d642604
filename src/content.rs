//! Blog post content loading.
//!
//! Posts live as Markdown files with a TOML front matter block delimited by
//! `+++` lines:
//!
//! ```text
//! +++
//! title = "Why Your Business Needs a Website"
//! excerpt = "A short summary for cards and meta tags"
//! category = "website"
//! published_at = "2025-01-15"
//! tags = ["website", "sme"]
//! +++
//!
//! ## Body in the supported Markdown subset
//! ```

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::util::{estimate_reading_time, generate_slug};

const FRONT_MATTER_DELIMITER: &str = "+++";

const DEFAULT_AUTHOR: &str = "TUM-WEB Team";

/// Blog post topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Website,
    Seo,
    Marketing,
    Ai,
    Business,
}

impl Category {
    /// Returns the lowercase identifier used in front matter and CSS hooks.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Website => "website",
            Category::Seo => "seo",
            Category::Marketing => "marketing",
            Category::Ai => "ai",
            Category::Business => "business",
        }
    }

    /// Returns the display name in the given locale.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::Website, Locale::Th) => "เว็บไซต์",
            (Category::Website, Locale::En) => "Website",
            (Category::Seo, _) => "SEO",
            (Category::Marketing, Locale::Th) => "การตลาด",
            (Category::Marketing, Locale::En) => "Marketing",
            (Category::Ai, _) => "AI",
            (Category::Business, Locale::Th) => "ธุรกิจ",
            (Category::Business, Locale::En) => "Business",
        }
    }

    /// Returns the emoji shown on banners in place of a featured image.
    pub fn emoji(self) -> &'static str {
        match self {
            Category::Website => "🌐",
            Category::Seo => "🔍",
            Category::Marketing => "📢",
            Category::Ai => "🤖",
            Category::Business => "💼",
        }
    }
}

/// A parsed blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body, rendered at page generation time.
    pub content: String,
    pub category: Category,
    pub author: String,
    pub published_at: NaiveDate,
    /// Minutes, from front matter or estimated from the body.
    pub reading_time: u32,
    pub tags: Vec<String>,
    /// Site-relative image path such as `/images/blog/seo.jpg`.
    pub featured_image: Option<String>,
}

impl BlogPost {
    /// Returns the site-relative URL path of this post in `locale`.
    pub fn url_path(&self, locale: Locale) -> String {
        format!("/{}/blog/{}", locale.code(), self.slug)
    }

    /// Returns the output file name of this post.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    slug: Option<String>,
    excerpt: String,
    category: Category,
    #[serde(default)]
    author: Option<String>,
    published_at: NaiveDate,
    #[serde(default)]
    reading_time: Option<u32>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured_image: Option<String>,
}

/// Parses one post file.
///
/// # Arguments
///
/// * `source`: Full file content, front matter included
///
/// # Returns
///
/// Parsed blog post with slug and reading time filled in
///
/// # Errors
///
/// Returns error if:
/// - The front matter block is missing or unterminated
/// - The front matter is not valid TOML or misses required fields
/// - The title is empty or no usable slug can be derived
pub fn parse_post(source: &str) -> Result<BlogPost> {
    let normalized = source.trim_start_matches('\u{feff}').replace("\r\n", "\n");

    let (front, body) = split_front_matter(&normalized)
        .context("Missing or unterminated +++ front matter block")?;

    let front: FrontMatter = toml::from_str(front).context("Invalid front matter")?;

    let title = front.title.trim().to_string();
    if title.is_empty() {
        bail!("Post title is empty");
    }

    let slug = front
        .slug
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| generate_slug(&title));
    validate_slug(&slug)?;

    let content = body.trim().to_string();
    let reading_time = front
        .reading_time
        .unwrap_or_else(|| estimate_reading_time(&content));

    Ok(BlogPost {
        slug,
        title,
        excerpt: front.excerpt.trim().to_string(),
        content,
        category: front.category,
        author: front.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        published_at: front.published_at,
        reading_time,
        tags: front.tags,
        featured_image: front.featured_image,
    })
}

/// Splits `+++` delimited front matter from the body.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let rest = source
        .strip_prefix(FRONT_MATTER_DELIMITER)?
        .strip_prefix('\n')?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("Cannot derive a slug; set `slug` in front matter");
    }

    if slug.contains(['/', '\\']) || slug.starts_with('.') {
        bail!("Slug must be a single path segment: {}", slug);
    }

    Ok(())
}

/// Loads every `*.md` post in a directory.
///
/// Files whose front matter fails to parse are skipped with a warning so a
/// single broken draft does not block the rest of the site. Posts are
/// returned newest first, ties broken by slug.
///
/// # Arguments
///
/// * `dir`: Content directory
///
/// # Returns
///
/// Parsed posts sorted newest first
///
/// # Errors
///
/// Returns error if the directory or a post file cannot be read, or two
/// posts share a slug
pub fn load_posts(dir: impl AsRef<Path>) -> Result<Vec<BlogPost>> {
    let dir = dir.as_ref();

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read content directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    let mut posts = Vec::with_capacity(paths.len());
    let mut seen = HashSet::new();

    for path in paths {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post: {}", path.display()))?;

        let post = match parse_post(&source) {
            Ok(post) => post,
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        if !seen.insert(post.slug.clone()) {
            bail!("Duplicate post slug '{}' in {}", post.slug, path.display());
        }

        debug!("Loaded post '{}' from {}", post.slug, path.display());
        posts.push(post);
    }

    posts.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.slug.cmp(&b.slug))
    });

    Ok(posts)
}

/// Finds a post by slug.
pub fn find_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|post| post.slug == slug)
}

/// Selects posts to recommend below an article.
///
/// Candidates exclude the post itself and are ranked in three groups:
/// same category, then at least one shared tag, then everything else.
/// Each group is ordered newest first.
///
/// # Arguments
///
/// * `posts`: All posts
/// * `slug`: Slug of the post being displayed
/// * `limit`: Maximum number of posts to return
///
/// # Returns
///
/// Up to `limit` related posts; empty when `slug` is unknown
pub fn related_posts<'a>(posts: &'a [BlogPost], slug: &str, limit: usize) -> Vec<&'a BlogPost> {
    let Some(current) = find_by_slug(posts, slug) else {
        return Vec::new();
    };

    let mut ranked: Vec<(u8, &BlogPost)> = posts
        .iter()
        .filter(|post| post.slug != current.slug)
        .map(|post| {
            let rank = if post.category == current.category {
                0
            } else if post.tags.iter().any(|tag| current.tags.contains(tag)) {
                1
            } else {
                2
            };
            (rank, post)
        })
        .collect();

    ranked.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| b.published_at.cmp(&a.published_at))
            .then_with(|| a.slug.cmp(&b.slug))
    });

    ranked.into_iter().take(limit).map(|(_, post)| post).collect()
}

/// Returns the distinct categories in first-seen order.
pub fn categories(posts: &[BlogPost]) -> Vec<Category> {
    let mut found = Vec::new();
    for post in posts {
        if !found.contains(&post.category) {
            found.push(post.category);
        }
    }
    found
}
