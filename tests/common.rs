//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories populated
//! with blog post files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds a post file with TOML front matter.
///
/// # Arguments
///
/// * `title`: Post title
/// * `category`: Lowercase category name
/// * `date`: Publication date as `YYYY-MM-DD`
/// * `tags`: Tag list
/// * `body`: Markdown body
///
/// # Returns
///
/// File content ready to write
pub fn post_source(title: &str, category: &str, date: &str, tags: &[&str], body: &str) -> String {
    let tags = tags
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "+++\ntitle = \"{}\"\nexcerpt = \"Excerpt for {}\"\ncategory = \"{}\"\npublished_at = \"{}\"\ntags = [{}]\n+++\n\n{}\n",
        title, title, category, date, tags, body
    )
}

/// Writes a post file into a content directory.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_post(dir: &Path, file_name: &str, source: &str) -> Result<()> {
    fs::write(dir.join(file_name), source)?;
    Ok(())
}

/// Creates a content directory holding three sample posts.
///
/// Posts: `website-pricing` (website, newest), `seo-checklist` (seo) and
/// `local-seo` (seo, oldest).
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_sample_content() -> Result<TempDir> {
    let dir = TempDir::new()?;

    write_post(
        dir.path(),
        "website-pricing.md",
        &post_source(
            "Website Pricing",
            "website",
            "2025-03-01",
            &["pricing"],
            "## How much?\n\n- Design\n- Hosting\n\n| Plan | Price |\n| --- | --- |\n| Basic | 9,900 |",
        ),
    )?;
    write_post(
        dir.path(),
        "seo-checklist.md",
        &post_source(
            "SEO Checklist",
            "seo",
            "2025-02-01",
            &["seo", "google"],
            "# Checklist\n\n1. Titles\n2. Speed\n\nRead [Google docs](https://developers.google.com/search).",
        ),
    )?;
    write_post(
        dir.path(),
        "local-seo.md",
        &post_source(
            "Local SEO",
            "seo",
            "2024-12-01",
            &["google"],
            "Get found on **Google Maps**.",
        ),
    )?;

    Ok(dir)
}
