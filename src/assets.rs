//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const POST_CARD: &str = include_str!("../assets/components/post-card.css");

const BLOG_PAGE: &str = include_str!("../assets/page-blog.css");
const POST_PAGE: &str = include_str!("../assets/page-post.css");
const PROSE: &str = include_str!("../assets/prose.css");

/// Stylesheets written by [`write_css_assets`], in write order.
pub const CSS_ASSETS: [&str; 2] = ["blog.css", "post.css"];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(
        assets_dir,
        "blog.css",
        &[BASE, LAYOUT, NAV, POST_CARD, BLOG_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "post.css",
        &[BASE, LAYOUT, NAV, POST_CARD, POST_PAGE, PROSE],
    )?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let assets = dir.path().join("assets");

        // Act
        let result = write_css_assets(&assets);

        // Assert
        assert!(result.is_ok(), "Should write assets: {:?}", result);
        for name in CSS_ASSETS {
            assert!(assets.join(name).exists(), "{} should exist", name);
        }
        let post_css = fs::read_to_string(assets.join("post.css")).expect("Should read");
        assert!(post_css.contains(".prose"), "Post bundle includes prose styles");
        assert!(post_css.contains("--primary"), "Post bundle includes base");
    }
}
