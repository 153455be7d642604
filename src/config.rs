//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for tumweb.
#[derive(Debug, Clone, Parser)]
#[command(name = "tumweb", version, about, long_about = None)]
pub struct Config {
    /// Directory containing Markdown posts
    #[arg(default_value = "content/blog")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Public site URL used for canonical links and structured data
    #[arg(long, env = "SITE_URL", default_value = "https://tum-web.com")]
    pub site_url: String,

    /// Site name shown in titles and publisher metadata
    #[arg(long, default_value = "TUM-WEB")]
    pub site_name: String,

    /// Number of related posts listed under each article
    #[arg(long, default_value_t = 3)]
    pub related: usize,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist, the site URL
    /// is not an http(s) URL or the site name is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        if !(self.site_url.starts_with("http://") || self.site_url.starts_with("https://")) {
            bail!("Site URL must start with http:// or https://: {}", self.site_url);
        }

        if self.site_name.trim().is_empty() {
            bail!("Site name must not be empty");
        }

        Ok(())
    }

    /// Returns the site URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            content: PathBuf::from("."),
            output: PathBuf::from("dist"),
            site_url: "https://tum-web.com".to_string(),
            site_name: "TUM-WEB".to_string(),
            related: 3,
        }
    }

    #[test]
    fn test_validate_existing_path() {
        // Arrange
        let config = config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_content_dir() {
        // Arrange
        let mut config = config();
        config.content = PathBuf::from("/nonexistent/tumweb/content");

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Content directory"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        // Arrange
        let mut config = config();
        config.site_url = "tum-web.com".to_string();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Scheme is required");
    }

    #[test]
    fn test_validate_rejects_blank_site_name() {
        // Arrange
        let mut config = config();
        config.site_name = "  ".to_string();

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        // Arrange
        let mut config = config();
        config.site_url = "https://example.com//".to_string();

        // Act & Assert
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn test_parse_defaults() {
        // Arrange & Act
        let config = <Config as Parser>::try_parse_from(["tumweb"]).expect("Should parse");

        // Assert
        assert_eq!(config.content, PathBuf::from("content/blog"));
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.site_name, "TUM-WEB");
        assert_eq!(config.related, 3);
    }

    #[test]
    fn test_parse_flags() {
        // Arrange & Act
        let config = <Config as Parser>::try_parse_from([
            "tumweb",
            "posts",
            "-o",
            "public",
            "--site-url",
            "https://staging.tum-web.com",
            "--related",
            "5",
        ])
        .expect("Should parse");

        // Assert
        assert_eq!(config.content, PathBuf::from("posts"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.site_url, "https://staging.tum-web.com");
        assert_eq!(config.related, 5);
    }
}
