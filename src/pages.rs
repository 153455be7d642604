//! Page generation modules for different view types
//!
//! Each page module renders one kind of output file (blog index, post
//! article, root redirect) from shared components.

pub mod blog;
pub mod post;
pub mod redirect;

use crate::locale::Locale;
use crate::util::relative_root;

/// Directory depth of `{locale}/blog/*.html` below the site root.
pub const BLOG_DEPTH: usize = 2;

/// Site-wide values every page needs, for one locale.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site_name: &'a str,
    /// Site URL without trailing slash
    pub base_url: &'a str,
    pub locale: Locale,
}

impl PageContext<'_> {
    /// Absolute URL of the blog index in this context's locale.
    pub fn blog_url(&self) -> String {
        format!("{}/{}/blog", self.base_url, self.locale.code())
    }

    /// Absolute URL of the marketing home page in this context's locale.
    pub fn home_url(&self) -> String {
        format!("{}/{}", self.base_url, self.locale.code())
    }

    /// Stylesheet path relative to a blog page.
    pub fn stylesheet(&self, name: &str) -> String {
        format!("{}assets/{}", relative_root(BLOG_DEPTH), name)
    }

    /// Relative link from a blog page to `file` in another locale's blog.
    pub fn sibling_href(&self, locale: Locale, file: &str) -> String {
        format!("{}{}/blog/{}", relative_root(BLOG_DEPTH), locale.code(), file)
    }
}
