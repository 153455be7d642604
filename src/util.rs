//! Utility functions for tumweb

/// Reading speed used when a post does not state its reading time.
const WORDS_PER_MINUTE: usize = 200;

/// Generates a URL slug from free text.
///
/// Lowercases and trims the text, drops every character that is not an
/// ASCII word character, whitespace or part of the Thai block
/// (U+0E01 to U+0E59), then replaces each whitespace run with a single
/// hyphen. Punctuation, including existing hyphens, is removed.
///
/// # Arguments
///
/// * `text`: Title or other free text
///
/// # Returns
///
/// Slug suitable for a file name and URL path segment
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }

        if c.is_ascii_alphanumeric() || c == '_' || is_thai(c) {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

fn is_thai(c: char) -> bool {
    ('\u{0E01}'..='\u{0E59}').contains(&c)
}

/// Estimates reading time in whole minutes
///
/// Counts whitespace separated words at 200 words per minute, rounding up.
/// Never returns less than one minute.
pub fn estimate_reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Returns the relative prefix that climbs `depth` directories.
///
/// Pages under `th/blog/` sit at depth 2 and reach the site root with
/// `../../`.
pub fn relative_root(depth: usize) -> String {
    "../".repeat(depth)
}
