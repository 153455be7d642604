//! Markdown rendering for blog post bodies.
//!
//! Posts are written in a small Markdown subset (headers, emphasis, code,
//! links, rules, pipe tables and lists). Rendering is a fixed sequence of
//! pattern substitutions over the whole text rather than a CommonMark parse,
//! so existing posts keep rendering exactly as they always have.

mod patterns;
mod renderer;

pub use renderer::render;
