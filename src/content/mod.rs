//! Content module - post model, parsing and markdown conversion

mod markdown;
mod post;

pub use markdown::MarkdownRenderer;
pub use post::{sort_newest_first, Post};
