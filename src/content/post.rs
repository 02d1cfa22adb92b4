//! Post model and source file parsing
//!
//! A post is one markdown source file. Its publish date comes from the
//! filename (`YYYY-MM-DD-title.md`), its title from the first line of the
//! file, and its body from everything after that line. There is no
//! front-matter.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// One renderable unit: a blog entry, or the home/projects page source
#[derive(Debug, Clone)]
pub struct Post {
    /// Publish date from the filename prefix; `None` when the filename
    /// does not carry one (e.g. `index.md`)
    pub date: Option<NaiveDate>,

    /// First line of the file, leading `#`s and whitespace stripped
    pub title: String,

    /// Raw markdown content after the title line
    pub body: String,

    /// Source filename with the extension replaced by `.html`
    pub output_filename: String,

    /// Directory of the source file relative to the posts root;
    /// empty for posts directly in the root
    pub relative_path: PathBuf,
}

impl Post {
    /// Parse a post from a source file.
    ///
    /// `posts_root` anchors `relative_path` so nested source directories
    /// are mirrored in the output tree. Read failures propagate; a
    /// filename without a valid date prefix is simply undated.
    pub fn parse(path: &Path, posts_root: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read post source {:?}", path))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("post source has no usable filename: {:?}", path))?;

        let (title, body) = split_title(&raw);

        let output_filename = {
            let mut name = PathBuf::from(file_name);
            name.set_extension("html");
            name.to_string_lossy().into_owned()
        };

        let relative_path = path
            .parent()
            .and_then(|dir| dir.strip_prefix(posts_root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Post {
            date: parse_filename_date(file_name),
            title,
            body,
            output_filename,
            relative_path,
        })
    }

    /// Site-root-absolute link to the rendered page, always using `/`
    /// separators regardless of host platform.
    pub fn href(&self) -> String {
        let mut segments: Vec<&str> = self
            .relative_path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        segments.push(&self.output_filename);
        format!("/{}", segments.join("/"))
    }
}

/// Order posts newest first; undated posts sort after every dated one.
/// The sort is stable, so equal dates keep their discovery order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Split raw file content into (title, body).
///
/// The title is the first line with leading `#`s and surrounding whitespace
/// trimmed. The body is the rest of the file; a single blank separator line
/// right after the title is skipped.
fn split_title(raw: &str) -> (String, String) {
    let (first, rest) = raw.split_once('\n').unwrap_or((raw, ""));
    let title = first.trim().trim_start_matches('#').trim().to_string();
    let body = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest)
        .to_string();
    (title, body)
}

/// Strict `YYYY-MM-DD` parse of the first 10 characters of a filename.
/// Anything else means the post is undated.
fn parse_filename_date(file_name: &str) -> Option<NaiveDate> {
    let prefix = file_name.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
