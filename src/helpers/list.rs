//! Post list rendering
//!
//! Shared by the blog index and the home page's recent-posts section.

use super::short_date;
use crate::content::Post;

/// Render an ordered sequence of posts as an HTML list fragment.
///
/// Pure: preserves the given order, performs no I/O. Undated posts get an
/// empty date span.
pub fn render_list(posts: &[Post]) -> String {
    let mut html = String::from("<ul class='post-list'>");
    for post in posts {
        let date = post.date.map(short_date).unwrap_or_default();
        html.push_str(&format!(
            "\n  <li><span class='post-date'>{}</span> <a href='{}'>{}</a></li>",
            date,
            post.href(),
            post.title
        ));
    }
    html.push_str("\n</ul>");
    html
}
