//! Page template
//!
//! One HTML skeleton embedded in the binary, filled by plain placeholder
//! substitution: page title, navigation bar, main content and footer year.
//! No template engine.

use chrono::{Datelike, Local};

const SKELETON: &str = include_str!("skeleton.html");

/// The fixed navigation sections of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Blog,
    Projects,
}

impl NavPage {
    /// Navigation entries in display order
    pub const ALL: [NavPage; 3] = [NavPage::Home, NavPage::Blog, NavPage::Projects];

    pub fn label(self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::Blog => "Blog",
            NavPage::Projects => "Projects",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            NavPage::Home => "index.html",
            NavPage::Blog => "blog.html",
            NavPage::Projects => "projects.html",
        }
    }
}

/// Renders complete HTML documents from the embedded skeleton
pub struct PageTemplate {
    site_title: String,
}

impl PageTemplate {
    pub fn new(site_title: &str) -> Self {
        Self {
            site_title: site_title.to_string(),
        }
    }

    /// Produce a full HTML document.
    ///
    /// `title` and `content` are substituted as-is; content comes from the
    /// markdown renderer and titles from the site owner's own files, so no
    /// further escaping is applied.
    pub fn render(&self, title: &str, active: NavPage, content: &str) -> String {
        let nav: String = NavPage::ALL
            .iter()
            .map(|page| {
                let class = if *page == active {
                    r#" class="active""#
                } else {
                    ""
                };
                format!(r#"<a href="{}"{}>{}</a>"#, page.href(), class, page.label())
            })
            .collect();

        // Content goes last so markdown output containing a placeholder
        // token is never expanded.
        SKELETON
            .replace("{{ site_title }}", &self.site_title)
            .replace("{{ nav }}", &nav)
            .replace("{{ year }}", &Local::now().year().to_string())
            .replace("{{ title }}", title)
            .replace("{{ content }}", content)
    }
}
