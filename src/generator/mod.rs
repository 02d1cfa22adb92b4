//! Generator module - builds the whole static site
//!
//! One linear pass per build: clean the output directory, render every
//! post while collecting it, then produce the blog index, home and
//! projects pages. Any failure aborts the remainder; the next run's clean
//! step discards whatever was half-written.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::{sort_newest_first, MarkdownRenderer, Post};
use crate::helpers::render_list;
use crate::templates::{NavPage, PageTemplate};
use crate::Site;

/// Number of posts shown in the home page's recent list
const RECENT_POSTS: usize = 3;

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
    template: PageTemplate,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
            template: PageTemplate::new(&site.config.title),
        }
    }

    /// Build the entire site
    pub fn build(&self) -> Result<()> {
        let start = std::time::Instant::now();

        self.clean()?;

        let mut posts = self.render_posts()?;
        sort_newest_first(&mut posts);

        self.render_blog_index(&posts)?;
        self.render_home(&posts)?;
        self.render_projects()?;

        tracing::info!(
            "Built {} posts in {:.2}s",
            posts.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Destroy and recreate the output directory
    fn clean(&self) -> Result<()> {
        let output_dir = &self.site.output_dir;
        if output_dir.exists() {
            fs::remove_dir_all(output_dir)
                .with_context(|| format!("failed to clean output directory {:?}", output_dir))?;
            tracing::debug!("Deleted: {:?}", output_dir);
        }
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create output directory {:?}", output_dir))
    }

    /// Walk the posts tree, render every eligible markdown file and
    /// collect the parsed posts
    fn render_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = &self.site.posts_dir;
        if !posts_dir.is_dir() {
            bail!("posts directory {:?} does not exist", posts_dir);
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || !is_markdown_file(path)
                || self.is_designated(path)
            {
                continue;
            }

            let post = Post::parse(path, posts_dir)?;
            let page = self.render_post_page(&post)?;

            let out_dir = self.site.output_dir.join(&post.relative_path);
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {:?}", out_dir))?;
            let out_path = out_dir.join(&post.output_filename);
            fs::write(&out_path, page)
                .with_context(|| format!("failed to write {:?}", out_path))?;
            tracing::debug!("Wrote {:?}", out_path);

            posts.push(post);
        }

        Ok(posts)
    }

    /// A designated home/projects source, checked against the posts root
    /// only. A nested `index.md` or `projects.md` is an ordinary post.
    fn is_designated(&self, path: &Path) -> bool {
        if path.parent() != Some(self.site.posts_dir.as_path()) {
            return false;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => {
                name == self.site.config.home_page || name == self.site.config.projects_page
            }
            None => false,
        }
    }

    fn render_post_page(&self, post: &Post) -> Result<String> {
        let markdown = format!("# {}\n\n{}", post.title, post.body);
        let content = self.renderer.render(&markdown)?;
        Ok(self.template.render(&post.title, NavPage::Blog, &content))
    }

    fn render_blog_index(&self, posts: &[Post]) -> Result<()> {
        let content = format!("<h1>Blog Posts</h1>{}", render_list(posts));
        let title = format!("Blog - {}", self.site.config.title);
        let html = self.template.render(&title, NavPage::Blog, &content);
        self.write_page("blog.html", &html)
    }

    fn render_home(&self, posts: &[Post]) -> Result<()> {
        let source = self.site.posts_dir.join(&self.site.config.home_page);
        let home = Post::parse(&source, &self.site.posts_dir)
            .with_context(|| format!("failed to load home page source {:?}", source))?;

        let markdown = format!("# {}\n\n{}", home.title, home.body);
        let mut content = self.renderer.render(&markdown)?;

        let recent = &posts[..posts.len().min(RECENT_POSTS)];
        content.push_str(&format!("<h2>Recent Posts</h2>{}", render_list(recent)));

        let html = self
            .template
            .render(&self.site.config.title, NavPage::Home, &content);
        self.write_page("index.html", &html)
    }

    fn render_projects(&self) -> Result<()> {
        let source = self.site.posts_dir.join(&self.site.config.projects_page);
        let projects = Post::parse(&source, &self.site.posts_dir)
            .with_context(|| format!("failed to load projects page source {:?}", source))?;

        let markdown = format!("# {}\n\n{}", projects.title, projects.body);
        let content = self.renderer.render(&markdown)?;
        let title = format!("Projects - {}", self.site.config.title);
        let html = self.template.render(&title, NavPage::Projects, &content);
        self.write_page("projects.html", &html)
    }

    fn write_page(&self, name: &str, html: &str) -> Result<()> {
        let path = self.site.output_dir.join(name);
        fs::write(&path, html).with_context(|| format!("failed to write {:?}", path))
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a site directory with the given (relative name, content)
    /// markdown sources under posts/
    fn fixture_site(sources: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in sources {
            let path = posts_dir.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    fn read_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect()
    }

    const HOME: (&str, &str) = ("index.md", "# Welcome\n\nThis is home.");
    const PROJECTS: (&str, &str) = ("projects.md", "# Projects\n\nThings I made.");

    #[test]
    fn test_output_file_set_mirrors_sources() {
        let (_dir, site) = fixture_site(&[
            HOME,
            PROJECTS,
            ("2024-01-01-one.md", "# One\n\nbody"),
            ("notes/2024-06-15-two.md", "# Two\n\nbody"),
            ("README.txt", "not markdown"),
        ]);
        site.build().unwrap();

        let out = site.output_dir.as_path();
        assert!(out.join("index.html").exists());
        assert!(out.join("blog.html").exists());
        assert!(out.join("projects.html").exists());
        assert!(out.join("2024-01-01-one.html").exists());
        assert!(out.join("notes/2024-06-15-two.html").exists());

        // Exactly one page per post plus the three fixed pages
        assert_eq!(read_tree(out).len(), 5);
    }

    #[test]
    fn test_post_page_round_trip() {
        let (_dir, site) = fixture_site(&[
            HOME,
            PROJECTS,
            ("2024-01-01-one.md", "# My Title\n\nHello **world**"),
        ]);
        site.build().unwrap();

        let html = fs::read_to_string(site.output_dir.join("2024-01-01-one.html")).unwrap();
        assert!(html.contains("<title>My Title</title>"));
        assert!(html.contains("<h1>My Title</h1>"));
        assert!(html.contains("<strong>world</strong>"));
    }

    #[test]
    fn test_home_lists_three_most_recent_in_order() {
        let (_dir, site) = fixture_site(&[
            HOME,
            PROJECTS,
            ("2024-01-01-january.md", "# January\n\nbody"),
            ("undated-post.md", "# Undated\n\nbody"),
            ("2024-06-15-june.md", "# June\n\nbody"),
        ]);
        site.build().unwrap();

        let html = fs::read_to_string(site.output_dir.join("index.html")).unwrap();
        let recent = &html[html.find("Recent Posts").unwrap()..];
        let june = recent.find("2024-06-15-june.html").unwrap();
        let january = recent.find("2024-01-01-january.html").unwrap();
        let undated = recent.find("undated-post.html").unwrap();
        assert!(june < january);
        assert!(january < undated);
    }

    #[test]
    fn test_blog_index_lists_every_post() {
        let (_dir, site) = fixture_site(&[
            HOME,
            PROJECTS,
            ("2024-01-01-one.md", "# One\n\nbody"),
            ("2024-02-02-two.md", "# Two\n\nbody"),
            ("2024-03-03-three.md", "# Three\n\nbody"),
            ("2024-04-04-four.md", "# Four\n\nbody"),
        ]);
        site.build().unwrap();

        let html = fs::read_to_string(site.output_dir.join("blog.html")).unwrap();
        assert!(html.contains("<h1>Blog Posts</h1>"));
        for link in [
            "2024-01-01-one.html",
            "2024-02-02-two.html",
            "2024-03-03-three.html",
            "2024-04-04-four.html",
        ] {
            assert!(html.contains(link), "blog index missing {}", link);
        }
        // Newest first
        assert!(html.find("four").unwrap() < html.find("one").unwrap());
    }

    #[test]
    fn test_nested_index_md_is_an_ordinary_post() {
        let (_dir, site) = fixture_site(&[HOME, PROJECTS, ("notes/index.md", "# Notes\n\nbody")]);
        site.build().unwrap();

        assert!(site.output_dir.join("notes/index.html").exists());
        let blog = fs::read_to_string(site.output_dir.join("blog.html")).unwrap();
        assert!(blog.contains("/notes/index.html"));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let (_dir, site) = fixture_site(&[
            HOME,
            PROJECTS,
            ("2024-01-01-one.md", "# One\n\nbody"),
        ]);
        site.build().unwrap();
        let first = read_tree(&site.output_dir);
        site.build().unwrap();
        let second = read_tree(&site.output_dir);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_home_source_fails_without_home_page() {
        let (_dir, site) = fixture_site(&[PROJECTS, ("2024-01-01-one.md", "# One\n\nbody")]);
        let err = site.build().unwrap_err();
        assert!(err.to_string().contains("home page source"));
        // The clean step ran and posts were written, but the build stopped
        // before producing index.html
        assert!(!site.output_dir.join("index.html").exists());
    }

    #[test]
    fn test_unreadable_home_source_is_not_reported_as_missing() {
        let (_dir, site) = fixture_site(&[PROJECTS]);
        // An index.md that exists but cannot be read as a file
        fs::create_dir_all(site.posts_dir.join("index.md")).unwrap();
        let err = site.build().unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("failed to load home page source"));
        assert!(!msg.contains("missing"));
    }

    #[test]
    fn test_missing_projects_source_fails() {
        let (_dir, site) = fixture_site(&[HOME]);
        let err = site.build().unwrap_err();
        assert!(err.to_string().contains("projects page source"));
        assert!(!site.output_dir.join("projects.html").exists());
    }

    #[test]
    fn test_missing_posts_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(site.build().is_err());
    }
}
