//! File-based article repository.
//!
//! Articles are markdown files (`.md` or `.mdx`) in one directory; the file
//! stem is the slug and YAML front matter carries the metadata.

use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ContentError;
use crate::frontmatter::extract_frontmatter;

const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// One article as loaded from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Identifier, the file stem.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short summary.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Human-readable reading time, e.g. `5 min`.
    pub read_time: String,
    /// Cover image reference.
    pub image: String,
    /// Raw markdown body, front matter removed.
    pub content: String,
    /// Publication date as written (ISO-ish).
    pub date: String,
}

impl Article {
    /// Parsed publication date, if the stored string is a recognized format.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }

    /// Publication date for display, falling back to the raw string.
    pub fn display_date(&self) -> String {
        format_display_date(&self.date)
    }
}

/// Values used for front matter fields an article omits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDefaults {
    /// Title when `title` is missing.
    pub title: String,
    /// Description when `description` is missing.
    pub description: String,
    /// Category when `category` is missing.
    pub category: String,
    /// Reading time when `readTime` is missing.
    pub read_time: String,
    /// Image when `image` is missing.
    pub image: String,
}

impl Default for ContentDefaults {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            description: String::new(),
            category: "Articles".to_string(),
            read_time: "5 min".to_string(),
            image: "/open-book-knowledge.png".to_string(),
        }
    }
}

/// Source of articles for pages and listings.
pub trait ContentRepository {
    /// Looks up one article. `Ok(None)` means not found.
    fn get(&self, slug: &str) -> Result<Option<Article>, ContentError>;

    /// Every article, newest first.
    fn all(&self) -> Result<Vec<Article>, ContentError>;

    /// The `count` newest articles.
    fn latest(&self, count: usize) -> Result<Vec<Article>, ContentError> {
        let mut articles = self.all()?;
        articles.truncate(count);
        Ok(articles)
    }
}

/// Repository reading articles from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsContentRepository {
    root: PathBuf,
    defaults: ContentDefaults,
}

impl FsContentRepository {
    /// Creates a repository rooted at `root` with default fallbacks.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_defaults(root, ContentDefaults::default())
    }

    /// Creates a repository with custom fallbacks.
    pub fn with_defaults(root: impl Into<PathBuf>, defaults: ContentDefaults) -> Self {
        Self {
            root: root.into(),
            defaults,
        }
    }

    /// Directory the repository reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self, slug: &str, path: &Path) -> Result<Article, ContentError> {
        let source = fs::read_to_string(path).map_err(|err| ContentError::io(path, err))?;
        let frontmatter =
            extract_frontmatter(&source).map_err(|source| ContentError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?;
        let field = |key: &str, fallback: &str| {
            frontmatter
                .field(key)
                .unwrap_or_else(|| fallback.to_string())
        };

        Ok(Article {
            slug: slug.to_string(),
            title: field("title", &self.defaults.title),
            description: field("description", &self.defaults.description),
            category: field("category", &self.defaults.category),
            read_time: field("readTime", &self.defaults.read_time),
            image: field("image", &self.defaults.image),
            content: frontmatter.body(&source).to_string(),
            date: frontmatter
                .field("date")
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        })
    }
}

impl ContentRepository for FsContentRepository {
    fn get(&self, slug: &str) -> Result<Option<Article>, ContentError> {
        if !is_valid_slug(slug) {
            log::warn!("rejecting article slug {slug:?}");
            return Ok(None);
        }

        for extension in EXTENSIONS {
            let path = self.root.join(format!("{slug}.{extension}"));
            if path.is_file() {
                return self.load(slug, &path).map(Some);
            }
        }
        Ok(None)
    }

    fn all(&self) -> Result<Vec<Article>, ContentError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(ContentError::io(&self.root, err)),
        };

        let mut articles = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| ContentError::io(&self.root, err))?.path();
            let Some(slug) = article_slug(&path) else {
                continue;
            };
            match self.load(slug, &path) {
                Ok(article) => articles.push(article),
                Err(err) => log::warn!("skipping article: {err}"),
            }
        }

        sort_newest_first(&mut articles);
        Ok(articles)
    }
}

/// Slug of an article file, `None` for anything that is not `.md`/`.mdx`.
fn article_slug(path: &Path) -> Option<&str> {
    let extension = path.extension()?.to_str()?;
    if !EXTENSIONS.contains(&extension) || !path.is_file() {
        return None;
    }
    path.file_stem()?.to_str()
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && !slug.contains("..")
        && !slug.contains(['/', '\\', '\0'])
}

/// Sorts articles by publication date, newest first.
///
/// Articles whose date does not parse go last; ties keep their slug order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| match (a.published_at(), b.published_at()) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    });
}

/// Parses the date formats articles use: RFC 3339, `YYYY-MM-DD`, and
/// `YYYY-MM-DDTHH:MM[:SS]` without an offset (taken as UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.and_utc())
}

/// Formats a date as `Month D, YYYY`, or returns the raw string unchanged
/// when it does not parse.
pub fn format_display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).expect("write fixture");
    }

    fn repository() -> (TempDir, FsContentRepository) {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            &dir,
            "savings.md",
            "---\ntitle: Savings\ncategory: Money\nreadTime: 4 min\ndate: 2024-02-01\n---\n# Save\n",
        );
        write(
            &dir,
            "credit.mdx",
            "---\ntitle: Credit\ndate: 2024-05-10T08:30:00Z\n---\nBody",
        );
        write(&dir, "undated.md", "---\ntitle: Undated\ndate: someday\n---\nBody");
        write(&dir, "notes.txt", "not an article");
        let repository = FsContentRepository::new(dir.path());
        (dir, repository)
    }

    #[test]
    fn get_reads_fields_and_defaults() {
        let (_dir, repository) = repository();
        let article = repository.get("savings").unwrap().expect("article");
        assert_eq!(article.title, "Savings");
        assert_eq!(article.category, "Money");
        assert_eq!(article.read_time, "4 min");
        assert_eq!(article.description, "");
        assert_eq!(article.image, "/open-book-knowledge.png");
        assert_eq!(article.content, "# Save\n");
        assert_eq!(article.display_date(), "February 1, 2024");
    }

    #[test]
    fn get_falls_back_to_mdx() {
        let (_dir, repository) = repository();
        let article = repository.get("credit").unwrap().expect("article");
        assert_eq!(article.read_time, "5 min");
        assert_eq!(article.category, "Articles");
    }

    #[test]
    fn get_missing_or_invalid_is_none() {
        let (_dir, repository) = repository();
        assert!(repository.get("missing").unwrap().is_none());
        assert!(repository.get("../etc/passwd").unwrap().is_none());
        assert!(repository.get("").unwrap().is_none());
        assert!(repository.get("notes").unwrap().is_none());
    }

    #[test]
    fn all_sorts_newest_first_with_unparseable_last() {
        let (_dir, repository) = repository();
        let slugs: Vec<String> = repository
            .all()
            .unwrap()
            .into_iter()
            .map(|article| article.slug)
            .collect();
        assert_eq!(slugs, ["credit", "savings", "undated"]);
    }

    #[test]
    fn latest_truncates() {
        let (_dir, repository) = repository();
        let latest = repository.latest(2).unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].slug, "credit");
        assert!(repository.latest(0).unwrap().is_empty());
    }

    #[test]
    fn all_skips_broken_front_matter() {
        let (dir, repository) = repository();
        write(&dir, "broken.md", "---\ntitle: [oops\n---\n");
        assert_eq!(repository.all().unwrap().len(), 3);
        assert!(matches!(
            repository.get("broken"),
            Err(ContentError::Frontmatter { .. })
        ));
    }

    #[test]
    fn missing_directory_is_empty() {
        let repository = FsContentRepository::new("/definitely/not/here");
        assert!(repository.all().unwrap().is_empty());
    }

    #[test]
    fn custom_defaults_apply() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(&dir, "plain.md", "No front matter here.");
        let repository = FsContentRepository::with_defaults(
            dir.path(),
            ContentDefaults {
                title: "Без названия".to_string(),
                category: "Статьи".to_string(),
                ..ContentDefaults::default()
            },
        );
        let article = repository.get("plain").unwrap().expect("article");
        assert_eq!(article.title, "Без названия");
        assert_eq!(article.category, "Статьи");
        assert_eq!(article.content, "No front matter here.");
        assert!(article.published_at().is_some());
    }

    #[test]
    fn display_date_falls_back_to_raw() {
        assert_eq!(format_display_date("2023-12-24"), "December 24, 2023");
        assert_eq!(format_display_date("2023-12-24T10:00"), "December 24, 2023");
        assert_eq!(format_display_date("next spring"), "next spring");
    }
}
