use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SedgeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Page,
    Blog,
    Listing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "source", rename_all = "lowercase")]
pub enum Summary {
    #[default]
    Empty,
    Literal(String),
    Templated(String),
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }

    pub fn source(&self) -> &str {
        match self {
            Summary::Empty => "",
            Summary::Literal(html) => html,
            Summary::Templated(source) => source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub path: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    pub lang: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub kind: ContentKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub further_readings: Vec<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub has_summary: bool,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub next_post: Option<String>,
    #[serde(default)]
    pub prev_post: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub page_items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdField {
    #[default]
    Id,
    Slug,
    Path,
}

impl Content {
    pub fn field(&self, field: IdField) -> &str {
        match field {
            IdField::Id => &self.id,
            IdField::Slug => &self.slug,
            IdField::Path => &self.path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default = "default_further_readings_max")]
    pub further_readings_max: usize,
    #[serde(default = "default_further_readings_max_per_tag")]
    pub further_readings_max_per_tag: usize,
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub id_field: IdField,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            further_readings_max: default_further_readings_max(),
            further_readings_max_per_tag: default_further_readings_max_per_tag(),
            posts_per_page: default_posts_per_page(),
            languages: default_languages(),
            id_field: IdField::default(),
        }
    }
}

impl BlogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|error| SedgeError::TomlParse {
            message: error.to_string(),
        })
    }
}

fn default_further_readings_max() -> usize {
    6
}

fn default_further_readings_max_per_tag() -> usize {
    2
}

fn default_posts_per_page() -> usize {
    10
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string(), "de".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = BlogConfig::from_toml_str("").unwrap();
        assert_eq!(config.further_readings_max, 6);
        assert_eq!(config.further_readings_max_per_tag, 2);
        assert_eq!(config.posts_per_page, 10);
        assert_eq!(config.languages, vec!["en", "de"]);
        assert_eq!(config.id_field, IdField::Id);
    }

    #[test]
    fn test_config_overrides() {
        let config = BlogConfig::from_toml_str(
            "further_readings_max = 3\nlanguages = [\"en\"]\nid_field = \"slug\"\n",
        )
        .unwrap();
        assert_eq!(config.further_readings_max, 3);
        assert_eq!(config.further_readings_max_per_tag, 2);
        assert_eq!(config.languages, vec!["en"]);
        assert_eq!(config.id_field, IdField::Slug);
    }

    #[test]
    fn test_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sedge.toml");
        fs::write(&path, "posts_per_page = 5\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let config = BlogConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.posts_per_page, 5);
    }

    #[test]
    fn test_config_invalid_toml() {
        assert!(BlogConfig::from_toml_str("posts_per_page = ").is_err());
    }

    #[test]
    fn test_summary_source() {
        assert_eq!(Summary::Empty.source(), "");
        assert_eq!(Summary::Literal("<p>hi</p>".to_string()).source(), "<p>hi</p>");
        assert!(Summary::Empty.is_empty());
        assert!(!Summary::Literal(String::new()).is_empty());
    }

    #[test]
    fn test_content_field_projection() {
        let content = Content {
            id: "first".to_string(),
            path: "blog/first.md".to_string(),
            slug: "first-post".to_string(),
            lang: "en".to_string(),
            ..Content::default()
        };
        assert_eq!(content.field(IdField::Id), "first");
        assert_eq!(content.field(IdField::Slug), "first-post");
        assert_eq!(content.field(IdField::Path), "blog/first.md");
    }
}
