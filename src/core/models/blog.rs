use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub author_avatar_url: Option<String>,
    pub tags: Vec<String>,
    pub likes: i32,
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn reading_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        ((words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE).max(1)
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostView {
    #[serde(flatten)]
    pub post: BlogPost,
    pub reading_minutes: usize,
}

impl From<BlogPost> for BlogPostView {
    fn from(post: BlogPost) -> Self {
        let reading_minutes = post.reading_minutes();
        Self { post, reading_minutes }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostCreate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub author_avatar_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub author_avatar_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub search: Option<String>,
}

impl Query {
    pub fn matches(&self, post: &BlogPost) -> bool {
        match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                post.title.to_lowercase().contains(&term) || post.content.to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}
