use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_emergency: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoticeCreate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_emergency: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub active: Option<bool>,
    pub emergency: Option<bool>,
}

impl Query {
    pub fn matches(&self, notice: &Notice) -> bool {
        self.active.map_or(true, |a| notice.is_active == a) && self.emergency.map_or(true, |e| notice.is_emergency == e)
    }
}
