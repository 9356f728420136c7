use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub email: String,
    pub university: String,
    pub role: Option<String>,
    pub quote: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TestimonialSubmit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub university: String,
    pub role: Option<String>,
    #[serde(default)]
    pub quote: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub name: String,
    pub email: String,
    pub university: String,
    pub role: Option<String>,
    pub quote: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
