use crate::core::models::common::Pagination as PagePosition;
use crate::serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl From<Pagination> for PagePosition {
    fn from(p: Pagination) -> Self {
        PagePosition::from_page(p.page, p.size)
    }
}
