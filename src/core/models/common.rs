use serde::Serialize;

use crate::error::Error;

pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    pub const DEFAULT_SIZE: i64 = 20;
    pub const MAX_SIZE: i64 = 100;

    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// 1-based page number; out of range values are clamped.
    pub fn from_page(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let size = size.unwrap_or(Self::DEFAULT_SIZE).clamp(1, Self::MAX_SIZE);
        Self::new(size, (page - 1).saturating_mul(size))
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

/// One position of a carousel together with the neighbours a client needs to navigate.
#[derive(Debug, Clone, Serialize)]
pub struct Slide<T> {
    pub index: usize,
    pub total: usize,
    pub next: usize,
    pub prev: usize,
    pub items: Vec<T>,
}

impl<T> Slide<T> {
    pub fn empty() -> Self {
        Self {
            index: 0,
            total: 0,
            next: 0,
            prev: 0,
            items: Vec::new(),
        }
    }
}

/// Rejects blank values. The value itself is returned untouched.
pub fn required(field: &str, value: String) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(value)
}

/// Blank counts as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn email(value: String) -> Result<String, Error> {
    let value = required("email", value)?;
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(Error::InvalidInput("email is invalid".into())),
    }
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pagination() {
        let p = Pagination::from_page(None, None);
        assert_eq!((p.limit(), p.offset()), (20, 0));
        let p = Pagination::from_page(Some(3), Some(10));
        assert_eq!((p.limit(), p.offset()), (10, 20));
        let p = Pagination::from_page(Some(0), Some(1000));
        assert_eq!((p.limit(), p.offset()), (100, 0));
    }

    #[test]
    fn test_pagination_huge_page() {
        let p = Pagination::from_page(Some(i64::MAX), Some(100));
        assert_eq!((p.limit(), p.offset()), (100, i64::MAX));
        let p = Pagination::from_page(Some(i64::MAX), None);
        assert!(p.offset() > 0);
    }

    #[test]
    fn test_required() {
        assert_eq!(required("name", "  Test User ".into()).unwrap(), "  Test User ");
        assert!(matches!(required("name", "   ".into()), Err(Error::InvalidInput(_))));
        assert!(matches!(required("name", "\n\t".into()), Err(Error::InvalidInput(_))));
        assert_eq!(optional(Some("  ".into())), None);
        assert_eq!(optional(Some(" Alumni".into())), Some(" Alumni".into()));
    }

    #[test]
    fn test_email() {
        assert!(email("you@example.com".into()).is_ok());
        assert!(email("example.com".into()).is_err());
        assert!(email("@example.com".into()).is_err());
        assert_eq!(email(" you@example.com ".into()).unwrap(), " you@example.com ");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Summer 2025 Visa Interview Slots Open"), "summer-2025-visa-interview-slots-open");
        assert_eq!(slugify("  F-1 -- visa!! "), "f-1-visa");
        assert_eq!(slugify("!!!"), "");
    }
}
