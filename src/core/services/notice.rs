use chrono::{DateTime, Utc};

use crate::core::models::{
    common::{optional, required, slugify, Pagination},
    notice::{Insert, Notice, NoticeCreate, Query},
};
use crate::core::ports::repository::{NoticeCommon, Store};
use crate::error::Error;

async fn unique_slug<S>(store: &mut S, title: &str) -> Result<String, Error>
where
    S: Store,
{
    let mut base = slugify(title);
    if base.is_empty() {
        base = "notice".to_owned();
    }
    let mut slug = base.clone();
    let mut n = 1;
    while NoticeCommon::slug_exists(store, &slug).await? {
        n += 1;
        slug = format!("{}-{}", base, n);
    }
    Ok(slug)
}

pub async fn create<S>(store: &mut S, form: NoticeCreate, now: DateTime<Utc>) -> Result<Notice, Error>
where
    S: Store,
{
    let title = required("title", form.title)?;
    let content = required("content", form.content)?;
    let slug = unique_slug(store, &title).await?;
    let notice = NoticeCommon::insert(
        store,
        Insert {
            title,
            slug,
            content,
            image_url: optional(form.image_url),
            is_emergency: form.is_emergency,
            is_active: form.is_active,
            created_at: now,
        },
    )
    .await?;
    log::info!("notice {} published as {}", notice.id, notice.slug);
    Ok(notice)
}

/// Most recent active notice, optionally only among emergency ones.
pub async fn active<S>(store: &mut S, emergency: Option<bool>) -> Result<Option<Notice>, Error>
where
    S: Store,
{
    let query = Query { active: Some(true), emergency };
    let mut list = NoticeCommon::query(store, &query, Some(Pagination::new(1, 0))).await?;
    Ok(list.pop())
}

pub async fn by_slug<S>(store: &mut S, slug: &str) -> Result<Notice, Error>
where
    S: Store,
{
    NoticeCommon::get_by_slug(store, slug).await
}

pub async fn list<S>(store: &mut S) -> Result<Vec<Notice>, Error>
where
    S: Store,
{
    NoticeCommon::query(store, &Query::default(), None).await
}

pub async fn set_active<S>(store: &mut S, id: i32, active: bool) -> Result<Notice, Error>
where
    S: Store,
{
    let notice = NoticeCommon::set_active(store, id, active).await?;
    log::info!("notice {} is_active={}", id, active);
    Ok(notice)
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if NoticeCommon::delete(store, id).await? == 0 {
        return Err(Error::NotFound("notice".into()));
    }
    log::info!("notice {} deleted", id);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::ports::repository::Manager;
    use crate::database::memory::MemoryManager;
    use chrono::Duration;

    fn form(title: &str, is_emergency: bool) -> NoticeCreate {
        NoticeCreate {
            title: title.into(),
            content: "Embassy closed on Monday.".into(),
            image_url: None,
            is_emergency,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_slug_collisions() {
        let manager = MemoryManager::new();
        let mut store = manager.db().await.unwrap();
        let now = Utc::now();
        let a = create(&mut store, form("Interview Slots Open!", false), now).await.unwrap();
        let b = create(&mut store, form("Interview slots open", false), now).await.unwrap();
        let c = create(&mut store, form("interview  SLOTS open", false), now).await.unwrap();
        let d = create(&mut store, form("???", false), now).await.unwrap();
        assert_eq!(a.slug, "interview-slots-open");
        assert_eq!(b.slug, "interview-slots-open-2");
        assert_eq!(c.slug, "interview-slots-open-3");
        assert_eq!(d.slug, "notice");
        assert_eq!(by_slug(&mut store, "interview-slots-open-2").await.unwrap().id, b.id);
        assert!(matches!(by_slug(&mut store, "missing").await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_active_notice() {
        let manager = MemoryManager::new();
        let mut store = manager.db().await.unwrap();
        let now = Utc::now();
        assert!(active(&mut store, None).await.unwrap().is_none());

        let urgent = create(&mut store, form("Embassy closure", true), now).await.unwrap();
        let regular = create(&mut store, form("Webinar", false), now + Duration::minutes(1)).await.unwrap();
        assert_eq!(active(&mut store, None).await.unwrap().unwrap().id, regular.id);
        assert_eq!(active(&mut store, Some(true)).await.unwrap().unwrap().id, urgent.id);

        set_active(&mut store, urgent.id, false).await.unwrap();
        assert!(active(&mut store, Some(true)).await.unwrap().is_none());
        assert!(matches!(set_active(&mut store, 999, true).await, Err(Error::NotFound(_))));

        delete(&mut store, regular.id).await.unwrap();
        assert!(active(&mut store, None).await.unwrap().is_none());
        assert_eq!(list(&mut store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let manager = MemoryManager::new();
        let mut store = manager.db().await.unwrap();
        assert!(matches!(create(&mut store, form(" ", false), Utc::now()).await, Err(Error::InvalidInput(_))));
    }
}
