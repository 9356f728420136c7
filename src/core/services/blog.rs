use chrono::{DateTime, Utc};

use crate::core::models::{
    blog::{BlogPost, BlogPostCreate, BlogPostView, Insert, Query},
    common::{optional, required, slugify, Pagination},
};
use crate::core::ports::repository::{BlogPostCommon, Store, TxStore};
use crate::error::Error;

pub async fn create<S>(store: &mut S, form: BlogPostCreate, now: DateTime<Utc>) -> Result<BlogPost, Error>
where
    S: Store,
{
    let title = required("title", form.title)?;
    let mut base = slugify(&title);
    if base.is_empty() {
        base = "post".to_owned();
    }
    let mut slug = base.clone();
    let mut n = 1;
    while BlogPostCommon::slug_exists(store, &slug).await? {
        n += 1;
        slug = format!("{}-{}", base, n);
    }
    let tags = form.tags.into_iter().filter_map(|t| optional(Some(t))).map(|t| t.trim().to_lowercase()).collect();
    let post = BlogPostCommon::insert(
        store,
        Insert {
            title,
            slug,
            content: required("content", form.content)?,
            author: required("author", form.author)?,
            author_avatar_url: optional(form.author_avatar_url),
            tags,
            created_at: now,
        },
    )
    .await?;
    log::info!("blog post {} published as {}", post.id, post.slug);
    Ok(post)
}

pub async fn query<S>(store: &mut S, search: Option<String>, pagination: Pagination) -> Result<(Vec<BlogPost>, i64), Error>
where
    S: Store,
{
    let query = Query {
        search: optional(search).map(|s| s.trim().to_owned()),
    };
    let total = BlogPostCommon::count(store, &query).await?;
    let list = BlogPostCommon::query(store, &query, Some(pagination)).await?;
    Ok((list, total))
}

async fn read_in<S>(store: &mut S, slug: &str) -> Result<BlogPostView, Error>
where
    S: Store,
{
    let mut post = BlogPostCommon::get_by_slug(store, slug).await?;
    post.views = BlogPostCommon::increase_views(store, post.id).await?;
    Ok(post.into())
}

/// Fetches a post and counts the view in the same transaction.
pub async fn read<T>(mut tx: T, slug: &str) -> Result<BlogPostView, Error>
where
    T: TxStore,
{
    match read_in(&mut tx, slug).await {
        Ok(view) => {
            tx.commit().await?;
            Ok(view)
        }
        Err(e) => {
            tx.rollback().await?;
            Err(e)
        }
    }
}

pub async fn like<S>(store: &mut S, slug: &str) -> Result<i32, Error>
where
    S: Store,
{
    BlogPostCommon::increase_likes(store, slug).await
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if BlogPostCommon::delete(store, id).await? == 0 {
        return Err(Error::NotFound("blog post".into()));
    }
    log::info!("blog post {} deleted", id);
    Ok(())
}
