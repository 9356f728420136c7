use chrono::Utc;

use crate::actix_web::{
    web::{Data, Json, Path, Query},
    HttpResponse,
};
use crate::context::AdminInfo;
use crate::core::models::{BlogPost, BlogPostCreate, BlogPostView};
use crate::core::ports::repository::Manager;
use crate::core::services::blog as service;
use crate::error::Error;
use crate::request::Pagination;
use crate::response::{DeleteResponse, List};
use crate::serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Search {
    search: Option<String>,
}

pub async fn list<M: Manager + 'static>(manager: Data<M>, Query(Search { search }): Query<Search>, Query(page): Query<Pagination>) -> Result<Json<List<BlogPost>>, Error> {
    let mut store = manager.db().await?;
    let (list, total) = service::query(&mut store, search, page.into()).await?;
    Ok(Json(List::new(list, total)))
}

pub async fn read<M: Manager + 'static>(manager: Data<M>, slug: Path<(String,)>) -> Result<Json<BlogPostView>, Error> {
    let tx = manager.tx().await?;
    Ok(Json(service::read(tx, &slug.into_inner().0).await?))
}

#[derive(Debug, Serialize)]
pub struct Likes {
    likes: i32,
}

pub async fn like<M: Manager + 'static>(manager: Data<M>, slug: Path<(String,)>) -> Result<Json<Likes>, Error> {
    let mut store = manager.db().await?;
    let likes = service::like(&mut store, &slug.into_inner().0).await?;
    Ok(Json(Likes { likes }))
}

pub async fn create<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, Json(form): Json<BlogPostCreate>) -> Result<HttpResponse, Error> {
    let mut store = manager.db().await?;
    let post = service::create(&mut store, form, Utc::now()).await?;
    log::info!("{} published blog post {}", admin.email, post.slug);
    Ok(HttpResponse::Created().json(post))
}

pub async fn delete<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, id: Path<(i32,)>) -> Result<Json<DeleteResponse>, Error> {
    let id = id.into_inner().0;
    let mut store = manager.db().await?;
    service::delete(&mut store, id).await?;
    log::info!("{} removed blog post {}", admin.email, id);
    Ok(Json(DeleteResponse { id }))
}
