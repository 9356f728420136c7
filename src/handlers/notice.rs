use chrono::Utc;

use crate::actix_web::{
    web::{Data, Json, Path, Query},
    HttpResponse,
};
use crate::context::AdminInfo;
use crate::core::models::{Notice, NoticeCreate};
use crate::core::ports::repository::Manager;
use crate::core::services::notice as service;
use crate::error::Error;
use crate::response::DeleteResponse;
use crate::serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ActiveParams {
    emergency: Option<bool>,
}

pub async fn active<M: Manager + 'static>(manager: Data<M>, Query(params): Query<ActiveParams>) -> Result<Json<Option<Notice>>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::active(&mut store, params.emergency).await?))
}

pub async fn by_slug<M: Manager + 'static>(manager: Data<M>, slug: Path<(String,)>) -> Result<Json<Notice>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::by_slug(&mut store, &slug.into_inner().0).await?))
}

pub async fn list<M: Manager + 'static>(_: AdminInfo, manager: Data<M>) -> Result<Json<Vec<Notice>>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::list(&mut store).await?))
}

pub async fn create<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, Json(form): Json<NoticeCreate>) -> Result<HttpResponse, Error> {
    let mut store = manager.db().await?;
    let notice = service::create(&mut store, form, Utc::now()).await?;
    log::info!("{} published notice {}", admin.email, notice.slug);
    Ok(HttpResponse::Created().json(notice))
}

#[derive(Debug, Deserialize)]
pub struct Toggle {
    is_active: bool,
}

pub async fn set_active<M: Manager + 'static>(_: AdminInfo, manager: Data<M>, id: Path<(i32,)>, Json(Toggle { is_active }): Json<Toggle>) -> Result<Json<Notice>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::set_active(&mut store, id.into_inner().0, is_active).await?))
}

pub async fn delete<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, id: Path<(i32,)>) -> Result<Json<DeleteResponse>, Error> {
    let id = id.into_inner().0;
    let mut store = manager.db().await?;
    service::delete(&mut store, id).await?;
    log::info!("{} removed notice {}", admin.email, id);
    Ok(Json(DeleteResponse { id }))
}
