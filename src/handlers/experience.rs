use chrono::Utc;

use crate::actix_web::{
    web::{Data, Json, Path, Query},
    HttpResponse,
};
use crate::context::AdminInfo;
use crate::core::models::{experience::Query as ExperienceQuery, Experience, ExperienceDetail, ExperienceSubmit, Slide};
use crate::core::ports::repository::Manager;
use crate::core::services::experience as service;
use crate::error::Error;
use crate::request::Pagination;
use crate::response::{DeleteResponse, List, WithContact};
use crate::serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Filter {
    approved: Option<String>,
    search: Option<String>,
}

pub async fn submit<M: Manager + 'static>(manager: Data<M>, Json(form): Json<ExperienceSubmit>) -> Result<HttpResponse, Error> {
    let mut store = manager.db().await?;
    let exp = service::submit(&mut store, form, Utc::now()).await?;
    Ok(HttpResponse::Created().json(exp))
}

pub async fn list<M: Manager + 'static>(manager: Data<M>, Query(filter): Query<Filter>, Query(page): Query<Pagination>) -> Result<Json<List<Experience>>, Error> {
    let query = ExperienceQuery::parse(filter.approved.as_deref(), filter.search)?;
    let mut store = manager.db().await?;
    let (list, total) = service::query(&mut store, &query, page.into()).await?;
    Ok(Json(List::new(list, total)))
}

pub async fn detail<M: Manager + 'static>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<ExperienceDetail>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::detail(&mut store, id.into_inner().0).await?))
}

#[derive(Debug, Deserialize)]
pub struct Highlight {
    index: Option<usize>,
}

pub async fn highlight<M: Manager + 'static>(manager: Data<M>, Query(Highlight { index }): Query<Highlight>) -> Result<Json<Slide<Experience>>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::highlight(&mut store, index, Utc::now()).await?))
}

pub async fn admin_list<M: Manager + 'static>(
    admin: AdminInfo,
    manager: Data<M>,
    Query(filter): Query<Filter>,
    Query(page): Query<Pagination>,
) -> Result<Json<List<WithContact<Experience>>>, Error> {
    let query = ExperienceQuery::parse(filter.approved.as_deref(), filter.search)?;
    let mut store = manager.db().await?;
    let (list, total) = service::query(&mut store, &query, page.into()).await?;
    log::debug!("{} listed {} experiences", admin.email, list.len());
    let list = list
        .into_iter()
        .map(|e| WithContact {
            email: e.email.clone(),
            record: e,
        })
        .collect();
    Ok(Json(List::new(list, total)))
}

pub async fn delete<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, id: Path<(i32,)>) -> Result<Json<DeleteResponse>, Error> {
    let id = id.into_inner().0;
    let mut store = manager.db().await?;
    service::delete(&mut store, id).await?;
    log::info!("{} removed visa experience {}", admin.email, id);
    Ok(Json(DeleteResponse { id }))
}
