use chrono::Utc;

use crate::actix_web::{
    web::{Data, Json, Path, Query},
    HttpResponse,
};
use crate::context::AdminInfo;
use crate::core::models::{Slide, Testimonial, TestimonialSubmit};
use crate::core::ports::repository::Manager;
use crate::core::services::testimonial as service;
use crate::error::Error;
use crate::request::Pagination;
use crate::response::{DeleteResponse, List, WithContact};
use crate::serde::Deserialize;

pub async fn submit<M: Manager + 'static>(manager: Data<M>, Json(form): Json<TestimonialSubmit>) -> Result<HttpResponse, Error> {
    let mut store = manager.db().await?;
    let testimonial = service::submit(&mut store, form, Utc::now()).await?;
    Ok(HttpResponse::Created().json(testimonial))
}

pub async fn list<M: Manager + 'static>(manager: Data<M>, Query(page): Query<Pagination>) -> Result<Json<List<Testimonial>>, Error> {
    let mut store = manager.db().await?;
    let (list, total) = service::query(&mut store, page.into()).await?;
    Ok(Json(List::new(list, total)))
}

#[derive(Debug, Deserialize)]
pub struct SlideParams {
    slide: Option<usize>,
    per_slide: Option<usize>,
}

pub async fn slides<M: Manager + 'static>(manager: Data<M>, Query(params): Query<SlideParams>) -> Result<Json<Slide<Testimonial>>, Error> {
    let mut store = manager.db().await?;
    let slide = service::slides(&mut store, params.slide.unwrap_or(0), params.per_slide.unwrap_or(service::PER_SLIDE)).await?;
    Ok(Json(slide))
}

pub async fn admin_list<M: Manager + 'static>(_: AdminInfo, manager: Data<M>, Query(page): Query<Pagination>) -> Result<Json<List<WithContact<Testimonial>>>, Error> {
    let mut store = manager.db().await?;
    let (list, total) = service::query(&mut store, page.into()).await?;
    let list = list
        .into_iter()
        .map(|t| WithContact {
            email: t.email.clone(),
            record: t,
        })
        .collect();
    Ok(Json(List::new(list, total)))
}

pub async fn delete<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, id: Path<(i32,)>) -> Result<Json<DeleteResponse>, Error> {
    let id = id.into_inner().0;
    let mut store = manager.db().await?;
    service::delete(&mut store, id).await?;
    log::info!("{} removed testimonial {}", admin.email, id);
    Ok(Json(DeleteResponse { id }))
}
