use chrono::Utc;

use crate::actix_web::{
    web::{Data, Json, Path},
    HttpResponse,
};
use crate::context::AdminInfo;
use crate::core::models::{BallotCast, BallotStatus, CandidateCreate, ElectionCreate, ElectionDetail, ElectionView, VoteReceipt};
use crate::core::ports::repository::Manager;
use crate::core::services::election as service;
use crate::error::Error;

pub async fn list<M: Manager + 'static>(manager: Data<M>) -> Result<Json<Vec<ElectionView>>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::list(&mut store, Utc::now()).await?))
}

pub async fn current<M: Manager + 'static>(manager: Data<M>) -> Result<Json<Option<ElectionView>>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::current(&mut store, Utc::now()).await?))
}

pub async fn detail<M: Manager + 'static>(manager: Data<M>, id: Path<(i32,)>) -> Result<Json<ElectionDetail>, Error> {
    let mut store = manager.db().await?;
    Ok(Json(service::detail(&mut store, id.into_inner().0, Utc::now()).await?))
}

pub async fn vote<M: Manager + 'static>(manager: Data<M>, id: Path<(i32,)>, Json(cast): Json<BallotCast>) -> Result<Json<VoteReceipt>, Error> {
    let tx = manager.tx().await?;
    Ok(Json(service::cast_vote(tx, id.into_inner().0, cast, Utc::now()).await?))
}

pub async fn ballot<M: Manager + 'static>(manager: Data<M>, path: Path<(i32, String)>) -> Result<Json<BallotStatus>, Error> {
    let (id, voter) = path.into_inner();
    let mut store = manager.db().await?;
    Ok(Json(service::ballot(&mut store, id, &voter).await?))
}

pub async fn create<M: Manager + 'static>(admin: AdminInfo, manager: Data<M>, Json(form): Json<ElectionCreate>) -> Result<HttpResponse, Error> {
    let mut store = manager.db().await?;
    let election = service::create(&mut store, form, Utc::now()).await?;
    log::info!("{} scheduled election {}", admin.email, election.id);
    Ok(HttpResponse::Created().json(election))
}

pub async fn add_candidate<M: Manager + 'static>(_: AdminInfo, manager: Data<M>, id: Path<(i32,)>, Json(form): Json<CandidateCreate>) -> Result<HttpResponse, Error> {
    let mut store = manager.db().await?;
    let candidate = service::add_candidate(&mut store, id.into_inner().0, form).await?;
    Ok(HttpResponse::Created().json(candidate))
}
