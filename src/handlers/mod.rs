pub mod blog;
pub mod content;
pub mod election;
pub mod experience;
pub mod notice;
pub mod testimonial;
pub mod upload;

use actix_web::{
    cookie::{time::Duration as CookieDuration, time::OffsetDateTime, Cookie, SameSite},
    http::StatusCode,
    HttpResponseBuilder,
};
use chrono::Utc;

use crate::actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use crate::context::AdminInfo;
use crate::core::auth::{self, AdminGate};
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use crate::middlewares::jwt::ADMIN_TOKEN;
use crate::serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Login {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(Json(Login { email, password }): Json<Login>, gate: Data<AdminGate>, tokener: Data<JWT>) -> Result<HttpResponse, Error> {
    let session = auth::login(&gate, tokener.get_ref(), &email, &password, Utc::now())?;
    let cookie = Cookie::build(ADMIN_TOKEN, session.token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::seconds(gate.ttl.num_seconds()))
        .finish();
    Ok(HttpResponse::build(StatusCode::OK).cookie(cookie).json(session))
}

pub async fn logout() -> HttpResponse {
    HttpResponseBuilder::new(StatusCode::OK)
        .cookie(
            Cookie::build(ADMIN_TOKEN, "")
                .path("/")
                .http_only(true)
                .max_age(CookieDuration::ZERO)
                .expires(OffsetDateTime::UNIX_EPOCH)
                .finish(),
        )
        .finish()
}

#[derive(Serialize)]
pub struct Whoami {
    email: String,
}

pub async fn session(admin: AdminInfo) -> Json<Whoami> {
    Json(Whoami { email: admin.email })
}
