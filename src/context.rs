use crate::actix_web::{self, FromRequest, HttpMessage};
use crate::error::Error;
use std::future::{ready, Ready};

/// The authenticated administrator, placed into request extensions by the admin middleware.
#[derive(Debug, Clone)]
pub struct AdminInfo {
    pub email: String,
}

impl FromRequest for AdminInfo {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Self>() {
            Some(admin) => ready(Ok(admin.clone())),
            None => ready(Err(Error::Unauthorized)),
        }
    }
}
