use std::future::{ready, Future, Ready};
use std::pin::Pin;

use crate::actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use crate::context::AdminInfo;
use crate::core::auth::Claim;
use crate::core::tokener::Tokener;
use crate::error::Error as AppError;
use crate::impls::tokener::jwt::JWT;

pub static ADMIN_TOKEN: &str = "ADMIN_TOKEN";

/// Rejects a request with 401 unless it carries a valid admin session token.
pub struct AdminJwt {
    tokener: JWT,
}

impl AdminJwt {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { tokener: JWT::new(secret) }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminJwt
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminJwtService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminJwtService {
            tokener: self.tokener.clone(),
            next_service: service,
        }))
    }
}

pub struct AdminJwtService<S> {
    tokener: JWT,
    next_service: S,
}

/// Bearer header first, then the session cookie.
fn token(req: &ServiceRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_owned());
    }
    req.cookie(ADMIN_TOKEN).map(|c| c.value().to_owned()).filter(|v| !v.is_empty())
}

impl<S> AdminJwtService<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<AdminInfo, AppError> {
        let token = token(req).ok_or(AppError::Unauthorized)?;
        let claim: Claim = self.tokener.verify_token(&token).map_err(|e| {
            log::debug!("admin token rejected: {}", e);
            AppError::Unauthorized
        })?;
        Ok(AdminInfo { email: claim.sub })
    }
}

impl<S, B> Service<ServiceRequest> for AdminJwtService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(next_service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authenticate(&req) {
            Err(e) => Box::pin(async move { Ok(req.error_response(e).map_into_right_body()) }),
            Ok(admin) => {
                req.extensions_mut().insert(admin);
                let res_fut = self.next_service.call(req);
                Box::pin(async move {
                    let resp = res_fut.await?;
                    Ok(resp.map_into_left_body())
                })
            }
        }
    }
}
