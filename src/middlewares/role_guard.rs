//! 역할 기반 접근 제어 미들웨어
//!
//! [`AuthGate`](super::AuthGate)가 붙여 둔 `AuthenticatedUser`의 역할을 확인합니다.
//! 스코프 단위로 감싸서 사용합니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/admin")
//!         .wrap(RoleGuard::require(Role::Admin))
//!         .service(handlers::users::get_user_admin)
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use crate::domain::entities::users::user::Role;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::errors::AppError;

pub struct RoleGuard {
    required: RequiredRole,
}

impl RoleGuard {
    pub fn require(role: Role) -> Self {
        Self {
            required: RequiredRole::Single(role),
        }
    }

    /// 여러 역할 중 하나만 있으면 통과
    pub fn require_any(roles: Vec<Role>) -> Self {
        Self {
            required: RequiredRole::Any(roles),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RoleGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardService {
            service: Rc::new(service),
            required: self.required.clone(),
        }))
    }
}

pub struct RoleGuardService<S> {
    service: Rc<S>,
    required: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for RoleGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let role = req.extensions().get::<AuthenticatedUser>().map(|user| user.role);

        let denial = match role {
            None => Some("User not found"),
            Some(role) if !self.required.is_satisfied(role) => {
                log::warn!("권한 부족: 역할 {}, 필요 권한: {:?}", role, self.required);
                Some("You do not have permission to access this resource")
            }
            Some(_) => None,
        };

        Box::pin(async move {
            if let Some(message) = denial {
                let response = AppError::AuthorizationError(message.to_string()).error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
