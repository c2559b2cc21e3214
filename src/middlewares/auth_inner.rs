//! AuthGate 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::config::GateConfig;
use crate::domain::models::auth::{RejectReason, ValidationOutcome};
use crate::errors::AppError;
use crate::services::auth::SessionValidator;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthGateService<S> {
    pub service: Rc<S>,
    pub validator: Arc<SessionValidator>,
    pub config: Arc<GateConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
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
        let validator = self.validator.clone();
        let config = self.config.clone();

        Box::pin(async move {
            if config.is_public(req.path()) {
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            }

            let authorization = req
                .headers()
                .get(header::AUTHORIZATION)
                .map(|value| value.to_str().map(str::to_owned))
                .filter(|value| !matches!(value, Ok(raw) if raw.trim().is_empty()));

            let outcome = match authorization {
                // 헤더가 없거나 빈 값이면 검증기를 거치지 않음
                None => {
                    log::warn!("Authorization 헤더 없음: {} {}", req.method(), req.path());
                    return Ok(reject(req, "Authorization Failed"));
                }
                Some(Ok(raw)) => validator.validate(Some(&raw)).await,
                Some(Err(_)) => ValidationOutcome::Rejected(RejectReason::InvalidFormat),
            };

            match outcome {
                ValidationOutcome::Valid(user) => {
                    log::debug!("인증 성공: 사용자 ID {} ({})", user.user_id, user.role);
                    req.extensions_mut().insert(user);
                }
                ValidationOutcome::Rejected(reason) => {
                    let mut message = reason.message();
                    if message.is_empty() {
                        message = "Token validation failed".to_string();
                    }
                    log::warn!("인증 거부: {} {} - {}", req.method(), req.path(), message);
                    return Ok(reject(req, &message));
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 401 응답으로 요청을 종료
fn reject<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = AppError::AuthenticationError(message.to_string()).error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
