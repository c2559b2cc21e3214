use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;
use crate::domain::entities::users::user::{Role, User};
use crate::errors::AppError;

/// 인증 게이트가 요청에 연결하는 Principal
///
/// 토큰 클레임이 아니라 이번 요청에서 새로 조회한 사용자 레코드로 만들어집니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수)
    pub user_id: String,

    /// 사용자 역할
    pub role: Role,

    /// 검증 시점의 사용자 레코드
    #[serde(skip)]
    pub user: User,
}

impl AuthenticatedUser {
    /// ID가 없는 레코드(아직 저장되지 않은 사용자)는 Principal이 될 수 없음
    pub fn from_user(user: User) -> Option<Self> {
        let user_id = user.id_string()?;

        Some(Self {
            user_id,
            role: user.role,
            user,
        })
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authorization Failed".to_string(),
            ))),
        }
    }
}
