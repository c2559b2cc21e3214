//! 세션 토큰 검증기
//!
//! Authorization 헤더 값 하나를 받아 [`ValidationOutcome`]을 돌려줍니다.
//! 어떤 실패도 에러로 전파하지 않고 `Rejected` 값으로 바꿉니다.
//!
//! ## 검증 순서 (첫 실패에서 중단)
//!
//! 1. 헤더 없음/빈 값 → `MissingToken`
//! 2. 공백 기준 두 번째 토막 없음 → `InvalidFormat`
//! 3. JWT 형태가 아님 → `InvalidStructure` (서명 검증 전 빠른 거부)
//! 4. 서명/클레임 검증 실패 → `VerificationFailed`
//! 5. `exp` 경과 → `Expired`
//! 6. id + role + 저장된 토큰이 모두 일치하는 사용자 조회
//! 7. 없음 → `PrincipalNotFound`, 저장소 오류 → `Internal`

use std::sync::Arc;
use chrono::Utc;
use log::{error, warn};
use crate::{
    domain::models::auth::{AuthenticatedUser, RejectReason, ValidationOutcome},
    repositories::users::UserStore,
    services::auth::TokenService,
    utils::string_utils::{is_jwt_shaped, mask_token, split_bearer},
};

/// 세션 토큰 검증기
///
/// 요청 간에 바뀌는 상태를 갖지 않습니다. 저장된 토큰 값은 매번 저장소에서 새로 읽습니다.
pub struct SessionValidator {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserStore>,
}

impl SessionValidator {
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Authorization 헤더 값을 검증합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// match validator.validate(Some("Bearer eyJhbGciOi...")).await {
    ///     ValidationOutcome::Valid(user) => println!("사용자: {}", user.user_id),
    ///     ValidationOutcome::Rejected(reason) => println!("거부: {}", reason),
    /// }
    /// ```
    pub async fn validate(&self, authorization: Option<&str>) -> ValidationOutcome {
        match self.check(authorization).await {
            Ok(user) => ValidationOutcome::Valid(user),
            Err(reason) => ValidationOutcome::Rejected(reason),
        }
    }

    async fn check(&self, authorization: Option<&str>) -> Result<AuthenticatedUser, RejectReason> {
        let header = authorization
            .filter(|h| !h.trim().is_empty())
            .ok_or(RejectReason::MissingToken)?;

        let bearer = split_bearer(header).ok_or(RejectReason::InvalidFormat)?;

        if !is_jwt_shaped(bearer) {
            warn!("토큰 구조 검증 실패: {}", mask_token(bearer));
            return Err(RejectReason::InvalidStructure);
        }

        let claims = self
            .tokens
            .verify_token(bearer)
            .map_err(|e| RejectReason::VerificationFailed(e.message().to_string()))?;

        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(RejectReason::Expired);
        }

        let user = self
            .users
            .find_by_session(&claims.sub, claims.role, bearer)
            .await
            .map_err(|e| {
                error!("세션 사용자 조회 오류: {}", e);
                RejectReason::Internal(e.message().to_string())
            })?;

        let Some(user) = user else {
            warn!("사용자 없음 또는 토큰 불일치: {}", claims.sub);
            return Err(RejectReason::PrincipalNotFound);
        };

        AuthenticatedUser::from_user(user).ok_or(RejectReason::PrincipalNotFound)
    }
}
