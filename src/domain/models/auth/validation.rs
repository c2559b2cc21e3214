//! 토큰 검증 결과 타입
//!
//! 검증기는 에러를 던지지 않고 항상 [`ValidationOutcome`] 값을 돌려줍니다.
//! 게이트는 이 값 하나로 허용/거부를 결정합니다.

use std::fmt;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 토큰 거부 사유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Authorization 헤더가 없거나 비어 있음
    MissingToken,
    /// `Bearer <token>` 형식이 아님 (두 번째 토막 없음)
    InvalidFormat,
    /// JWT 구조가 아님 (서명 검증 전 단계에서 거부)
    InvalidStructure,
    /// 서명/클레임 검증 실패. 라이브러리가 보고한 사유 포함
    VerificationFailed(String),
    /// 만료 시각 경과
    Expired,
    /// id + role + 저장된 토큰이 모두 일치하는 사용자가 없음
    PrincipalNotFound,
    /// 검증 중 발생한 예기치 못한 오류 (저장소 장애 등)
    Internal(String),
}

impl RejectReason {
    pub fn message(&self) -> String {
        match self {
            RejectReason::MissingToken => "No authorization token provided".to_string(),
            RejectReason::InvalidFormat => "Invalid token format".to_string(),
            RejectReason::InvalidStructure => "Invalid token structure".to_string(),
            RejectReason::VerificationFailed(detail) => {
                format!("Token verification failed: {}", detail)
            }
            RejectReason::Expired => "Token has expired".to_string(),
            RejectReason::PrincipalNotFound => "User not found or invalid token".to_string(),
            RejectReason::Internal(detail) => detail.clone(),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// 토큰 검증 결과
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    Valid(AuthenticatedUser),
    Rejected(RejectReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn principal(&self) -> Option<&AuthenticatedUser> {
        match self {
            ValidationOutcome::Valid(user) => Some(user),
            ValidationOutcome::Rejected(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Rejected(reason) => Some(reason),
        }
    }
}
