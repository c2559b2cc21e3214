//! JWT 세션 토큰 클레임 구조체
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)과 사용자 역할만 담습니다.
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ObjectId 16진수 문자열)
/// - `role`: 사용자 역할 (`USER` / `ADMIN`)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl TokenClaims {
    /// 주어진 시각(Unix timestamp) 기준으로 만료되었는지 확인
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// 발급된 토큰과 만료 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
