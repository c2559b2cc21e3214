//! # Authentication Configuration Module
//!
//! JWT 서명 키, 토큰 유효기간, 인증 게이트의 공개 경로 목록을 관리하는 모듈입니다.
//!
//! 설정값은 애플리케이션 시작 시 한 번만 읽어서 구조체로 만들고,
//! 이후에는 [`TokenService`](crate::services::auth::TokenService)와
//! [`AuthGate`](crate::middlewares::AuthGate)에 값으로 전달됩니다.
//! 요청 처리 중에 환경 변수를 다시 읽지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export JWT_EXPIRATION_DAYS="30"
//! export PUBLIC_PATHS="/auth/login,/auth/register,/health"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GateConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let gate_config = GateConfig::from_env();
//! ```

use std::env;
use crate::errors::AppError;

/// 토큰 기본 유효기간 (일)
pub const DEFAULT_TOKEN_VALIDITY_DAYS: i64 = 30;

/// 인증 없이 접근 가능한 기본 경로
pub const DEFAULT_PUBLIC_PATHS: [&str; 3] = ["/auth/login", "/auth/register", "/health"];

/// JWT 서명 및 만료 설정
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC 서명용 대칭 키
    secret: String,
    /// 토큰 유효기간 (일)
    expiration_days: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_days: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_days,
        }
    }

    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_SECRET`이 없거나 비어 있는 경우.
    ///   서버 시작을 중단해야 하는 치명적 설정 오류입니다.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::InternalError("JWT_SECRET must be set".to_string()))?;

        let expiration_days = env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_TOKEN_VALIDITY_DAYS);

        Ok(Self::new(secret, expiration_days))
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

/// 인증 게이트 설정
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    /// 토큰 검증을 건너뛰는 경로 (정확히 일치해야 함)
    pub public_paths: Vec<String>,
}

impl GateConfig {
    pub fn new<I, S>(public_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            public_paths: public_paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        match env::var("PUBLIC_PATHS") {
            Ok(raw) => Self::parse_paths(&raw),
            Err(_) => Self::default(),
        }
    }

    /// 쉼표로 구분된 경로 목록을 파싱합니다. 빈 항목은 무시합니다.
    pub fn parse_paths(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty()),
        )
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PATHS)
    }
}
