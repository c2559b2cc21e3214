//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 쇼핑몰 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 쇼핑몰 공통 응답 형식(`error`, `authorized`, `message`)으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | `authorized` |
//! |----------|-------------|--------------|
//! | `ValidationError` | 400 Bad Request | true |
//! | `AuthenticationError` | 401 Unauthorized | false |
//! | `AuthorizationError` | 403 Forbidden | true |
//! | `NotFound` | 404 Not Found | true |
//! | `ConflictError` | 409 Conflict | true |
//! | `DatabaseError` / `InternalError` | 500 Internal Server Error | true |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn login(data: LoginRequest) -> Result<User, AppError> {
//!     let user = user_store.find_by_email(&data.email).await?
//!         .ok_or_else(|| AppError::AuthenticationError("Invalid credentials".to_string()))?;
//!     Ok(user)
//! }
//! ```

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 담을 메시지 (접두사 없이 원래 사유만)
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

/// 쇼핑몰 공통 에러 응답 본문
///
/// 인증 게이트의 거부 응답과 핸들러 에러가 같은 형식을 사용합니다.
/// `authorized`는 401일 때만 `false`입니다.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: bool,
    pub authorized: bool,
    pub message: &'a str,
}

impl<'a> ErrorBody<'a> {
    pub fn new(message: &'a str, authorized: bool) -> Self {
        Self {
            error: true,
            authorized,
            message,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        let authorized = status != StatusCode::UNAUTHORIZED;

        actix_web::HttpResponse::build(status)
            .json(ErrorBody::new(self.message(), authorized))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
