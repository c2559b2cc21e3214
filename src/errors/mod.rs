//! 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 공통 에러 응답 형식을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorBody, ErrorContext};
