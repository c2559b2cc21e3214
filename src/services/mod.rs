//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스들은 `main`에서 설정값과 저장소를 받아 한 번 생성되고,
//! `Arc`로 공유되어 `web::Data`와 미들웨어에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::{SessionValidator, TokenService}, users::UserService};
//!
//! let tokens = Arc::new(TokenService::new(jwt_config));
//! let validator = Arc::new(SessionValidator::new(tokens.clone(), user_store.clone()));
//! let user_service = Arc::new(UserService::new(user_store, tokens, bcrypt_cost));
//! ```

pub mod users;
pub mod auth;
