//! 쇼핑몰 세션 토큰 인증 게이트
//!
//! 쇼핑몰 백엔드의 HTTP 요청 앞단에서 Bearer 토큰을 검증합니다.
//! 사용자당 유효한 세션 토큰은 하나이며, 새로 로그인하면 이전 토큰은 즉시 무효가 됩니다.
//!
//! # Features
//!
//! - **토큰 발급**: 회원가입/로그인 시 HS256 JWT 발급 후 사용자 레코드에 저장
//! - **토큰 검증**: 형식, 구조, 서명, 만료, 저장된 토큰 일치 여부를 순서대로 확인
//! - **인증 게이트**: 공개 경로를 제외한 모든 요청에 검증 적용
//! - **역할 가드**: `ADMIN` 전용 스코프
//! - **MongoDB**: 사용자 데이터와 현재 세션 토큰 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    AuthGate     │ ← Authorization 헤더 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 발급/검증, 회원가입/로그인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopgate::config::JwtConfig;
//! use shopgate::services::auth::{SessionValidator, TokenService};
//!
//! let tokens = Arc::new(TokenService::new(JwtConfig::from_env()?));
//! let validator = SessionValidator::new(tokens.clone(), user_store.clone());
//!
//! match validator.validate(Some("Bearer eyJ...")).await {
//!     ValidationOutcome::Valid(user) => println!("{}", user.user_id),
//!     ValidationOutcome::Rejected(reason) => println!("{}", reason),
//! }
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
