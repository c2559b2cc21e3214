//! 사용자 요청 DTO 모듈
//!
//! `validator`로 검증되는 회원가입/로그인 요청 구조체를 제공합니다.

pub mod auth_request;

pub use auth_request::{LoginRequest, RegisterRequest};
