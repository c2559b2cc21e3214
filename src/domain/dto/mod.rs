//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의하는 DTO 모듈입니다.
//! 엔티티를 그대로 노출하지 않고, 비밀번호 해시나 세션 토큰 같은
//! 민감한 필드를 응답에서 제외합니다.

pub mod users;

pub use users::*;
