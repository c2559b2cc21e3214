//! 요청 처리 중에만 존재하는 도메인 모델
//!
//! 영속되지 않는 값 객체들입니다. 토큰 클레임, Principal, 검증 결과를 포함합니다.

pub mod auth;
pub mod token;
