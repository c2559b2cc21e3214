//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - Authorization 헤더 분해, JWT 형태 검사, 토큰 마스킹

pub mod string_utils;
