//! Users Entity Module
//!
//! 쇼핑몰 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{Gender, Role, User};
//!
//! let user = User::new(
//!     "John".to_string(),
//!     "Doe".to_string(),
//!     "user@example.com".to_string(),
//!     hashed_password,
//!     "092423423".to_string(),
//!     Gender::Male,
//!     Role::User,
//! );
//! ```

pub mod user;
