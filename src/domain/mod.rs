//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 엔티티와 요청/응답 DTO, 요청 단위 모델을 담습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 객체 (User)
//! ├── DTOs      - 요청/응답 계약 (Register, Login, UserResponse)
//! └── Models    - 요청 처리 중에만 존재하는 값 (TokenClaims, AuthenticatedUser, ValidationOutcome)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
