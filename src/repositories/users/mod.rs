//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층과 인증 게이트는 [`UserStore`] 트레이트에만 의존합니다.
//! 운영 환경에서는 MongoDB 기반 [`UserRepository`](user_repo::UserRepository)를,
//! 테스트에서는 메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{user_repo::UserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = store.find_by_email("user@example.com").await?;
//! ```

use async_trait::async_trait;
use crate::domain::entities::users::user::{Role, User};
use crate::errors::AppError;

pub mod user_repo;
#[cfg(test)]
pub mod memory_repo;

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ObjectId 16진수 문자열로 조회. 형식이 잘못된 ID는 `ValidationError`.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// id, role, 저장된 세션 토큰이 모두 일치하는 사용자를 조회합니다.
    ///
    /// 형식이 잘못된 ID는 일치하는 사용자가 없는 것으로 취급합니다 (`Ok(None)`).
    async fn find_by_session(
        &self,
        id: &str,
        role: Role,
        token: &str,
    ) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    /// 이메일이 이미 있으면 `ConflictError`.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 사용자의 세션 토큰을 덮어씁니다 (단일 문서 원자적 갱신).
    /// 대상 사용자가 없으면 `Ok(false)`.
    async fn store_token(&self, id: &str, token: &str) -> Result<bool, AppError>;
}
