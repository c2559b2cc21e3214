//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 사용자 조회를 담당합니다.
//! 회원가입과 로그인은 세션 토큰을 발급하는 유일한 지점이며,
//! 발급한 토큰을 사용자 레코드에 덮어써서 이전 세션을 무효화합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost (`PasswordConfig::bcrypt_cost`)
//! - **동일한 실패 메시지**: 없는 이메일과 틀린 비밀번호 모두 `Invalid credentials`
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시와 저장된 토큰이 없음

use std::sync::Arc;
use bcrypt::hash;
use crate::{
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest},
            response::{AuthResponse, UserResponse},
        },
        entities::users::user::User,
    },
    errors::{AppError, ErrorContext},
    repositories::users::UserStore,
    services::auth::TokenService,
};

pub struct UserService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// 새 사용자를 등록하고 첫 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    /// * `AppError::InternalError` - 해싱/토큰 서명 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        let start_time = std::time::Instant::now();

        let password_hash = hash(&request.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;

        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            password_hash,
            request.phone,
            request.gender,
            request.role,
        );

        let created = self.users.create(user).await?;
        let response = self.start_session(created).await?;

        log::info!("회원가입 완료 - 사용자: {}, 소요: {:?}", response.user.id, start_time.elapsed());

        Ok(response)
    }

    /// 이메일/비밀번호로 로그인하고 새 세션 토큰을 발급합니다.
    /// 이전에 발급된 토큰은 이 시점부터 무효입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 이메일 없음 또는 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = self.users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid credentials".to_string()))?;

        let is_valid = bcrypt::verify(&request.password, &user.password_hash)
            .context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", request.email);
            return Err(AppError::AuthenticationError("Invalid credentials".to_string()));
        }

        let response = self.start_session(user).await?;
        log::info!("로그인 성공 - 사용자: {}", response.user.id);

        Ok(response)
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 토큰을 발급하고 사용자 레코드에 저장합니다 (마지막 저장이 유일한 세션).
    async fn start_session(&self, mut user: User) -> Result<AuthResponse, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let issued = self.tokens.issue_token(&user_id, user.role)?;

        if !self.users.store_token(&user_id, &issued.token).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        user.token = Some(issued.token.clone());

        Ok(AuthResponse::new(user, issued.token, issued.expires_in))
    }
}
