//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 확인 엔드포인트입니다.
//! 회원가입과 로그인은 새 세션 토큰을 발급하고 사용자 레코드에 저장합니다.
//!
//! # Endpoints
//!
//! - `POST /auth/register` - 회원가입 (공개)
//! - `POST /auth/login` - 이메일/비밀번호 로그인 (공개)
//! - `GET /auth/verify` - 현재 토큰의 사용자 확인 (인증 필요)
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/register`
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "error": false,
///   "authorized": true,
///   "message": "Registration",
///   "data": { "user": { ... }, "token": "eyJ...", "token_type": "Bearer", "expires_in": 2592000 }
/// }
/// ```
///
/// ## 실패
/// - 400 입력 검증 실패
/// - 409 `User already exists`
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("회원가입 요청 - 이메일: {}", payload.email);

    let response = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Registration", response)))
}

/// 로컬 로그인 핸들러
///
/// 로그인할 때마다 새 토큰이 발급되고, 이전에 발급된 토큰은 더 이상 통과하지 못합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("로컬 로그인 시도 - 사용자: {}", payload.email);

    let response = user_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Login", response)))
}

/// 현재 토큰이 가리키는 사용자 확인
///
/// 게이트를 통과했다면 토큰은 이미 유효하므로 Principal만 돌려줍니다.
///
/// # Endpoint
/// `GET /auth/verify`
#[get("/verify")]
pub async fn verify_token(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "valid": true,
        "user_id": user.user_id,
        "role": user.role
    })))
}
