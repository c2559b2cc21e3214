//! # User HTTP Handlers
//!
//! 인증된 사용자의 프로필 조회와 관리자용 사용자 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 접근 |
//! |--------|------|------|------|
//! | `GET` | `/users/me` | 내 프로필 | 인증 필요 |
//! | `GET` | `/admin/users/{id}` | 사용자 조회 | `ADMIN` 역할 |
//!
//! 응답에는 비밀번호 해시와 세션 토큰이 포함되지 않습니다.

use actix_web::{get, web, HttpResponse};
use crate::domain::dto::users::response::{ApiResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 내 프로필 조회
///
/// 게이트가 이번 요청에서 읽어 온 사용자 레코드를 그대로 사용하므로
/// 저장소를 다시 조회하지 않습니다.
///
/// # Endpoint
/// `GET /users/me`
#[get("/me")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile", UserResponse::from(user.user))))
}

/// 관리자용 사용자 조회
///
/// # Endpoint
/// `GET /admin/users/{user_id}`
///
/// ## 실패
/// - 400 잘못된 ObjectId 형식
/// - 404 `User not found`
#[get("/users/{user_id}")]
pub async fn get_user_admin(
    user_service: web::Data<UserService>,
    admin: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("관리자 사용자 조회 - 요청자: {}, 대상: {}", admin.user_id, user_id);

    let user = user_service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("User", user)))
}
