use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{Gender, Role, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 세션 토큰은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            phone,
            gender,
            role,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            email,
            phone,
            gender,
            role,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 회원가입/로그인 응답 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user: User, token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 쇼핑몰 공통 성공 응답 형식
///
/// ```json
/// { "error": false, "authorized": true, "message": "Login", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub error: bool,
    pub authorized: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            authorized: true,
            message: message.into(),
            data,
        }
    }
}
