use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::user::{Gender, Role};

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    pub gender: Gender,

    /// 생략하면 `USER`
    ///
    /// 가입자가 `ADMIN`을 직접 지정할 수 있으며, 그 계정은 `/admin` 스코프를 통과합니다.
    /// 쇼핑몰 관리자 계정도 같은 회원가입 경로로 만들어집니다.
    #[serde(default)]
    pub role: Role,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
