//! User Entity Implementation
//!
//! 쇼핑몰 사용자 엔티티입니다. 인증 게이트의 Principal 역할을 하며,
//! 현재 유효한 세션 토큰을 `token` 필드 하나에 보관합니다.
//!
//! ## 단일 세션 규칙
//!
//! 로그인(또는 회원가입)에 성공할 때마다 새 토큰이 `token` 필드를 덮어씁니다.
//! 이전 토큰은 서명과 만료가 유효하더라도 저장된 값과 일치하지 않으므로
//! 인증 게이트에서 거부됩니다.

use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub role: Role,
    /// 현재 유효한 세션 토큰 (없으면 null)
    #[serde(default)]
    pub token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        phone: String,
        gender: Gender,
        role: Role,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name,
            last_name,
            email,
            password_hash,
            phone,
            gender,
            role,
            token: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 제시된 토큰이 현재 저장된 세션 토큰과 같은지 확인
    pub fn holds_token(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }
}
