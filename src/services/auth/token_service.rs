//! JWT 토큰 관리 서비스 구현
//!
//! 세션 토큰의 발급과 서명 검증을 담당합니다.
//! 서명 키는 시작 시점에 [`JwtConfig`]로 한 번 읽어서 주입받습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use crate::{
    config::JwtConfig,
    domain::entities::users::user::Role,
    domain::models::token::{IssuedToken, TokenClaims},
    errors::AppError,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 토큰 유효기간은 `JwtConfig`의 일 수(기본 30일)입니다.
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret().as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret().as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// 토큰 유효기간 (초)
    pub fn validity_seconds(&self) -> i64 {
        Duration::days(self.config.expiration_days()).num_seconds()
    }

    /// 사용자 ID와 역할을 담은 세션 토큰을 발급합니다.
    ///
    /// 발급만 할 뿐 저장하지 않습니다. 호출한 쪽에서 사용자 레코드의
    /// `token` 필드에 저장해야 이전 토큰이 무효화됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = token_service.issue_token(&user_id, Role::User)?;
    /// user_store.store_token(&user_id, &issued.token).await?;
    /// ```
    pub fn issue_token(&self, user_id: &str, role: Role) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.config.expiration_days());

        let claims = TokenClaims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            // 같은 초에 두 번 로그인해도 서로 다른 토큰이 나오도록
            jti: ObjectId::new().to_hex(),
        };

        let token = self.sign(&claims)?;

        Ok(IssuedToken {
            token,
            expires_in: self.validity_seconds(),
        })
    }

    /// 클레임에 서명해서 토큰 문자열을 만듭니다.
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 서명을 검증하고 클레임을 추출합니다.
    ///
    /// 라이브러리의 만료 검사는 기본 leeway(60초)를 적용하므로,
    /// 정확한 만료 판정은 호출한 쪽에서 `exp`로 다시 해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 서명 불일치, 형식 오류, 만료 등.
    ///   메시지는 라이브러리가 보고한 사유입니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| AppError::AuthenticationError(e.to_string()))
    }
}
