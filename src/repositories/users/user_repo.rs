//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **컬렉션**: `users`
//! - **인덱스**: email(unique), `_id + role + token` 복합 인덱스(세션 검증용)
//! - **캐싱 없음**: 세션 토큰은 매 요청마다 저장소에서 읽습니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::{Role, User},
    errors::AppError,
    repositories::users::UserStore,
};

pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드 (E11000)
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **ConflictError**: 이메일 중복
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let created = repo.create(new_user).await?;
/// let user_id = created.id_string().unwrap_or_default();
/// repo.store_token(&user_id, &token).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))
    }

    /// 컬렉션 인덱스를 생성합니다. 서버 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 게이트의 세션 조회 필터와 같은 필드 순서
        let session_index = IndexModel::builder()
            .keys(doc! { "_id": 1, "role": 1, "token": 1 })
            .options(IndexOptions::builder()
                .name("session_lookup".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, session_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_session(
        &self,
        id: &str,
        role: Role,
        token: &str,
    ) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! {
                "_id": object_id,
                "role": role.as_str(),
                "token": token,
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }

        // 조회와 삽입 사이에 같은 이메일이 먼저 들어오면 unique 인덱스가 E11000으로 거부
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| classify_write_error(write_error_code(&e), e.to_string()))?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted id is not an ObjectId".to_string())
        })?;
        user.id = Some(inserted_id);

        Ok(user)
    }

    async fn store_token(&self, id: &str, token: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;

        let result = self.collection
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "token": token, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}

fn write_error_code(error: &mongodb::error::Error) -> Option<i32> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        _ => None,
    }
}

/// 쓰기 에러 코드를 `AppError`로 변환. 중복 키는 409, 나머지는 500.
fn classify_write_error(code: Option<i32>, message: String) -> AppError {
    match code {
        Some(DUPLICATE_KEY_CODE) => AppError::ConflictError("User already exists".to_string()),
        _ => AppError::DatabaseError(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_becomes_conflict() {
        let error = classify_write_error(
            Some(DUPLICATE_KEY_CODE),
            "E11000 duplicate key error collection: shop_dev.users index: email_unique".to_string(),
        );

        match error {
            AppError::ConflictError(msg) => assert_eq!(msg, "User already exists"),
            other => panic!("Expected ConflictError, got {:?}", other),
        }
    }

    #[test]
    fn test_other_write_errors_stay_database_errors() {
        let error = classify_write_error(Some(121), "Document failed validation".to_string());
        assert!(matches!(error, AppError::DatabaseError(ref msg) if msg == "Document failed validation"));

        let error = classify_write_error(None, "connection reset".to_string());
        assert!(matches!(error, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_duplicate_key_write_error_is_detected() {
        let write_error: mongodb::error::WriteError = mongodb::bson::from_document(doc! {
            "code": DUPLICATE_KEY_CODE,
            "errmsg": "E11000 duplicate key error collection: shop_dev.users index: email_unique",
        })
        .unwrap();
        let error = mongodb::error::Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)));

        let code = write_error_code(&error);

        assert_eq!(code, Some(DUPLICATE_KEY_CODE));
        assert!(matches!(
            classify_write_error(code, error.to_string()),
            AppError::ConflictError(_)
        ));
    }

    #[test]
    fn test_non_write_error_has_no_code() {
        let error = mongodb::error::Error::custom("pool cleared");
        assert_eq!(write_error_code(&error), None);
    }
}
