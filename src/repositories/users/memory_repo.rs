//! 테스트용 메모리 사용자 저장소

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    domain::entities::users::user::{Role, User},
    errors::AppError,
    repositories::users::UserStore,
};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID가 없으면 새로 부여해서 그대로 넣습니다. 중복 검사 없음.
    pub fn insert(&self, mut user: User) -> User {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        self.users.write().unwrap().push(user.clone());
        user
    }

    pub fn stored_token(&self, id: &str) -> Option<String> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .and_then(|u| u.token.clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_session(
        &self,
        id: &str,
        role: Role,
        token: &str,
    ) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| {
                u.id_string().as_deref() == Some(id) && u.role == role && u.holds_token(token)
            })
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("User already exists".to_string()));
        }
        Ok(self.insert(user))
    }

    async fn store_token(&self, id: &str, token: &str) -> Result<bool, AppError> {
        let mut users = self.users.write().unwrap();
        match users.iter_mut().find(|u| u.id_string().as_deref() == Some(id)) {
            Some(user) => {
                user.token = Some(token.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
