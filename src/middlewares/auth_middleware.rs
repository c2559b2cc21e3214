//! 세션 토큰 인증 게이트
//!
//! 애플리케이션 전체를 감싸서 공개 경로가 아닌 모든 요청에 대해
//! [`SessionValidator`]의 판정을 받습니다. 통과한 요청에는
//! `AuthenticatedUser`가 Request Extensions에 붙습니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::GateConfig;
use crate::middlewares::auth_inner::AuthGateService;
use crate::services::auth::SessionValidator;

/// 인증 게이트 미들웨어
pub struct AuthGate {
    validator: Arc<SessionValidator>,
    /// 인증 없이 통과시킬 경로 목록
    config: Arc<GateConfig>,
}

impl AuthGate {
    pub fn new(validator: Arc<SessionValidator>, config: GateConfig) -> Self {
        Self {
            validator,
            config: Arc::new(config),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service: Rc::new(service),
            validator: self.validator.clone(),
            config: self.config.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_governor::{Governor, GovernorConfigBuilder};
    use actix_web::http::header::{HeaderValue, AUTHORIZATION};
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use async_trait::async_trait;
    use crate::{
        config::JwtConfig,
        domain::{
            entities::users::user::{Gender, Role, User},
            models::auth::AuthenticatedUser,
        },
        errors::AppError,
        repositories::users::{memory_repo::InMemoryUserStore, UserStore},
        services::auth::TokenService,
    };

    struct Fixture {
        tokens: Arc<TokenService>,
        store: Arc<InMemoryUserStore>,
        validator: Arc<SessionValidator>,
    }

    fn fixture() -> Fixture {
        let tokens = Arc::new(TokenService::new(JwtConfig::new("gate-secret", 30)));
        let store = Arc::new(InMemoryUserStore::new());
        let validator = Arc::new(SessionValidator::new(tokens.clone(), store.clone()));

        Fixture { tokens, store, validator }
    }

    async fn login(f: &Fixture, role: Role) -> (String, String) {
        let user = f.store.insert(User::new(
            "Jane".to_string(),
            "Doe".to_string(),
            format!("jane-{}@example.com", role),
            "hash".to_string(),
            "0923423423".to_string(),
            Gender::Female,
            role,
        ));
        let user_id = user.id_string().unwrap();
        let token = f.tokens.issue_token(&user_id, role).unwrap().token;
        f.store.store_token(&user_id, &token).await.unwrap();
        (user_id, token)
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn open() -> HttpResponse {
        HttpResponse::Ok().body("open")
    }

    macro_rules! gated_app {
        ($validator:expr) => {
            test::init_service(
                App::new()
                    .wrap(AuthGate::new($validator, GateConfig::default()))
                    .route("/auth/login", web::post().to(open))
                    .route("/health", web::get().to(open))
                    .route("/orders", web::get().to(whoami)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_public_path_passes_without_header() {
        let f = fixture();
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::post().uri("/auth/login").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "open");
    }

    #[actix_web::test]
    async fn test_public_path_ignores_garbage_header() {
        let f = fixture();
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_protected_path_without_header() {
        let f = fixture();
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::get().uri("/orders").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["authorized"], false);
        assert_eq!(body["message"], "Authorization Failed");
    }

    #[actix_web::test]
    async fn test_allow_list_is_exact_match() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .wrap(AuthGate::new(f.validator.clone(), GateConfig::default()))
                .route("/auth/login/extra", web::get().to(open)),
        )
        .await;

        let req = test::TestRequest::get().uri("/auth/login/extra").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_bearer_without_token() {
        let f = fixture();
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::get()
            .uri("/orders")
            .insert_header(("Authorization", "Bearer"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token format");
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let f = fixture();
        let (user_id, token) = login(&f, Role::User).await;
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::get()
            .uri("/orders")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, user_id.as_bytes());
    }

    #[actix_web::test]
    async fn test_relogin_makes_previous_token_stale() {
        let f = fixture();
        let (user_id, first) = login(&f, Role::User).await;
        let app = gated_app!(f.validator.clone());

        let second = f.tokens.issue_token(&user_id, Role::User).unwrap().token;
        f.store.store_token(&user_id, &second).await.unwrap();

        let stale = test::TestRequest::get()
            .uri("/orders")
            .insert_header(("Authorization", format!("Bearer {}", first)))
            .to_request();
        let resp = test::call_service(&app, stale).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User not found or invalid token");

        let current = test::TestRequest::get()
            .uri("/orders")
            .insert_header(("Authorization", format!("Bearer {}", second)))
            .to_request();
        let resp = test::call_service(&app, current).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_custom_public_paths() {
        let f = fixture();
        let app = test::init_service(
            App::new()
                .wrap(AuthGate::new(f.validator.clone(), GateConfig::parse_paths("/catalog")))
                .route("/catalog", web::get().to(open))
                .route("/health", web::get().to(open)),
        )
        .await;

        let catalog = test::TestRequest::get().uri("/catalog").to_request();
        assert_eq!(test::call_service(&app, catalog).await.status(), StatusCode::OK);

        let health = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, health).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_empty_header_is_treated_as_missing() {
        let f = fixture();
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::get()
            .uri("/orders")
            .insert_header((AUTHORIZATION, ""))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Authorization Failed");
    }

    #[actix_web::test]
    async fn test_non_utf8_header_is_invalid_format() {
        let f = fixture();
        let app = gated_app!(f.validator.clone());

        let req = test::TestRequest::get()
            .uri("/orders")
            .insert_header((AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token format");
    }

    struct UnavailableStore;

    #[async_trait]
    impl UserStore for UnavailableStore {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("down".to_string()))
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("down".to_string()))
        }

        async fn find_by_session(
            &self,
            _id: &str,
            _role: Role,
            _token: &str,
        ) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("down".to_string()))
        }

        async fn create(&self, _user: User) -> Result<User, AppError> {
            Err(AppError::DatabaseError("down".to_string()))
        }

        async fn store_token(&self, _id: &str, _token: &str) -> Result<bool, AppError> {
            Err(AppError::DatabaseError("down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_store_fault_is_unauthorized_with_fault_message() {
        let tokens = Arc::new(TokenService::new(JwtConfig::new("gate-secret", 30)));
        let validator = Arc::new(SessionValidator::new(tokens.clone(), Arc::new(UnavailableStore)));
        let token = tokens.issue_token("507f1f77bcf86cd799439011", Role::User).unwrap().token;
        let app = gated_app!(validator);

        let req = test::TestRequest::get()
            .uri("/orders")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["authorized"], false);
        assert_eq!(body["message"], "down");
    }

    #[actix_web::test]
    async fn test_gate_wraps_rate_limited_app() {
        let f = fixture();
        let (_, token) = login(&f, Role::User).await;
        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(10)
            .burst_size(20)
            .use_headers()
            .finish()
            .unwrap();

        // main과 같은 등록 순서: Governor가 안쪽, 게이트가 바깥쪽
        let app = test::init_service(
            App::new()
                .wrap(Governor::new(&governor_conf))
                .wrap(AuthGate::new(f.validator.clone(), GateConfig::default()))
                .route("/health", web::get().to(open))
                .route("/orders", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/health")
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-ratelimit-remaining"));

        let req = test::TestRequest::get()
            .uri("/orders")
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/orders")
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
