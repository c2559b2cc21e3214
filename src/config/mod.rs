//! # Configuration Module
//!
//! 쇼핑몰 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반 설정값을 시작 시점에 읽어 타입이 있는 구조체로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limit 설정
//! - [`auth_config`] - JWT 서명 키, 토큰 유효기간, 공개 경로 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="5003"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="shop_dev"
//! export JWT_EXPIRATION_DAYS="30"
//! export PUBLIC_PATHS="/auth/login,/auth/register,/health"
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
