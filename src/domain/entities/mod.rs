//! 영속 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 도메인 엔티티들입니다.

pub mod users;
