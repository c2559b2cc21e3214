//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용합니다. 서비스와 미들웨어는
//! [`UserStore`](users::UserStore) 트레이트 객체(`Arc<dyn UserStore>`)로 주입받습니다.

pub mod users;
