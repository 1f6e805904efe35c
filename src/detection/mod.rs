//! 자모 그룹 검증 모듈

pub mod validator;

pub use validator::{can_compose, find_non_korean_members};
