//! 한글 자모 분해/조합 핵심 로직

pub mod composer;
pub mod compound;
pub mod jamo;
pub mod splitter;
pub mod unicode;
