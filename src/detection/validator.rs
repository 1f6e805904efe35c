//! 자모 그룹 검증
//!
//! 조합 가능 여부와, 자리에 맞지 않는 요소의 위치를 판별한다.

use crate::core::composer::lookup;
use crate::core::jamo::{is_lead, is_tail, is_vowel};

/// `join`이 성공할 그룹인지 확인 (결과를 만들지 않음)
pub fn can_compose<S: AsRef<str>>(group: &[S]) -> bool {
    lookup(group).is_ok()
}

/// 자리에 맞는 한글 자모가 아닌 요소의 위치 목록
///
/// - 0번은 초성, 1번은 중성, 2번은 종성과 비교
/// - 3번 이후는 받을 자리가 없으므로 항상 포함
/// - 그룹이 2개보다 짧으면 비어 있는 필수 위치(0, 1)도 포함
///
/// 빈 목록이면 `can_compose`가 true인 그룹이다.
pub fn find_non_korean_members<S: AsRef<str>>(group: &[S]) -> Vec<usize> {
    let mut positions = Vec::new();
    for (pos, symbol) in group.iter().enumerate() {
        if !fits_position(pos, symbol.as_ref()) {
            positions.push(pos);
        }
    }

    // 필수 위치 누락
    positions.extend(group.len()..2);
    positions
}

fn fits_position(pos: usize, symbol: &str) -> bool {
    match pos {
        0 => is_lead(symbol),
        1 => is_vowel(symbol),
        2 => is_tail(symbol),
        _ => false,
    }
}
