//! 유니코드 한글 음절 조합/분해 공식

use super::jamo::{tail_ordinal, Lead, Tail, Vowel, TAIL_COUNT, VOWEL_COUNT};

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 하나가 차지하는 음절 수 (21 * 28)
const LEAD_BLOCK: u32 = (VOWEL_COUNT * TAIL_COUNT) as u32;
const TAIL_BLOCK: u32 = TAIL_COUNT as u32;

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성 + 중성 (+ 종성)으로 음절 조합
///
/// 음절 = 0xAC00 + 초성 * 588 + 중성 * 28 + 종성 (종성 없음 = 0)
pub fn compose_syllable(lead: Lead, vowel: Vowel, tail: Option<Tail>) -> char {
    let code = HANGUL_SYLLABLE_BASE
        + lead.index() * LEAD_BLOCK
        + vowel.index() * TAIL_BLOCK
        + tail_ordinal(tail);
    // 세 인덱스의 최댓값(18, 20, 27)을 넣어도 0xD7A3이므로 서로게이트 영역에 닿지 않음
    debug_assert!(code <= HANGUL_SYLLABLE_LAST);
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// 완성형 한글을 초성/중성/종성으로 분해 (한글 음절이 아니면 None)
pub fn decompose_syllable(c: char) -> Option<(Lead, Vowel, Option<Tail>)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let lead = Lead::from_index(offset / LEAD_BLOCK)?;
    let vowel = Vowel::from_index(offset % LEAD_BLOCK / TAIL_BLOCK)?;
    Some((lead, vowel, Tail::from_index(offset % TAIL_BLOCK)))
}
