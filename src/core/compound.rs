//! 쌍자음, 겹받침, 복합 모음 테이블
//!
//! 두 개의 기본 자모로 이루어진 자모를 구성 요소로 나누거나,
//! 반대로 두 자모를 하나로 합치는 조회를 제공한다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::jamo::{Lead, Tail, Vowel};

/// (복합 자모, 첫 번째 구성 요소, 두 번째 구성 요소)
#[rustfmt::skip]
const COMPOUND_TABLE: [(&str, &str, &str); 23] = [
    // 쌍자음
    ("ㄲ", "ㄱ", "ㄱ"),
    ("ㄸ", "ㄷ", "ㄷ"),
    ("ㅃ", "ㅂ", "ㅂ"),
    ("ㅆ", "ㅅ", "ㅅ"),
    ("ㅉ", "ㅈ", "ㅈ"),
    // 겹받침
    ("ㄳ", "ㄱ", "ㅅ"),
    ("ㄵ", "ㄴ", "ㅈ"),
    ("ㄶ", "ㄴ", "ㅎ"),
    ("ㄺ", "ㄹ", "ㄱ"),
    ("ㄻ", "ㄹ", "ㅁ"),
    ("ㄼ", "ㄹ", "ㅂ"),
    ("ㄽ", "ㄹ", "ㅅ"),
    ("ㄾ", "ㄹ", "ㅌ"),
    ("ㄿ", "ㄹ", "ㅍ"),
    ("ㅀ", "ㄹ", "ㅎ"),
    ("ㅄ", "ㅂ", "ㅅ"),
    // 복합 모음
    ("ㅘ", "ㅗ", "ㅏ"),
    ("ㅙ", "ㅗ", "ㅐ"),
    ("ㅚ", "ㅗ", "ㅣ"),
    ("ㅝ", "ㅜ", "ㅓ"),
    ("ㅞ", "ㅜ", "ㅔ"),
    ("ㅟ", "ㅜ", "ㅣ"),
    ("ㅢ", "ㅡ", "ㅣ"),
];

lazy_static! {
    static ref COMPONENTS: HashMap<&'static str, (&'static str, &'static str)> = COMPOUND_TABLE
        .iter()
        .map(|&(compound, first, second)| (compound, (first, second)))
        .collect();
}

/// 복합 자모를 두 구성 요소로 분리
/// 기본 자모나 자모가 아닌 기호는 None
pub fn components(symbol: &str) -> Option<(&'static str, &'static str)> {
    COMPONENTS.get(symbol).copied()
}

/// 복합 자모의 첫 번째 구성 요소만 반환 (예: ㄺ -> ㄹ, ㅘ -> ㅗ)
pub fn first_component(symbol: &str) -> Option<&'static str> {
    components(symbol).map(|(first, _)| first)
}

/// 두 자모를 복합 자모로 조합 (예: ㄹ + ㄱ -> ㄺ)
pub fn combine(first: &str, second: &str) -> Option<&'static str> {
    COMPOUND_TABLE
        .iter()
        .find(|&&(_, a, b)| a == first && b == second)
        .map(|&(compound, _, _)| compound)
}

pub fn is_compound(symbol: &str) -> bool {
    COMPONENTS.contains_key(symbol)
}

/// 쌍자음(ㄲ ㄸ ㅃ ㅆ ㅉ)인지 확인
pub fn is_double_consonant(symbol: &str) -> bool {
    matches!(components(symbol), Some((first, second)) if first == second)
}

impl Lead {
    /// 쌍자음 초성 분리 (ㄲ -> ㄱ + ㄱ)
    pub fn components(self) -> Option<(Lead, Lead)> {
        let base = match self {
            Lead::SsangGiyeok => Lead::Giyeok,
            Lead::SsangDigeut => Lead::Digeut,
            Lead::SsangBieup => Lead::Bieup,
            Lead::SsangSiot => Lead::Siot,
            Lead::SsangJieut => Lead::Jieut,
            _ => return None,
        };
        Some((base, base))
    }
}

impl Vowel {
    /// 복합 모음 분리 (ㅘ -> ㅗ + ㅏ)
    pub fn components(self) -> Option<(Vowel, Vowel)> {
        match self {
            Vowel::Wa => Some((Vowel::O, Vowel::A)),
            Vowel::Wae => Some((Vowel::O, Vowel::Ae)),
            Vowel::Oe => Some((Vowel::O, Vowel::I)),
            Vowel::Wo => Some((Vowel::U, Vowel::Eo)),
            Vowel::We => Some((Vowel::U, Vowel::E)),
            Vowel::Wi => Some((Vowel::U, Vowel::I)),
            Vowel::Ui => Some((Vowel::Eu, Vowel::I)),
            _ => None,
        }
    }

    /// 두 중성을 복합 모음으로 조합
    pub fn combine(first: Vowel, second: Vowel) -> Option<Vowel> {
        match (first, second) {
            (Vowel::O, Vowel::A) => Some(Vowel::Wa),
            (Vowel::O, Vowel::Ae) => Some(Vowel::Wae),
            (Vowel::O, Vowel::I) => Some(Vowel::Oe),
            (Vowel::U, Vowel::Eo) => Some(Vowel::Wo),
            (Vowel::U, Vowel::E) => Some(Vowel::We),
            (Vowel::U, Vowel::I) => Some(Vowel::Wi),
            (Vowel::Eu, Vowel::I) => Some(Vowel::Ui),
            _ => None,
        }
    }
}

impl Tail {
    /// 쌍받침/겹받침 분리 (ㄺ -> ㄹ + ㄱ)
    pub fn components(self) -> Option<(Tail, Tail)> {
        match self {
            Tail::SsangGiyeok => Some((Tail::Giyeok, Tail::Giyeok)),
            Tail::GiyeokSiot => Some((Tail::Giyeok, Tail::Siot)),
            Tail::NieunJieut => Some((Tail::Nieun, Tail::Jieut)),
            Tail::NieunHieut => Some((Tail::Nieun, Tail::Hieut)),
            Tail::RieulGiyeok => Some((Tail::Rieul, Tail::Giyeok)),
            Tail::RieulMieum => Some((Tail::Rieul, Tail::Mieum)),
            Tail::RieulBieup => Some((Tail::Rieul, Tail::Bieup)),
            Tail::RieulSiot => Some((Tail::Rieul, Tail::Siot)),
            Tail::RieulTieut => Some((Tail::Rieul, Tail::Tieut)),
            Tail::RieulPieup => Some((Tail::Rieul, Tail::Pieup)),
            Tail::RieulHieut => Some((Tail::Rieul, Tail::Hieut)),
            Tail::BieupSiot => Some((Tail::Bieup, Tail::Siot)),
            Tail::SsangSiot => Some((Tail::Siot, Tail::Siot)),
            _ => None,
        }
    }

    /// 두 종성을 겹받침으로 조합
    pub fn combine(first: Tail, second: Tail) -> Option<Tail> {
        match (first, second) {
            (Tail::Giyeok, Tail::Giyeok) => Some(Tail::SsangGiyeok),
            (Tail::Giyeok, Tail::Siot) => Some(Tail::GiyeokSiot),
            (Tail::Nieun, Tail::Jieut) => Some(Tail::NieunJieut),
            (Tail::Nieun, Tail::Hieut) => Some(Tail::NieunHieut),
            (Tail::Rieul, Tail::Giyeok) => Some(Tail::RieulGiyeok),
            (Tail::Rieul, Tail::Mieum) => Some(Tail::RieulMieum),
            (Tail::Rieul, Tail::Bieup) => Some(Tail::RieulBieup),
            (Tail::Rieul, Tail::Siot) => Some(Tail::RieulSiot),
            (Tail::Rieul, Tail::Tieut) => Some(Tail::RieulTieut),
            (Tail::Rieul, Tail::Pieup) => Some(Tail::RieulPieup),
            (Tail::Rieul, Tail::Hieut) => Some(Tail::RieulHieut),
            (Tail::Bieup, Tail::Siot) => Some(Tail::BieupSiot),
            (Tail::Siot, Tail::Siot) => Some(Tail::SsangSiot),
            _ => None,
        }
    }
}
