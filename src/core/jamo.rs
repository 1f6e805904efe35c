//! 초성/중성/종성 자모 테이블
//!
//! 세 자모 집합은 유니코드 한글 음절 공식에서 쓰이는 순서를 그대로 따른다.
//! 이 순서는 가나다 순이 아니므로 임의로 바꾸면 안 된다.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 초성 개수
pub const LEAD_COUNT: usize = 19;
/// 중성 개수
pub const VOWEL_COUNT: usize = 21;
/// 종성 개수 (종성 없음 포함)
pub const TAIL_COUNT: usize = 28;

/// 초성 기호 (인덱스 순)
#[rustfmt::skip]
pub const LEAD_SYMBOLS: [&str; LEAD_COUNT] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ",
    "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ",
    "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// 중성 기호 (인덱스 순)
#[rustfmt::skip]
pub const VOWEL_SYMBOLS: [&str; VOWEL_COUNT] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ",
    "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅘ",
    "ㅙ", "ㅚ", "ㅛ", "ㅜ", "ㅝ",
    "ㅞ", "ㅟ", "ㅠ", "ㅡ", "ㅢ",
    "ㅣ",
];

/// 종성 기호 (인덱스 순, 0번은 종성 없음)
#[rustfmt::skip]
pub const TAIL_SYMBOLS: [&str; TAIL_COUNT] = [
    "",   "ㄱ", "ㄲ", "ㄳ", "ㄴ",
    "ㄵ", "ㄶ", "ㄷ", "ㄹ", "ㄺ",
    "ㄻ", "ㄼ", "ㄽ", "ㄾ", "ㄿ",
    "ㅀ", "ㅁ", "ㅂ", "ㅄ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ",
    "ㅌ", "ㅍ", "ㅎ",
];

/// 초성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Lead {
    Giyeok = 0,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

/// 중성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Vowel {
    A = 0,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

/// 종성
///
/// 종성 없음(인덱스 0)은 variant로 두지 않고 `Option<Tail>::None`으로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tail {
    Giyeok = 1,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

impl Lead {
    /// 인덱스 순 전체 초성
    #[rustfmt::skip]
    pub const ALL: [Lead; LEAD_COUNT] = [
        Lead::Giyeok, Lead::SsangGiyeok, Lead::Nieun, Lead::Digeut, Lead::SsangDigeut,
        Lead::Rieul, Lead::Mieum, Lead::Bieup, Lead::SsangBieup, Lead::Siot,
        Lead::SsangSiot, Lead::Ieung, Lead::Jieut, Lead::SsangJieut, Lead::Chieut,
        Lead::Kieuk, Lead::Tieut, Lead::Pieup, Lead::Hieut,
    ];

    /// 초성 인덱스 (0~18)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Lead> {
        Self::ALL.get(index as usize).copied()
    }

    /// 호환용 자모 기호 (예: "ㄱ")
    pub fn symbol(self) -> &'static str {
        LEAD_SYMBOLS[self as usize]
    }

    /// 호환용 자모 문자 (U+3131 영역)
    pub fn as_char(self) -> char {
        LEAD_JAMO[self as usize]
    }

    pub fn from_symbol(symbol: &str) -> Option<Lead> {
        LEAD_BY_SYMBOL.get(symbol).copied()
    }

    pub fn from_char(c: char) -> Option<Lead> {
        let mut buf = [0u8; 4];
        Self::from_symbol(c.encode_utf8(&mut buf))
    }
}

impl Vowel {
    /// 인덱스 순 전체 중성
    #[rustfmt::skip]
    pub const ALL: [Vowel; VOWEL_COUNT] = [
        Vowel::A, Vowel::Ae, Vowel::Ya, Vowel::Yae, Vowel::Eo,
        Vowel::E, Vowel::Yeo, Vowel::Ye, Vowel::O, Vowel::Wa,
        Vowel::Wae, Vowel::Oe, Vowel::Yo, Vowel::U, Vowel::Wo,
        Vowel::We, Vowel::Wi, Vowel::Yu, Vowel::Eu, Vowel::Ui,
        Vowel::I,
    ];

    /// 중성 인덱스 (0~20)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Vowel> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn symbol(self) -> &'static str {
        VOWEL_SYMBOLS[self as usize]
    }

    pub fn as_char(self) -> char {
        VOWEL_JAMO[self as usize]
    }

    pub fn from_symbol(symbol: &str) -> Option<Vowel> {
        VOWEL_BY_SYMBOL.get(symbol).copied()
    }

    pub fn from_char(c: char) -> Option<Vowel> {
        let mut buf = [0u8; 4];
        Self::from_symbol(c.encode_utf8(&mut buf))
    }
}

impl Tail {
    /// 인덱스 순 전체 종성 (종성 없음 제외)
    #[rustfmt::skip]
    pub const ALL: [Tail; TAIL_COUNT - 1] = [
        Tail::Giyeok, Tail::SsangGiyeok, Tail::GiyeokSiot, Tail::Nieun,
        Tail::NieunJieut, Tail::NieunHieut, Tail::Digeut, Tail::Rieul, Tail::RieulGiyeok,
        Tail::RieulMieum, Tail::RieulBieup, Tail::RieulSiot, Tail::RieulTieut, Tail::RieulPieup,
        Tail::RieulHieut, Tail::Mieum, Tail::Bieup, Tail::BieupSiot, Tail::Siot,
        Tail::SsangSiot, Tail::Ieung, Tail::Jieut, Tail::Chieut, Tail::Kieuk,
        Tail::Tieut, Tail::Pieup, Tail::Hieut,
    ];

    /// 종성 인덱스 (1~27)
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 0은 종성 없음이므로 None
    pub fn from_index(index: u32) -> Option<Tail> {
        if index == 0 {
            return None;
        }
        Self::ALL.get(index as usize - 1).copied()
    }

    pub fn symbol(self) -> &'static str {
        TAIL_SYMBOLS[self as usize]
    }

    pub fn as_char(self) -> char {
        TAIL_JAMO[self as usize - 1]
    }

    pub fn from_symbol(symbol: &str) -> Option<Tail> {
        TAIL_BY_SYMBOL.get(symbol).copied()
    }

    pub fn from_char(c: char) -> Option<Tail> {
        let mut buf = [0u8; 4];
        Self::from_symbol(c.encode_utf8(&mut buf))
    }
}

/// 종성 인덱스 (`None` = 종성 없음 = 0)
pub fn tail_ordinal(tail: Option<Tail>) -> u32 {
    tail.map_or(0, Tail::index)
}

// 호환용 자모 문자: 초성 순서와 코드 순서가 다르므로 직접 나열
#[rustfmt::skip]
const LEAD_JAMO: [char; LEAD_COUNT] = [
    '\u{3131}', '\u{3132}', '\u{3134}', '\u{3137}', '\u{3138}',
    '\u{3139}', '\u{3141}', '\u{3142}', '\u{3143}', '\u{3145}',
    '\u{3146}', '\u{3147}', '\u{3148}', '\u{3149}', '\u{314A}',
    '\u{314B}', '\u{314C}', '\u{314D}', '\u{314E}',
];

// 중성은 U+314F ~ U+3163 연속
#[rustfmt::skip]
const VOWEL_JAMO: [char; VOWEL_COUNT] = [
    '\u{314F}', '\u{3150}', '\u{3151}', '\u{3152}', '\u{3153}',
    '\u{3154}', '\u{3155}', '\u{3156}', '\u{3157}', '\u{3158}',
    '\u{3159}', '\u{315A}', '\u{315B}', '\u{315C}', '\u{315D}',
    '\u{315E}', '\u{315F}', '\u{3160}', '\u{3161}', '\u{3162}',
    '\u{3163}',
];

#[rustfmt::skip]
const TAIL_JAMO: [char; TAIL_COUNT - 1] = [
    '\u{3131}', '\u{3132}', '\u{3133}', '\u{3134}',
    '\u{3135}', '\u{3136}', '\u{3137}', '\u{3139}', '\u{313A}',
    '\u{313B}', '\u{313C}', '\u{313D}', '\u{313E}', '\u{313F}',
    '\u{3140}', '\u{3141}', '\u{3142}', '\u{3144}', '\u{3145}',
    '\u{3146}', '\u{3147}', '\u{3148}', '\u{314A}', '\u{314B}',
    '\u{314C}', '\u{314D}', '\u{314E}',
];

lazy_static! {
    static ref LEAD_BY_SYMBOL: HashMap<&'static str, Lead> =
        Lead::ALL.iter().map(|&lead| (lead.symbol(), lead)).collect();
    static ref VOWEL_BY_SYMBOL: HashMap<&'static str, Vowel> =
        Vowel::ALL.iter().map(|&vowel| (vowel.symbol(), vowel)).collect();
    static ref TAIL_BY_SYMBOL: HashMap<&'static str, Tail> =
        Tail::ALL.iter().map(|&tail| (tail.symbol(), tail)).collect();
}

/// 초성 기호 -> 인덱스
pub fn lead_index(symbol: &str) -> Option<u32> {
    Lead::from_symbol(symbol).map(Lead::index)
}

/// 중성 기호 -> 인덱스
pub fn vowel_index(symbol: &str) -> Option<u32> {
    Vowel::from_symbol(symbol).map(Vowel::index)
}

/// 종성 기호 -> 인덱스
///
/// 빈 문자열은 종성 없음(0)으로 조회된다. 단, `is_tail("")`은 false.
pub fn tail_index(symbol: &str) -> Option<u32> {
    if symbol.is_empty() {
        return Some(0);
    }
    Tail::from_symbol(symbol).map(Tail::index)
}

pub fn is_lead(symbol: &str) -> bool {
    LEAD_BY_SYMBOL.contains_key(symbol)
}

pub fn is_vowel(symbol: &str) -> bool {
    VOWEL_BY_SYMBOL.contains_key(symbol)
}

/// 실제 종성인지 확인 (종성 없음 자리표시는 포함하지 않음)
pub fn is_tail(symbol: &str) -> bool {
    TAIL_BY_SYMBOL.contains_key(symbol)
}
