//! 자모 그룹 -> 한글 음절 조합

use super::jamo::{Lead, Tail, Vowel};
use super::unicode::compose_syllable;

/// 자모 그룹 조합 실패 원인
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// 그룹 길이가 2 또는 3이 아님
    InvalidGroupLength(usize),
    /// 첫 번째 요소가 초성이 아님
    InvalidLead(String),
    /// 두 번째 요소가 중성이 아님
    InvalidVowel(String),
    /// 세 번째 요소가 종성이 아님
    InvalidTail(String),
}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinError::InvalidGroupLength(len) => {
                write!(f, "자모 그룹 길이 오류: {} (2 또는 3이어야 함)", len)
            }
            JoinError::InvalidLead(s) => write!(f, "초성이 아님: {:?}", s),
            JoinError::InvalidVowel(s) => write!(f, "중성이 아님: {:?}", s),
            JoinError::InvalidTail(s) => write!(f, "종성이 아님: {:?}", s),
        }
    }
}

impl std::error::Error for JoinError {}

/// 조회 실패 위치 (할당 없는 내부 표현)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    Length(usize),
    Lead,
    Vowel,
    Tail,
}

impl Rejection {
    fn into_error<S: AsRef<str>>(self, group: &[S]) -> JoinError {
        let symbol = |pos: usize| group[pos].as_ref().to_string();
        match self {
            Rejection::Length(len) => JoinError::InvalidGroupLength(len),
            Rejection::Lead => JoinError::InvalidLead(symbol(0)),
            Rejection::Vowel => JoinError::InvalidVowel(symbol(1)),
            Rejection::Tail => JoinError::InvalidTail(symbol(2)),
        }
    }
}

/// 그룹의 각 요소를 자모로 조회
///
/// 길이 -> 초성 -> 중성 -> 종성 순으로 검사한다.
pub(crate) fn lookup<S: AsRef<str>>(
    group: &[S],
) -> Result<(Lead, Vowel, Option<Tail>), Rejection> {
    if !(2..=3).contains(&group.len()) {
        return Err(Rejection::Length(group.len()));
    }
    let lead = Lead::from_symbol(group[0].as_ref()).ok_or(Rejection::Lead)?;
    let vowel = Vowel::from_symbol(group[1].as_ref()).ok_or(Rejection::Vowel)?;
    let tail = match group.get(2) {
        // 종성 없음은 2개짜리 그룹으로만 표현
        Some(symbol) => Some(Tail::from_symbol(symbol.as_ref()).ok_or(Rejection::Tail)?),
        None => None,
    };
    Ok((lead, vowel, tail))
}

/// 자모 그룹(초성, 중성[, 종성])을 한글 음절 하나로 조합
///
/// # Examples
/// ```
/// use hangul_split::join;
/// assert_eq!(join(&["ㄱ", "ㅏ"]), Ok('가'));
/// assert_eq!(join(&["ㄱ", "ㅏ", "ㅇ"]), Ok('강'));
/// assert!(join(&["e", "c", "o"]).is_err());
/// ```
pub fn join<S: AsRef<str>>(group: &[S]) -> Result<char, JoinError> {
    match lookup(group) {
        Ok((lead, vowel, tail)) => Ok(compose_syllable(lead, vowel, tail)),
        Err(rejection) => {
            let err = rejection.into_error(group);
            log::debug!("join 실패: {}", err);
            Err(err)
        }
    }
}

/// `join` 결과를 문자열로 반환
pub fn join_to_string<S: AsRef<str>>(group: &[S]) -> Result<String, JoinError> {
    join(group).map(String::from)
}

/// `split` 결과 전체를 원래 문자열로 복원
///
/// 요소가 하나인 그룹은 그대로 이어 붙이고, 나머지는 `join`으로 조합한다.
/// 조합할 수 없는 그룹이 있으면 첫 번째 오류를 반환한다.
pub fn join_groups<G: AsRef<[String]>>(groups: &[G]) -> Result<String, JoinError> {
    let mut result = String::with_capacity(groups.len() * 3);
    for group in groups {
        match group.as_ref() {
            [single] => result.push_str(single),
            tokens => result.push(join(tokens)?),
        }
    }
    Ok(result)
}
