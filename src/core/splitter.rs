//! 문자열 -> 글자별 자모 그룹 분해

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::compound::{components, first_component};
use super::unicode::decompose_syllable;
use crate::config::SplitConfig;

/// 공백 문자가 분해될 때 쓰이는 기호
pub const WHITESPACE_SYMBOL: &str = " ";

/// 입력 한 글자의 분해 결과
///
/// - 1개: 분해되지 않은 글자 (공백, 한글 음절이 아닌 문자)
/// - 2개: 초성 + 중성
/// - 3개: 초성 + 중성 + 종성
///
/// 직렬화하면 토큰 배열(`["ㅋ","ㅔ","ㅅ"]`)만 남는다.
/// 비교도 토큰만 보므로 `expansion`이 있든 없든 같은 글자의 그룹은 같다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CharGroup {
    tokens: Vec<String>,
    /// 복합 자모를 기본 자모로 펼친 결과 (expand_compounds일 때만)
    expansion: Option<Vec<String>>,
}

impl CharGroup {
    /// 분해하지 않은 단일 글자 그룹
    pub fn single(c: char) -> Self {
        Self {
            tokens: vec![c.to_string()],
            expansion: None,
        }
    }

    /// 공백 그룹
    pub fn whitespace() -> Self {
        Self {
            tokens: vec![WHITESPACE_SYMBOL.to_string()],
            expansion: None,
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// 초성+중성(+종성) 그룹인지
    pub fn is_syllable(&self) -> bool {
        self.tokens.len() >= 2
    }

    /// 복합 자모를 기본 자모로 펼친 시퀀스
    ///
    /// `split(.., true)`로 만든 그룹만 값을 가진다. 예: 읽 -> ㅇ ㅣ ㄹ ㄱ
    pub fn expansion(&self) -> Option<&[String]> {
        self.expansion.as_deref()
    }

    /// 복합 자모를 첫 번째 구성 요소로 치환한 그룹 (ㄲ -> ㄱ, ㄺ -> ㄹ, ㅘ -> ㅗ)
    ///
    /// 원래 글자와 다른 음절이 되므로 되돌릴 수 없다.
    pub fn simplified(&self) -> CharGroup {
        let tokens = self
            .tokens
            .iter()
            .map(|token| first_component(token).unwrap_or(token.as_str()).to_string())
            .collect();
        CharGroup {
            tokens,
            expansion: None,
        }
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    fn with_expansion(mut self) -> Self {
        let mut atoms = Vec::with_capacity(self.tokens.len() * 2);
        for token in &self.tokens {
            match components(token) {
                Some((first, second)) => {
                    atoms.push(first.to_string());
                    atoms.push(second.to_string());
                }
                None => atoms.push(token.clone()),
            }
        }
        self.expansion = Some(atoms);
        self
    }
}

impl PartialEq for CharGroup {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for CharGroup {}

impl Deref for CharGroup {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.tokens
    }
}

impl AsRef<[String]> for CharGroup {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

impl From<Vec<String>> for CharGroup {
    fn from(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            expansion: None,
        }
    }
}

impl From<CharGroup> for Vec<String> {
    fn from(group: CharGroup) -> Self {
        group.tokens
    }
}

/// 문자열을 글자별 자모 그룹으로 분해
///
/// - 공백 문자는 각각 `[" "]` 하나 (연속 공백도 합치지 않음)
/// - 한글 음절은 `[초성, 중성]` 또는 `[초성, 중성, 종성]`
/// - 그 외 문자는 그대로 `[c]`
///
/// `expand_compounds`가 true면 음절 그룹에 `expansion()`이 채워진다.
/// 토큰 자체는 바뀌지 않으므로 `join`으로 항상 원래 글자를 되돌릴 수 있다.
pub fn split(input: &str, expand_compounds: bool) -> Vec<CharGroup> {
    let groups: Vec<CharGroup> = input
        .chars()
        .map(|c| split_char(c, expand_compounds))
        .collect();
    log::trace!("split {:?} -> {} groups", input, groups.len());
    groups
}

/// 설정값을 적용하여 분해
pub fn split_with_config(input: &str, config: &SplitConfig) -> Vec<CharGroup> {
    split(input, config.expand_compounds)
}

/// 한 글자 분해
pub fn split_char(c: char, expand_compounds: bool) -> CharGroup {
    if c.is_whitespace() {
        return CharGroup::whitespace();
    }

    let Some((lead, vowel, tail)) = decompose_syllable(c) else {
        return CharGroup::single(c);
    };

    let mut tokens = Vec::with_capacity(3);
    tokens.push(lead.symbol().to_string());
    tokens.push(vowel.symbol().to_string());
    if let Some(tail) = tail {
        tokens.push(tail.symbol().to_string());
    }

    let group = CharGroup::from(tokens);
    if expand_compounds {
        group.with_expansion()
    } else {
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(groups: &[CharGroup]) -> Vec<Vec<String>> {
        groups.iter().map(|g| g.tokens().to_vec()).collect()
    }

    #[test]
    fn test_empty_string() {
        assert!(split("", false).is_empty());
        assert!(split("", true).is_empty());
    }

    #[test]
    fn test_whitespace_not_merged() {
        assert_eq!(tokens(&split(" ", false)), vec![vec![" "]]);
        assert_eq!(tokens(&split("   ", false)), vec![vec![" "], vec![" "], vec![" "]]);
        // 탭, 개행도 각각 공백 기호 하나
        assert_eq!(tokens(&split("\t\n", false)), vec![vec![" "], vec![" "]]);
        assert_eq!(tokens(&split("\u{3000}", false)), vec![vec![" "]]);
    }

    #[test]
    fn test_korean_word() {
        assert_eq!(
            tokens(&split("당근마켓", false)),
            vec![
                vec!["ㄷ", "ㅏ", "ㅇ"],
                vec!["ㄱ", "ㅡ", "ㄴ"],
                vec!["ㅁ", "ㅏ"],
                vec!["ㅋ", "ㅔ", "ㅅ"],
            ]
        );
    }

    #[test]
    fn test_korean_word_with_whitespace() {
        assert_eq!(
            tokens(&split(" 당신의 근처 ", false)),
            vec![
                vec![" "],
                vec!["ㄷ", "ㅏ", "ㅇ"],
                vec!["ㅅ", "ㅣ", "ㄴ"],
                vec!["ㅇ", "ㅢ"],
                vec![" "],
                vec!["ㄱ", "ㅡ", "ㄴ"],
                vec!["ㅊ", "ㅓ"],
                vec![" "],
            ]
        );
    }

    #[test]
    fn test_non_hangul_passthrough() {
        assert_eq!(
            tokens(&split("a1!ㄱ", false)),
            vec![vec!["a"], vec!["1"], vec!["!"], vec!["ㄱ"]]
        );
        // 낱자모는 음절이 아니므로 분해하지 않음
        assert!(!split("ㄱ", false)[0].is_syllable());
    }

    #[test]
    fn test_expansion() {
        let groups = split("읽꽤 a", true);
        assert_eq!(groups[0].tokens(), ["ㅇ", "ㅣ", "ㄺ"]);
        assert_eq!(groups[0].expansion().unwrap(), ["ㅇ", "ㅣ", "ㄹ", "ㄱ"]);
        assert_eq!(groups[1].tokens(), ["ㄲ", "ㅙ"]);
        assert_eq!(groups[1].expansion().unwrap(), ["ㄱ", "ㄱ", "ㅗ", "ㅐ"]);
        // 음절이 아닌 그룹은 펼치지 않음
        assert_eq!(groups[2].expansion(), None);
        assert_eq!(groups[3].expansion(), None);

        // 플래그가 꺼져 있으면 expansion 없음
        assert_eq!(split("읽", false)[0].expansion(), None);
    }

    #[test]
    fn test_expansion_keeps_tokens() {
        assert_eq!(tokens(&split("닭볶음", true)), tokens(&split("닭볶음", false)));
    }

    #[test]
    fn test_simplified() {
        let groups = split("꿿a", false);
        let group = &groups[0];
        assert_eq!(group.tokens(), ["ㄲ", "ㅞ", "ㅀ"]);
        assert_eq!(group.simplified().tokens(), ["ㄱ", "ㅜ", "ㄹ"]);

        let plain = &groups[1];
        assert_eq!(plain.simplified().tokens(), ["a"]);
    }

    #[test]
    fn test_serialize_as_array() {
        let groups = split("켓 ", true);
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"[["ㅋ","ㅔ","ㅅ"],[" "]]"#);

        let parsed: Vec<CharGroup> = serde_json::from_str(&json).unwrap();
        assert_eq!(tokens(&parsed), tokens(&groups));
    }

    #[test]
    fn test_equality_ignores_expansion() {
        assert_eq!(split("읽", true), split("읽", false));
        assert_ne!(split("읽", true), split("일", true));

        // JSON을 거치면 expansion은 사라지지만 같은 그룹으로 비교됨
        let groups = split("값 a", true);
        let json = serde_json::to_string(&groups).unwrap();
        let parsed: Vec<CharGroup> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].expansion(), None);
        assert_eq!(parsed, groups);
    }

    #[test]
    fn test_split_with_config() {
        let config = SplitConfig::default().with_expand_compounds(true);
        let groups = split_with_config("값", &config);
        assert_eq!(groups[0].expansion().unwrap(), ["ㄱ", "ㅏ", "ㅂ", "ㅅ"]);
    }
}
