//! 통합 테스트 - 분해/조합/검증 공개 API

use hangul_split::{
    can_compose, find_non_korean_members, join, join_groups, split, split_with_config, CharGroup,
    JoinError, SplitConfig,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tokens(groups: &[CharGroup]) -> Vec<Vec<String>> {
    groups.iter().map(|g| g.tokens().to_vec()).collect()
}

fn all_syllables() -> impl Iterator<Item = char> {
    '가'..='힣'
}

#[test]
fn test_empty_string() {
    init_logger();
    assert!(split("", false).is_empty());
}

#[test]
fn test_whitespace_segmentation() {
    init_logger();
    assert_eq!(tokens(&split(" ", false)), vec![vec![" "]]);
    assert_eq!(tokens(&split("   ", false)), vec![vec![" "], vec![" "], vec![" "]]);
}

#[test]
fn test_single_korean_syllable() {
    assert_eq!(tokens(&split("가", false)), vec![vec!["ㄱ", "ㅏ"]]);
}

#[test]
fn test_english_word() {
    assert_eq!(
        tokens(&split("karrot", false)),
        vec![vec!["k"], vec!["a"], vec!["r"], vec!["r"], vec!["o"], vec!["t"]]
    );
}

#[test]
fn test_mixed_script() {
    init_logger();
    assert_eq!(
        tokens(&split("karrot마켓", false)),
        vec![
            vec!["k"],
            vec!["a"],
            vec!["r"],
            vec!["r"],
            vec!["o"],
            vec!["t"],
            vec!["ㅁ", "ㅏ"],
            vec!["ㅋ", "ㅔ", "ㅅ"],
        ]
    );
}

#[test]
fn test_mixed_script_with_whitespace() {
    assert_eq!(
        tokens(&split(" karrot  마켓 ", false)),
        vec![
            vec![" "],
            vec!["k"],
            vec!["a"],
            vec!["r"],
            vec!["r"],
            vec!["o"],
            vec!["t"],
            vec![" "],
            vec![" "],
            vec!["ㅁ", "ㅏ"],
            vec!["ㅋ", "ㅔ", "ㅅ"],
            vec![" "],
        ]
    );
}

#[test]
fn test_join_length_rejection() {
    init_logger();
    let empty: [&str; 0] = [];
    assert_eq!(join(&empty), Err(JoinError::InvalidGroupLength(0)));
    assert_eq!(join(&[" "]), Err(JoinError::InvalidGroupLength(1)));
    assert_eq!(join(&[" ", " ", " "]), Err(JoinError::InvalidLead(" ".into())));
    assert_eq!(join(&["ㄱ"]), Err(JoinError::InvalidGroupLength(1)));
    assert_eq!(join(&["ㅁ", "ㅏ", "ㅇ", "ㅏ"]), Err(JoinError::InvalidGroupLength(4)));
    // 길이가 맞으면 초성부터 검사
    assert_eq!(join(&["e", "c", "o"]), Err(JoinError::InvalidLead("e".into())));

    assert_eq!(join(&["ㄱ", "ㅏ"]), Ok('가'));
    assert_eq!(join(&["ㄱ", "ㅏ", "ㅇ"]), Ok('강'));
}

#[test]
fn test_split_and_join_every_syllable() {
    init_logger();
    let mut count = 0;
    for c in all_syllables() {
        let groups = split(&c.to_string(), true);
        assert_eq!(groups.len(), 1);
        assert_eq!(join(&groups[0]), Ok(c), "{}", c);
        count += 1;
    }
    assert_eq!(count, 11172);
}

#[test]
fn test_every_syllable_is_composable() {
    for c in all_syllables() {
        let groups = split(&c.to_string(), true);
        assert!(can_compose(&groups[0]), "{}", c);
        assert!(find_non_korean_members(&groups[0]).is_empty(), "{}", c);
    }
}

#[test]
fn test_expansion_round_trip() {
    // 펼친 시퀀스를 다시 조합해도 원래 토큰과 같은 음절이 나와야 함
    let groups = split("읽값꽤닭", true);
    assert_eq!(join_groups(&groups), Ok("읽값꽤닭".to_string()));
    for group in &groups {
        assert!(group.expansion().unwrap().len() > group.len());
    }
}

#[test]
fn test_join_groups_rebuilds_text() {
    let text = " 당신의 근처 karrot마켓! ";
    assert_eq!(join_groups(&split(text, false)), Ok(text.to_string()));
}

#[test]
fn test_join_groups_normalizes_whitespace() {
    // 공백은 모두 " " 하나로 분해되므로 탭은 복원되지 않음
    assert_eq!(join_groups(&split("가\t나", false)), Ok("가 나".to_string()));
}

#[test]
fn test_validators_agree_on_split_output() {
    for group in split("한글 abc ㄱㅏ 123", false) {
        assert_eq!(
            can_compose(&group),
            find_non_korean_members(&group).is_empty(),
            "{:?}",
            group
        );
    }
}

#[test]
fn test_split_with_config() {
    let config = SplitConfig::from_json(r#"{"expand_compounds": true}"#).unwrap();
    let groups = split_with_config("뷁", &config);
    assert_eq!(groups[0].tokens(), ["ㅂ", "ㅞ", "ㄺ"]);
    assert_eq!(groups[0].expansion().unwrap(), ["ㅂ", "ㅜ", "ㅔ", "ㄹ", "ㄱ"]);
}
