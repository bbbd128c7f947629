//! # 문자열 유틸리티
//!
//! 요청 필드의 존재 여부와 이름/이메일 규칙을 판단하는 순수 함수들입니다.

use std::ops::RangeInclusive;

/// 이름에 허용되지 않는 한글 음절 블록 (가 ~ 힣)
pub const DISALLOWED_SCRIPT_RANGE: RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 요청 필드가 실제 값을 담고 있는지 확인
///
/// 필드가 없거나(`None`) 비어 있으면 누락으로 취급합니다.
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(is_valid_string)
}

/// 문자열에 한글 음절(U+AC00–U+D7A3)이 하나라도 있는지 확인
///
/// 자모(ㄱ, ㅏ 등)나 다른 CJK 문자는 이 범위에 속하지 않으므로 허용됩니다.
pub fn contains_disallowed_script(text: &str) -> bool {
    text.chars().any(|c| DISALLOWED_SCRIPT_RANGE.contains(&c))
}

/// 이메일로 받아들일 수 있는 형식인지 확인
///
/// `@` 문자가 한 번 이상 포함되어 있으면 통과합니다.
/// 전체 이메일 문법 검사가 아니므로 호출자는 더 엄격한 검증을 가정하면 안 됩니다.
pub fn is_acceptable_email_format(email: &str) -> bool {
    email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Kim"));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(&Some("Kim".to_string())));
        assert!(!is_present(&Some(String::new())));
        assert!(!is_present(&None));
    }

    #[test]
    fn test_hangul_syllables_are_disallowed() {
        assert!(contains_disallowed_script("홍길동"));
        assert!(contains_disallowed_script("Kim 민수"));
        assert!(contains_disallowed_script("가"));
        assert!(contains_disallowed_script("힣"));
    }

    #[test]
    fn test_other_text_is_allowed() {
        assert!(!contains_disallowed_script("Kim"));
        assert!(!contains_disallowed_script(""));
        // 자모와 한자는 음절 블록 밖
        assert!(!contains_disallowed_script("ㄱㄴㄷ"));
        assert!(!contains_disallowed_script("金"));
        assert!(!contains_disallowed_script("\u{ABFF}\u{D7A4}"));
    }

    #[test]
    fn test_email_format_only_requires_at_sign() {
        assert!(is_acceptable_email_format("a@b"));
        assert!(is_acceptable_email_format("a@b.com"));
        assert!(is_acceptable_email_format("@"));
        assert!(!is_acceptable_email_format("ab"));
        assert!(!is_acceptable_email_format(""));
    }
}
