use crate::{is_special, translate_like_to_regex, RegexLikeMatcher};

#[test]
fn test_is_special_exact_set() {
    let specials: &[u8] = br"\.+*?()|[]{}^$";
    for b in 0u8..=255 {
        assert_eq!(is_special(b), specials.contains(&b), "byte {:#04x}", b);
    }
}

#[test]
fn test_percent_translates_to_any_byte_star() {
    assert_eq!(translate_like_to_regex("abc%").unwrap(), r"abc[\s\S]*");
}

#[test]
fn test_underscore_translates_to_any_byte() {
    assert_eq!(translate_like_to_regex("a_c").unwrap(), r"a[\s\S]c");
}

#[test]
fn test_escaped_wildcards_decode_to_literals() {
    assert_eq!(translate_like_to_regex("a\\%b\\_c").unwrap(), "a%b_c");
}

#[test]
fn test_multiple_wildcards() {
    assert_eq!(translate_like_to_regex("%a_b%").unwrap(), r"[\s\S]*a[\s\S]b[\s\S]*");
}

#[test]
fn test_regex_metacharacters_are_escaped() {
    assert_eq!(translate_like_to_regex("abc*def.ghi+").unwrap(), r"abc\*def\.ghi\+");
}

#[test]
fn test_mixed_escapes_and_metacharacters() {
    // `\+` keeps the escape (+ is regex-special), `\d` drops it (d is not),
    // `[` gains one, `\\` decodes to a backslash which is itself re-escaped
    assert_eq!(
        translate_like_to_regex(r"abc\+\def%ghi_[\\").unwrap(),
        r"abc\+def[\s\S]*ghi[\s\S]\[\\"
    );
}

#[test]
fn test_plain_pattern_passes_through() {
    assert_eq!(translate_like_to_regex("abc").unwrap(), "abc");
    assert_eq!(translate_like_to_regex("xyz").unwrap(), "xyz");
}

#[test]
fn test_regex_backend_uses_full_match() {
    let m = RegexLikeMatcher::new("abc").unwrap();
    assert!(m.matches_bytes(b"abc"));
    assert!(!m.matches_bytes(b"abcd"));
    assert!(!m.matches_bytes(b"xabc"));
}

#[test]
fn test_regex_backend_wildcards_cross_newlines() {
    let m = RegexLikeMatcher::new("Hello%").unwrap();
    assert!(m.matches_bytes(b"Hello\nworld"));
    assert!(m.matches_bytes(b"Hello"));
    assert!(!m.matches_bytes(b"Hi there"));

    let m = RegexLikeMatcher::new("a_b").unwrap();
    assert!(m.matches_bytes(b"a\nb"));
}

#[test]
fn test_regex_backend_underscore_is_byte_granular() {
    // One `_` covers one byte, so a two-byte encoded codepoint needs two
    let m = RegexLikeMatcher::new("a_c").unwrap();
    assert!(!m.matches_bytes("a\u{e9}c".as_bytes()));
    let m = RegexLikeMatcher::new("a__c").unwrap();
    assert!(m.matches_bytes("a\u{e9}c".as_bytes()));
}

#[test]
fn test_non_ascii_literals_become_byte_escapes() {
    assert_eq!(translate_like_to_regex("\u{e9}%").unwrap(), r"\xC3\xA9[\s\S]*");
    let m = RegexLikeMatcher::new("\u{e9}tude%").unwrap();
    assert!(m.matches_bytes("\u{e9}tude".as_bytes()));
    assert!(!m.matches_bytes(b"etude"));
}

#[test]
fn test_translated_metacharacters_match_literally() {
    let m = RegexLikeMatcher::new("(test)%").unwrap();
    assert!(m.matches_bytes(b"(test)"));
    assert!(m.matches_bytes(b"(test)abc"));
    assert!(!m.matches_bytes(b"test"));

    let m = RegexLikeMatcher::new("[test]%").unwrap();
    assert!(m.matches_bytes(b"[test]"));
    assert!(!m.matches_bytes(b"t"));
}
