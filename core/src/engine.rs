//! The rewrite engine.
//!
//! Applies one scheme to one string as a fixed sequence of passes, each
//! operating on the output of the previous one:
//!
//! 1. remember whether the whole input is uppercase
//! 2. drop characters in the delete set
//! 3. rewrite multi-character special cases
//! 4. rewrite word-initial characters
//! 5. map every remaining character through the main table
//! 6. uppercase the result if requested and the input was uppercase
//!
//! Earlier passes take priority: a sequence consumed by a special case is no
//! longer Cyrillic when the word-initial and main passes look at it.

use crate::error::{Error, Result};
use crate::scheme::Scheme;

/// Transliterate `input` according to `scheme`.
///
/// With `preserve_case` set, an input that is entirely uppercase (see
/// [`is_uppercase`]) produces an entirely uppercase result, so `"ЗГУРОВСЬКИЙ"`
/// becomes `"ZGHUROVSKYI"` rather than `"ZGhUROVSKYI"`. Characters the scheme
/// does not know are copied through unchanged.
///
/// # Examples
/// ```
/// use translit_core::{transliterate, Scheme};
///
/// let scheme = Scheme::builder("Demo")
///     .main_table([('д', "d"), ('я', "ia")])
///     .first_characters([('я', "ya")])
///     .build()
///     .unwrap();
///
/// assert_eq!(transliterate("Ядя 1", &scheme, true), "Yadia 1");
/// assert_eq!(transliterate("ЯДЯ", &scheme, true), "YADIA");
/// assert_eq!(transliterate("ЯДЯ", &scheme, false), "YaDIa");
/// ```
pub fn transliterate(input: &str, scheme: &Scheme, preserve_case: bool) -> String {
    tracing::trace!(scheme = scheme.name(), len = input.len(), "transliterate");

    let src_is_upper = is_uppercase(input);
    let mut text = input.to_string();

    if let Some(delete) = scheme.delete_set() {
        text.retain(|ch| !delete.contains(&ch));
    }

    if let Some(rules) = scheme.special_cases() {
        if let Some(rewritten) = rules.apply(&text) {
            text = rewritten;
        }
    }

    if let Some(rules) = scheme.first_characters() {
        if let Some(rewritten) = rules.apply(&text) {
            text = rewritten;
        }
    }

    let mut result = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match scheme.lookup(ch) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(ch),
        }
    }

    if preserve_case && src_is_upper {
        result.to_uppercase()
    } else {
        result
    }
}

/// Byte-oriented entry point: fails with [`Error::InvalidInput`] when `input`
/// is not valid UTF-8, otherwise behaves like [`transliterate`].
pub fn transliterate_bytes(input: &[u8], scheme: &Scheme, preserve_case: bool) -> Result<String> {
    let text = std::str::from_utf8(input)
        .map_err(|e| Error::InvalidInput(format!("input is not valid UTF-8: {e}")))?;
    Ok(transliterate(text, scheme, preserve_case))
}

/// True when `s` has at least one cased character and no lowercase ones.
///
/// Strings without any cased character (empty, digits, punctuation) are not
/// uppercase, so `preserve_case` never changes their output.
pub fn is_uppercase(s: &str) -> bool {
    let mut cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Scheme {
        Scheme::builder("Demo")
            .main_table([
                ('з', "z"),
                ('г', "h"),
                ('є', "ie"),
                ('у', "u"),
                ('в', "v"),
                ('ь', ""),
            ])
            .delete_set(['ь', '\''])
            .special_cases([("зг", "zgh"), ("ЗГ", "ZGh")])
            .first_characters([('є', "ye")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_is_uppercase_needs_a_cased_char() {
        assert!(is_uppercase("ЗГУ"));
        assert!(is_uppercase("ЗГУ 12!"));
        assert!(!is_uppercase("Згу"));
        assert!(!is_uppercase(""));
        assert!(!is_uppercase("123 ,.!"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transliterate("", &demo(), true), "");
        assert_eq!(transliterate("", &demo(), false), "");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        let scheme = demo();
        assert_eq!(transliterate("42, 7!?", &scheme, true), "42, 7!?");
        assert_eq!(transliterate("abc XYZ", &scheme, true), "abc XYZ");
        assert_eq!(transliterate("ABC", &scheme, true), "ABC");
    }

    #[test]
    fn test_special_case_beats_main_table() {
        let scheme = demo();
        assert_eq!(transliterate("зг", &scheme, true), "zgh");
        assert_eq!(transliterate("вузг", &scheme, true), "vuzgh");
        assert_eq!(transliterate("Зг", &scheme, true), "Zgh");
    }

    #[test]
    fn test_word_initial_only_at_word_start() {
        let scheme = demo();
        assert_eq!(transliterate("є", &scheme, true), "ye");
        assert_eq!(transliterate("вє", &scheme, true), "vie");
        assert_eq!(transliterate("в є", &scheme, true), "v ye");
        assert_eq!(transliterate("в.Є", &scheme, true), "v.Ye");
        assert_eq!(transliterate("в/є", &scheme, true), "v/ye");
    }

    #[test]
    fn test_deletion_runs_before_word_boundaries() {
        let scheme = demo();
        // Without deletion the apostrophe would open a new word before "є".
        assert_eq!(transliterate("в'є", &scheme, true), "vie");
        assert_eq!(transliterate("вьє", &scheme, true), "vie");
        // Deleting the soft sign can complete a special-case sequence.
        assert_eq!(transliterate("зьг", &scheme, true), "zgh");
    }

    #[test]
    fn test_preserve_case_uppercases_whole_result() {
        let scheme = demo();
        assert_eq!(transliterate("ЗГУ", &scheme, false), "ZGhU");
        assert_eq!(transliterate("ЗГУ", &scheme, true), "ZGHU");
        assert_eq!(transliterate("Єву", &scheme, true), "Yevu");
    }

    #[test]
    fn test_scheme_method_matches_free_function() {
        let scheme = demo();
        assert_eq!(scheme.transliterate("Єв зг", true), transliterate("Єв зг", &scheme, true));
    }

    #[test]
    fn test_bytes_reject_invalid_utf8() {
        let scheme = demo();
        assert_eq!(transliterate_bytes("зг".as_bytes(), &scheme, true).unwrap(), "zgh");
        let err = transliterate_bytes(&[0x7a, 0xff, 0xfe], &scheme, true).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
