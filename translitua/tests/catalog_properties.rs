// Properties that hold for every scheme in the catalog, plus the top-level
// entry points and configuration-driven conversion.
//
// File: translitua/translitua/tests/catalog_properties.rs

use std::thread;

use translitua::{
    all_schemes, is_uppercase, lookup, translit, transliterate, transliterate_bytes,
    transliterate_with_config, Error, Language, RussianScheme, SchemeId, TranslitConfig,
    UkrainianScheme,
};

const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";
const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

fn is_cyrillic(ch: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&ch)
}

#[test]
fn empty_input_gives_empty_output() {
    for id in all_schemes() {
        assert_eq!(transliterate("", id, true), "", "{id}");
        assert_eq!(transliterate("", id, false), "", "{id}");
    }
}

#[test]
fn non_cyrillic_text_passes_through() {
    let src = "abc 123, XYZ! -? (ok)";
    for id in all_schemes() {
        assert_eq!(transliterate(src, id, true), src, "{id}");
    }
}

#[test]
fn own_alphabet_leaves_no_cyrillic() {
    for id in all_schemes() {
        let alphabet = match id.language() {
            Language::Ukrainian => UKRAINIAN_ALPHABET,
            Language::Russian => RUSSIAN_ALPHABET,
        };
        for src in [alphabet.to_string(), alphabet.to_uppercase()] {
            let out = transliterate(&src, id, false);
            assert!(!out.chars().any(is_cyrillic), "{id}: {src} -> {out}");
        }
    }
}

#[test]
fn uppercase_input_stays_uppercase_when_preserving() {
    for id in all_schemes() {
        for src in ["ЩУКА", "ЖУК І ЯЩІРКА", "ЮЛЯ 7"] {
            assert!(is_uppercase(src));
            let out = transliterate(src, id, true);
            assert_eq!(out, out.to_uppercase(), "{id}: {src}");
        }
    }
}

#[test]
fn mixed_case_input_is_not_forced_to_uppercase() {
    assert_eq!(translit("Щука"), "Shchuka");
    assert_eq!(transliterate("ЩУКА", SchemeId::default(), false), "ShchUKA");
    assert_eq!(translit("ЩУКА"), "SHCHUKA");
}

#[test]
fn special_sequence_beats_single_characters() {
    for scheme in [
        UkrainianScheme::Kmu,
        UkrainianScheme::National1996,
        UkrainianScheme::Passport2004Alt,
    ] {
        let id = SchemeId::from(scheme);
        let table = id.scheme();
        let piecewise = format!(
            "{}{}",
            table.lookup('з').unwrap_or_default(),
            table.lookup('г').unwrap_or_default()
        );
        assert_ne!(piecewise, "zgh", "{id}");
        assert_eq!(transliterate("зг", id, true), "zgh", "{id}");
    }
}

#[test]
fn default_entry_point_matches_kmu() {
    let kmu = SchemeId::Ukrainian(UkrainianScheme::Kmu);
    for src in ["Дмитро Згуровский", "Знам'янка", "ЄВГЕН", "Львів"] {
        assert_eq!(translit(src), transliterate(src, kmu, true));
        assert_eq!(translit(src), libukrainian::translit(src));
    }
}

#[test]
fn bytes_entry_point() {
    let id = SchemeId::from(RussianScheme::Icao);
    assert_eq!(
        transliterate_bytes("Щёки".as_bytes(), id, true),
        Ok("Shcheki".to_string())
    );
    assert!(matches!(
        transliterate_bytes(&[0xd0, 0x28, 0xff], id, true),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn config_selects_scheme_and_case_mode() {
    let cfg = TranslitConfig::from_toml_str(
        r#"
scheme = "RussianInternationalPassport"
preserve_case = false
"#,
    )
    .unwrap();
    assert_eq!(transliterate_with_config("Юлия", &cfg).unwrap(), "Yuliya");
    assert_eq!(transliterate_with_config("ЮЛИЯ", &cfg).unwrap(), "YuLIYa");

    let default = TranslitConfig::default();
    assert_eq!(transliterate_with_config("ЗГУРОВСЬКИЙ", &default).unwrap(), "ZGHUROVSKYI");

    let unknown = TranslitConfig {
        scheme: "Klingon".into(),
        ..TranslitConfig::default()
    };
    assert_eq!(
        transliterate_with_config("Юлия", &unknown),
        Err(Error::SchemeNotFound("Klingon".into()))
    );
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(lookup("ukrainiankmu"), Ok(SchemeId::default()));
    assert_eq!(
        lookup("RUSSIANDRIVERLICENSE"),
        Ok(SchemeId::Russian(RussianScheme::DriverLicense))
    );
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let id = all_schemes().nth(i * 2).unwrap();
                (id, transliterate("Згуровський Щастя", id, true))
            })
        })
        .collect();
    for handle in handles {
        let (id, out) = handle.join().unwrap();
        assert_eq!(out, transliterate("Згуровський Щастя", id, true));
    }
}
