//! Ukrainian romanization schemes.
//!
//! ## Supported Schemes
//!
//! 1. **KMU** - national system adopted in 2010, the default
//! 2. **Simple** - plain ASCII, `j` for й
//! 3. **WWS** - scholarly system with diacritics
//! 4. **British**, **BGN**, **ISO9**, **French**, **German** - foreign standards
//! 5. **GOST1971**, **GOST1986** - Soviet-era standards
//! 6. **Passport2007**, **National1996**, **Passport2004Alt** - earlier
//!    official and travel-document variants
//!
//! Each scheme is built on first use and cached for the life of the process.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use translit_core::{Error, Scheme, SchemeBuilder};

use crate::tables;

/// Ukrainian transliteration schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UkrainianScheme {
    /// National system (KMU resolution No. 55, 2010)
    #[default]
    Kmu,
    /// Simplified ASCII
    Simple,
    /// Scholarly system
    Wws,
    /// British standard
    British,
    /// BGN/PCGN
    Bgn,
    /// ISO 9:1995
    Iso9,
    /// French convention
    French,
    /// German convention
    German,
    /// GOST 1971
    Gost1971,
    /// GOST 1986
    Gost1986,
    /// Passport 2007
    Passport2007,
    /// National 1996
    National1996,
    /// Passport 2004, alternative variant
    Passport2004Alt,
}

impl UkrainianScheme {
    /// Every Ukrainian scheme, default first.
    pub const ALL: [UkrainianScheme; 13] = [
        UkrainianScheme::Kmu,
        UkrainianScheme::Simple,
        UkrainianScheme::Wws,
        UkrainianScheme::British,
        UkrainianScheme::Bgn,
        UkrainianScheme::Iso9,
        UkrainianScheme::French,
        UkrainianScheme::German,
        UkrainianScheme::Gost1971,
        UkrainianScheme::Gost1986,
        UkrainianScheme::Passport2007,
        UkrainianScheme::National1996,
        UkrainianScheme::Passport2004Alt,
    ];

    /// Stable identifier used by the registry, config files and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            UkrainianScheme::Kmu => "UkrainianKMU",
            UkrainianScheme::Simple => "UkrainianSimple",
            UkrainianScheme::Wws => "UkrainianWWS",
            UkrainianScheme::British => "UkrainianBritish",
            UkrainianScheme::Bgn => "UkrainianBGN",
            UkrainianScheme::Iso9 => "UkrainianISO9",
            UkrainianScheme::French => "UkrainianFrench",
            UkrainianScheme::German => "UkrainianGerman",
            UkrainianScheme::Gost1971 => "UkrainianGOST1971",
            UkrainianScheme::Gost1986 => "UkrainianGOST1986",
            UkrainianScheme::Passport2007 => "UkrainianPassport2007",
            UkrainianScheme::National1996 => "UkrainianNational1996",
            UkrainianScheme::Passport2004Alt => "UkrainianPassport2004Alt",
        }
    }

    pub fn description(self) -> &'static str {
        self.scheme().description()
    }

    /// The built rule tables for this scheme.
    pub fn scheme(self) -> &'static Scheme {
        match self {
            UkrainianScheme::Kmu => &KMU,
            UkrainianScheme::Simple => &SIMPLE,
            UkrainianScheme::Wws => &WWS,
            UkrainianScheme::British => &BRITISH,
            UkrainianScheme::Bgn => &BGN,
            UkrainianScheme::Iso9 => &ISO9,
            UkrainianScheme::French => &FRENCH,
            UkrainianScheme::German => &GERMAN,
            UkrainianScheme::Gost1971 => &GOST1971,
            UkrainianScheme::Gost1986 => &GOST1986,
            UkrainianScheme::Passport2007 => &PASSPORT2007,
            UkrainianScheme::National1996 => &NATIONAL1996,
            UkrainianScheme::Passport2004Alt => &PASSPORT2004_ALT,
        }
    }

    /// Transliterate `text` with this scheme.
    pub fn transliterate(self, text: &str, preserve_case: bool) -> String {
        self.scheme().transliterate(text, preserve_case)
    }
}

impl fmt::Display for UkrainianScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UkrainianScheme {
    type Err = Error;

    /// Case-insensitive lookup by [`UkrainianScheme::name`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        UkrainianScheme::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::SchemeNotFound(name.to_string()))
    }
}

// Tables are static data; a rejected table is a bug caught by the tests.
fn finish(builder: SchemeBuilder) -> Scheme {
    let scheme = builder
        .build()
        .unwrap_or_else(|e| panic!("built-in Ukrainian table rejected: {e}"));
    tracing::trace!(scheme = scheme.name(), "initialized ukrainian scheme");
    scheme
}

/// KMU, National 1996 and Passport 2004 share the "зг" rule and the
/// word-initial iotated vowels.
fn national_family(builder: SchemeBuilder) -> SchemeBuilder {
    builder
        .special_cases(tables::NATIONAL_SPECIAL_CASES.entries())
        .first_characters(tables::NATIONAL_FIRST_CHARACTERS.entries())
}

static KMU: Lazy<Scheme> = Lazy::new(|| {
    finish(national_family(
        Scheme::builder("UkrainianKMU")
            .description("National system, KMU resolution No. 55 (2010)")
            .main_table(tables::KMU_MAIN.entries())
            .delete_set(tables::KMU_DELETE),
    ))
});

static SIMPLE: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianSimple")
            .description("Simplified ASCII transliteration")
            .main_table(tables::SIMPLE_MAIN.entries()),
    )
});

static WWS: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianWWS")
            .description("Scholarly system")
            .main_table(tables::WWS_MAIN.entries()),
    )
});

static BRITISH: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianBritish")
            .description("British standard")
            .main_table(tables::BRITISH_MAIN.entries()),
    )
});

static BGN: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianBGN")
            .description("BGN/PCGN system")
            .main_table(tables::BGN_MAIN.entries()),
    )
});

static ISO9: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianISO9")
            .description("ISO 9:1995")
            .main_table(tables::ISO9_MAIN.entries()),
    )
});

static FRENCH: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianFrench")
            .description("French convention")
            .main_table(tables::FRENCH_MAIN.entries()),
    )
});

static GERMAN: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianGerman")
            .description("German convention")
            .main_table(tables::GERMAN_MAIN.entries()),
    )
});

static GOST1971: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianGOST1971")
            .description("GOST 16876-71 (1971)")
            .main_table(tables::GOST1971_MAIN.entries()),
    )
});

static GOST1986: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianGOST1986")
            .description("GOST 16876-71, 1986 revision")
            .main_table(tables::GOST1986_MAIN.entries()),
    )
});

static PASSPORT2007: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("UkrainianPassport2007")
            .description("Passport system (2007)")
            .main_table(tables::PASSPORT2007_MAIN.entries()),
    )
});

static NATIONAL1996: Lazy<Scheme> = Lazy::new(|| {
    finish(national_family(
        Scheme::builder("UkrainianNational1996")
            .description("National system (1996)")
            .main_table(tables::NATIONAL1996_MAIN.entries()),
    ))
});

static PASSPORT2004_ALT: Lazy<Scheme> = Lazy::new(|| {
    finish(national_family(
        Scheme::builder("UkrainianPassport2004Alt")
            .description("Passport system (2004), alternative variant")
            .main_table(tables::PASSPORT2004_ALT_MAIN.entries()),
    ))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scheme_builds() {
        for scheme in UkrainianScheme::ALL {
            let built = scheme.scheme();
            assert_eq!(built.name(), scheme.name());
            assert!(!built.description().is_empty());
            // Every letter of the alphabet, both cases.
            for ch in "абвгґдеєжзиіїйклмнопрстуфхцчшщюя".chars() {
                let upper = ch.to_uppercase().next().unwrap();
                assert!(built.lookup(ch).is_some(), "{scheme}: no entry for {ch}");
                assert!(built.lookup(upper).is_some(), "{scheme}: no entry for {upper}");
            }
        }
    }

    #[test]
    fn test_only_national_family_has_extra_rules() {
        for scheme in UkrainianScheme::ALL {
            let national = matches!(
                scheme,
                UkrainianScheme::Kmu | UkrainianScheme::National1996 | UkrainianScheme::Passport2004Alt
            );
            assert_eq!(scheme.scheme().special_cases().is_some(), national, "{scheme}");
            assert_eq!(scheme.scheme().first_characters().is_some(), national, "{scheme}");
        }
        assert!(UkrainianScheme::Kmu.scheme().delete_set().is_some());
        assert!(UkrainianScheme::National1996.scheme().delete_set().is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("UkrainianKMU".parse::<UkrainianScheme>(), Ok(UkrainianScheme::Kmu));
        assert_eq!("ukrainianwws".parse::<UkrainianScheme>(), Ok(UkrainianScheme::Wws));
        assert_eq!(
            "UkrainianLatin".parse::<UkrainianScheme>(),
            Err(Error::SchemeNotFound("UkrainianLatin".into()))
        );
    }

    #[test]
    fn test_default_is_kmu() {
        assert_eq!(UkrainianScheme::default(), UkrainianScheme::Kmu);
        assert_eq!(UkrainianScheme::default().to_string(), "UkrainianKMU");
    }
}
