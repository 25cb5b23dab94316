//! The scheme catalog.
//!
//! `SchemeId` is the closed set of every supported standard, grouped by
//! source alphabet. Names resolve case-insensitively; anything else is
//! `Error::SchemeNotFound`.

use std::fmt;
use std::str::FromStr;

use librussian::RussianScheme;
use libukrainian::UkrainianScheme;
use translit_core::{Error, Result, Scheme};

/// Source alphabet of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ukrainian,
    Russian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Language::Ukrainian => "ukrainian",
            Language::Russian => "russian",
        })
    }
}

/// Identifier of one transliteration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeId {
    Ukrainian(UkrainianScheme),
    Russian(RussianScheme),
}

impl Default for SchemeId {
    /// The official Ukrainian national system.
    fn default() -> Self {
        SchemeId::Ukrainian(UkrainianScheme::Kmu)
    }
}

impl From<UkrainianScheme> for SchemeId {
    fn from(scheme: UkrainianScheme) -> Self {
        SchemeId::Ukrainian(scheme)
    }
}

impl From<RussianScheme> for SchemeId {
    fn from(scheme: RussianScheme) -> Self {
        SchemeId::Russian(scheme)
    }
}

impl SchemeId {
    pub fn name(self) -> &'static str {
        match self {
            SchemeId::Ukrainian(s) => s.name(),
            SchemeId::Russian(s) => s.name(),
        }
    }

    pub fn description(self) -> &'static str {
        self.scheme().description()
    }

    pub fn language(self) -> Language {
        match self {
            SchemeId::Ukrainian(_) => Language::Ukrainian,
            SchemeId::Russian(_) => Language::Russian,
        }
    }

    /// The built rule tables; constructed on first use.
    pub fn scheme(self) -> &'static Scheme {
        match self {
            SchemeId::Ukrainian(s) => s.scheme(),
            SchemeId::Russian(s) => s.scheme(),
        }
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SchemeId {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        lookup(name)
    }
}

/// Ukrainian schemes, official national system first.
pub const ALL_UKRAINIAN: [SchemeId; 13] = [
    SchemeId::Ukrainian(UkrainianScheme::Kmu),
    SchemeId::Ukrainian(UkrainianScheme::Simple),
    SchemeId::Ukrainian(UkrainianScheme::Wws),
    SchemeId::Ukrainian(UkrainianScheme::British),
    SchemeId::Ukrainian(UkrainianScheme::Bgn),
    SchemeId::Ukrainian(UkrainianScheme::Iso9),
    SchemeId::Ukrainian(UkrainianScheme::French),
    SchemeId::Ukrainian(UkrainianScheme::German),
    SchemeId::Ukrainian(UkrainianScheme::Gost1971),
    SchemeId::Ukrainian(UkrainianScheme::Gost1986),
    SchemeId::Ukrainian(UkrainianScheme::Passport2007),
    SchemeId::Ukrainian(UkrainianScheme::National1996),
    SchemeId::Ukrainian(UkrainianScheme::Passport2004Alt),
];

pub const ALL_RUSSIAN: [SchemeId; 10] = [
    SchemeId::Russian(RussianScheme::Simple),
    SchemeId::Russian(RussianScheme::Gost2006),
    SchemeId::Russian(RussianScheme::Icao),
    SchemeId::Russian(RussianScheme::Telegram),
    SchemeId::Russian(RussianScheme::InternationalPassport1997),
    SchemeId::Russian(RussianScheme::DriverLicense),
    SchemeId::Russian(RussianScheme::InternationalPassport1997Reduced),
    SchemeId::Russian(RussianScheme::Iso9SystemB),
    SchemeId::Russian(RussianScheme::Iso9SystemA),
    SchemeId::Russian(RussianScheme::IsoR9Table2),
];

/// Every scheme: Ukrainian first, then Russian.
pub fn all_schemes() -> impl Iterator<Item = SchemeId> {
    ALL_UKRAINIAN.into_iter().chain(ALL_RUSSIAN)
}

/// Resolve a scheme by name.
///
/// ```
/// use translitua::{lookup, Error};
///
/// assert_eq!(lookup("RussianICAO").unwrap().name(), "RussianICAO");
/// assert!(matches!(lookup("Esperanto"), Err(Error::SchemeNotFound(_))));
/// ```
pub fn lookup(name: &str) -> Result<SchemeId> {
    let ukrainian = name.parse::<UkrainianScheme>().map(SchemeId::from);
    let found = ukrainian.or_else(|_| name.parse::<RussianScheme>().map(SchemeId::from));
    if let Err(e) = &found {
        tracing::warn!(error = %e, "scheme lookup failed");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_partition_the_catalog() {
        assert_eq!(all_schemes().count(), 23);
        assert!(ALL_UKRAINIAN.iter().all(|s| s.language() == Language::Ukrainian));
        assert!(ALL_RUSSIAN.iter().all(|s| s.language() == Language::Russian));

        let mut names: Vec<_> = all_schemes().map(SchemeId::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 23);
    }

    #[test]
    fn test_groups_match_language_enums() {
        let uk: Vec<SchemeId> = UkrainianScheme::ALL.into_iter().map(SchemeId::from).collect();
        let ru: Vec<SchemeId> = RussianScheme::ALL.into_iter().map(SchemeId::from).collect();
        assert_eq!(uk, ALL_UKRAINIAN.to_vec());
        assert_eq!(ru, ALL_RUSSIAN.to_vec());
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        for id in all_schemes() {
            assert_eq!(lookup(id.name()), Ok(id));
            assert_eq!(id.to_string().parse::<SchemeId>(), Ok(id));
            assert_eq!(lookup(&id.name().to_uppercase()), Ok(id));
        }
    }

    #[test]
    fn test_alias_and_unknown() {
        assert_eq!(
            lookup("RussianInternationalPassport"),
            Ok(SchemeId::Russian(RussianScheme::InternationalPassport1997))
        );
        assert_eq!(lookup("  UkrainianBGN "), Ok(SchemeId::Ukrainian(UkrainianScheme::Bgn)));
        assert_eq!(lookup(""), Err(Error::SchemeNotFound(String::new())));
        assert_eq!(lookup("Belarusian"), Err(Error::SchemeNotFound("Belarusian".into())));
    }

    #[test]
    fn test_default_is_official_ukrainian() {
        let id = SchemeId::default();
        assert_eq!(id.name(), "UkrainianKMU");
        assert_eq!(id.language(), Language::Ukrainian);
        assert_eq!(id.language().to_string(), "ukrainian");
    }
}
