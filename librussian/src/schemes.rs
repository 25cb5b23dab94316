//! Russian romanization schemes.
//!
//! ## Supported Schemes
//!
//! - **Simple** - plain ASCII, `j` for й
//! - **GOST2006** - passports 2010-2013
//! - **ICAO** - Doc 9303, passports since 2013
//! - **Telegram** - telegraph convention
//! - **InternationalPassport1997** and its **Reduced** variant (ый/ий → y)
//! - **DriverLicense** - context rules for е, ё and и
//! - **ISO9SystemA** / **ISO9SystemB** - GOST 7.79-2000
//! - **ISOR9Table2** - ISO/R 9 (1968) and its Soviet counterparts

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use translit_core::{Error, Scheme, SchemeBuilder};

use crate::tables;

/// Older name of [`RussianScheme::InternationalPassport1997`], still accepted
/// by [`FromStr`].
pub const INTERNATIONAL_PASSPORT_ALIAS: &str = "RussianInternationalPassport";

/// Russian transliteration schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RussianScheme {
    Simple,
    Gost2006,
    Icao,
    Telegram,
    InternationalPassport1997,
    DriverLicense,
    InternationalPassport1997Reduced,
    Iso9SystemB,
    Iso9SystemA,
    IsoR9Table2,
}

impl RussianScheme {
    pub const ALL: [RussianScheme; 10] = [
        RussianScheme::Simple,
        RussianScheme::Gost2006,
        RussianScheme::Icao,
        RussianScheme::Telegram,
        RussianScheme::InternationalPassport1997,
        RussianScheme::DriverLicense,
        RussianScheme::InternationalPassport1997Reduced,
        RussianScheme::Iso9SystemB,
        RussianScheme::Iso9SystemA,
        RussianScheme::IsoR9Table2,
    ];

    /// Stable identifier used by the registry, config files and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            RussianScheme::Simple => "RussianSimple",
            RussianScheme::Gost2006 => "RussianGOST2006",
            RussianScheme::Icao => "RussianICAO",
            RussianScheme::Telegram => "RussianTelegram",
            RussianScheme::InternationalPassport1997 => "RussianInternationalPassport1997",
            RussianScheme::DriverLicense => "RussianDriverLicense",
            RussianScheme::InternationalPassport1997Reduced => {
                "RussianInternationalPassport1997Reduced"
            }
            RussianScheme::Iso9SystemB => "RussianISO9SystemB",
            RussianScheme::Iso9SystemA => "RussianISO9SystemA",
            RussianScheme::IsoR9Table2 => "RussianISOR9Table2",
        }
    }

    pub fn description(self) -> &'static str {
        self.scheme().description()
    }

    pub fn scheme(self) -> &'static Scheme {
        match self {
            RussianScheme::Simple => &SIMPLE,
            RussianScheme::Gost2006 => &GOST2006,
            RussianScheme::Icao => &ICAO,
            RussianScheme::Telegram => &TELEGRAM,
            RussianScheme::InternationalPassport1997 => &PASSPORT1997,
            RussianScheme::DriverLicense => &DRIVER_LICENSE,
            RussianScheme::InternationalPassport1997Reduced => &PASSPORT1997_REDUCED,
            RussianScheme::Iso9SystemB => &ISO9_B,
            RussianScheme::Iso9SystemA => &ISO9_A,
            RussianScheme::IsoR9Table2 => &ISOR9_TABLE2,
        }
    }

    pub fn transliterate(self, text: &str, preserve_case: bool) -> String {
        self.scheme().transliterate(text, preserve_case)
    }
}

impl fmt::Display for RussianScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RussianScheme {
    type Err = Error;

    /// Case-insensitive lookup by name; also accepts [`INTERNATIONAL_PASSPORT_ALIAS`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(INTERNATIONAL_PASSPORT_ALIAS) {
            return Ok(RussianScheme::InternationalPassport1997);
        }
        RussianScheme::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::SchemeNotFound(name.to_string()))
    }
}

fn finish(builder: SchemeBuilder) -> Scheme {
    let scheme = builder
        .build()
        .unwrap_or_else(|e| panic!("built-in Russian table rejected: {e}"));
    tracing::trace!(scheme = scheme.name(), "initialized russian scheme");
    scheme
}

fn main_only(
    name: &'static str,
    description: &'static str,
    table: &'static phf::Map<char, &'static str>,
) -> Scheme {
    finish(
        Scheme::builder(name)
            .description(description)
            .main_table(table.entries()),
    )
}

static SIMPLE: Lazy<Scheme> = Lazy::new(|| {
    main_only("RussianSimple", "Simplified ASCII transliteration", &tables::SIMPLE_MAIN)
});

static GOST2006: Lazy<Scheme> = Lazy::new(|| {
    main_only(
        "RussianGOST2006",
        "GOST 52535.1-2006 (international passports 2010-2013)",
        &tables::GOST2006_MAIN,
    )
});

static ICAO: Lazy<Scheme> = Lazy::new(|| {
    main_only(
        "RussianICAO",
        "ICAO Doc 9303 (international passports since 2013)",
        &tables::ICAO_MAIN,
    )
});

static TELEGRAM: Lazy<Scheme> = Lazy::new(|| {
    main_only("RussianTelegram", "Telegraph convention", &tables::TELEGRAM_MAIN)
});

static PASSPORT1997: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("RussianInternationalPassport1997")
            .description("International passports (1997)")
            .main_table(tables::PASSPORT1997_MAIN.entries())
            .special_cases(tables::PASSPORT1997_SPECIAL_CASES.entries()),
    )
});

static PASSPORT1997_REDUCED: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("RussianInternationalPassport1997Reduced")
            .description("International passports (1997), reduced ый/ий endings")
            .main_table(tables::PASSPORT1997_MAIN.entries())
            .special_cases(tables::PASSPORT1997_REDUCED_SPECIAL_CASES.entries()),
    )
});

static DRIVER_LICENSE: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("RussianDriverLicense")
            .description("Driver licenses")
            .main_table(tables::DRIVER_LICENSE_MAIN.entries())
            .special_cases(tables::DRIVER_LICENSE_SPECIAL_CASES.entries())
            .first_characters(tables::DRIVER_LICENSE_FIRST_CHARACTERS.entries()),
    )
});

static ISO9_B: Lazy<Scheme> = Lazy::new(|| {
    finish(
        Scheme::builder("RussianISO9SystemB")
            .description("ISO 9:1995 / GOST 7.79-2000, system B")
            .main_table(tables::ISO9_B_MAIN.entries())
            .special_cases(tables::ISO9_B_SPECIAL_CASES.entries()),
    )
});

static ISO9_A: Lazy<Scheme> = Lazy::new(|| {
    main_only(
        "RussianISO9SystemA",
        "ISO 9:1995 / GOST 7.79-2000, system A",
        &tables::ISO9_A_MAIN,
    )
});

static ISOR9_TABLE2: Lazy<Scheme> = Lazy::new(|| {
    main_only(
        "RussianISOR9Table2",
        "ISO/R 9 (1968), GOST 16876-71 table 2, UN (1987)",
        &tables::ISOR9_TABLE2_MAIN,
    )
});
