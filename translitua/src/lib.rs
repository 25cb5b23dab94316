//! translitua
//!
//! Romanization of Ukrainian and Russian Cyrillic text according to a named
//! standard. The official Ukrainian national system (KMU 2010) is the
//! default.
//!
//! ```
//! use translitua::{translit, transliterate, SchemeId, UkrainianScheme};
//!
//! assert_eq!(translit("Дмитро Згуровский"), "Dmytro Zghurovskyi");
//! assert_eq!(
//!     transliterate("Дмитро Згуровский", UkrainianScheme::Simple.into(), true),
//!     "Dmytro Zhurovskyj"
//! );
//! assert_eq!(transliterate("ЗГУРОВСЬКИЙ", SchemeId::default(), false), "ZGhUROVSKYI");
//! ```
//!
//! Public API:
//! - `translit` / `transliterate` / `transliterate_bytes` - entry points
//! - `SchemeId`, `ALL_UKRAINIAN`, `ALL_RUSSIAN`, `all_schemes`, `lookup` - the catalog
//! - `TranslitConfig` - TOML configuration for front ends

pub mod registry;

pub use libukrainian::UkrainianScheme;
pub use librussian::RussianScheme;
pub use registry::{all_schemes, lookup, Language, SchemeId, ALL_RUSSIAN, ALL_UKRAINIAN};
pub use translit_core::{is_uppercase, Error, Result, Scheme, TranslitConfig};

/// Transliterate with the default scheme, preserving all-uppercase input.
pub fn translit(src: &str) -> String {
    transliterate(src, SchemeId::default(), true)
}

/// Transliterate `src` with `scheme`.
///
/// When `preserve_case` is set and `src` is entirely uppercase, the result
/// is entirely uppercase too; otherwise case follows the scheme tables
/// (`"Я"` → `"Ya"`).
pub fn transliterate(src: &str, scheme: SchemeId, preserve_case: bool) -> String {
    translit_core::transliterate(src, scheme.scheme(), preserve_case)
}

/// Like [`transliterate`], for raw bytes. Fails with [`Error::InvalidInput`]
/// if `src` is not UTF-8.
pub fn transliterate_bytes(src: &[u8], scheme: SchemeId, preserve_case: bool) -> Result<String> {
    translit_core::transliterate_bytes(src, scheme.scheme(), preserve_case)
}

/// Resolve the configured scheme and transliterate with the configured flags.
pub fn transliterate_with_config(src: &str, config: &TranslitConfig) -> Result<String> {
    let scheme = lookup(&config.scheme)?;
    Ok(transliterate(src, scheme, config.preserve_case))
}
