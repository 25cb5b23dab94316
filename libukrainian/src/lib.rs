//! # libukrainian
//!
//! Ukrainian romanization schemes built on translit-core.

pub mod schemes;
pub mod tables;

pub use schemes::UkrainianScheme;
pub use translit_core::{Error, Result, Scheme};

/// Transliterate with the official national system (KMU 2010), preserving
/// all-uppercase input.
///
/// ```
/// assert_eq!(libukrainian::translit("Євген Петренко"), "Yevhen Petrenko");
/// ```
pub fn translit(src: &str) -> String {
    UkrainianScheme::default().transliterate(src, true)
}
