//! translit-core
//!
//! Scheme model, rewrite engine, errors and configuration shared by the
//! language crates (libukrainian, librussian) and the `translitua` front end.
//!
//! Public API:
//! - `Scheme` / `SchemeBuilder` - immutable rule tables for one romanization standard
//! - `transliterate` - the ordered rewrite pipeline
//! - `TranslitConfig` - TOML-backed front-end configuration
//! - `Error` / `Result` - the workspace error type
pub mod config;
pub use config::{TranslitConfig, DEFAULT_SCHEME};

pub mod engine;
pub use engine::{is_uppercase, transliterate, transliterate_bytes};

pub mod error;
pub use error::{Error, Result};

pub mod scheme;
pub use scheme::{capitalize, RuleSet, Scheme, SchemeBuilder};
