//! # librussian
//!
//! Russian romanization schemes built on translit-core.

pub mod schemes;
pub mod tables;

pub use schemes::{RussianScheme, INTERNATIONAL_PASSPORT_ALIAS};
pub use translit_core::{Error, Result, Scheme};
