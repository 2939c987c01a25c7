//! Sexagenary ("gapja") cycle designations for Korean lunar dates.
//!
//! This crate provides:
//! - The [`Cheongan`] (heavenly stem) and [`Jiji`] (earthly branch)
//!   enumerations with hangul and hanja glyphs
//! - Derivation of the year/month/day designations for a [`LunarDate`]
//! - Rendered gapja strings in either glyph set
//!
//! [`LunarDate`]: manse_core::LunarDate

pub mod cycle;
pub mod gapja;

pub use cycle::{ALL_CHEONGAN, ALL_JIJI, Cheongan, Jiji};
pub use gapja::{Ganji, GapjaInfo, chinese_gapja_string, gapja_for, gapja_string};
