//! Bilingual page copy.
//!
//! - `language`: the two-valued UI language
//! - `strings`: one static content record per language, selected with [`strings`]

mod language;
mod strings;

pub use language::Language;
pub use strings::{strings, Card, CtaStrings};
