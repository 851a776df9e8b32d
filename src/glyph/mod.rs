//! The Ge'ez numeral alphabet and its terminal presentation.
//!
//! ## Components
//!
//! - [`catalog`] — 20 numeral glyphs (U+1369–U+137C) with value and digit class
//! - [`render`] — ANSI terminal renderer and thousands grouping

pub mod catalog;
pub mod render;

pub use catalog::{DigitClass, MyriadPower, Numeral};
pub use render::RenderConfig;
