//! Theme tokens for styled buttons: spacing, font size and radius scales,
//! named shadows and a color palette with optional per-mode palettes.
//!
//! Themes are JSON documents. A built-in theme is available as
//! [`DEFAULT_THEME`] and partial themes ([`ThemeOverride`]) are merged over it
//! one top-level key at a time.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;
