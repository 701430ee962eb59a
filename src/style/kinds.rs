#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{convert::Infallible, fmt, str::FromStr};

use enum_assoc::Assoc;
use gpui::Rgba;
use gpui_button_theme::ThemeColors;
use serde::Serialize;

use crate::ButtonError;

/// Named color variants. Each one draws its background from the palette
/// color of the same name.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[func(pub const fn name(&self) -> &'static str)]
#[func(pub fn color(&self, colors: &ThemeColors) -> Option<Rgba>)]
#[func(pub const fn on_text_color(&self) -> bool)]
pub enum ButtonVariant {
    #[default]
    #[assoc(name = "primary")]
    #[assoc(color = Some(colors.primary))]
    #[assoc(on_text_color = false)]
    Primary,
    #[assoc(name = "secondary")]
    #[assoc(color = colors.secondary)]
    #[assoc(on_text_color = false)]
    Secondary,
    #[assoc(name = "accent")]
    #[assoc(color = colors.accent)]
    #[assoc(on_text_color = false)]
    Accent,
    #[assoc(name = "accent2")]
    #[assoc(color = colors.accent2)]
    #[assoc(on_text_color = false)]
    Accent2,
    #[assoc(name = "accent3")]
    #[assoc(color = colors.accent3)]
    #[assoc(on_text_color = false)]
    Accent3,
    #[assoc(name = "accent4")]
    #[assoc(color = colors.accent4)]
    #[assoc(on_text_color = false)]
    Accent4,
    /// Light surface, drawn with the palette's text color.
    #[assoc(name = "muted")]
    #[assoc(color = colors.muted)]
    #[assoc(on_text_color = true)]
    Muted,
    #[assoc(name = "highlight")]
    #[assoc(color = colors.highlight)]
    #[assoc(on_text_color = false)]
    Highlight,
    /// Neutral surface, drawn with the palette's text color.
    #[assoc(name = "gray")]
    #[assoc(color = colors.gray)]
    #[assoc(on_text_color = true)]
    Gray,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 9] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Accent,
        ButtonVariant::Accent2,
        ButtonVariant::Accent3,
        ButtonVariant::Accent4,
        ButtonVariant::Muted,
        ButtonVariant::Highlight,
        ButtonVariant::Gray,
    ];
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonVariant {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonVariant::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| ButtonError::UnknownVariant(s.to_owned()))
    }
}

#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[func(pub const fn name(&self) -> &'static str)]
pub enum ButtonSize {
    #[default]
    #[assoc(name = "large")]
    Large,
    #[assoc(name = "medium")]
    Medium,
    #[assoc(name = "small")]
    Small,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Large, ButtonSize::Medium, ButtonSize::Small];
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized sizes are treated as large.
impl FromStr for ButtonSize {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "medium" => ButtonSize::Medium,
            "small" => ButtonSize::Small,
            _ => ButtonSize::Large,
        })
    }
}
