use std::{fmt, ops::Deref, str::FromStr, sync::LazyLock};

use gpui::{Global, Rgba, SharedString};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::{
    ThemeError,
    deserializers::{de_opt_scale, de_scale, de_shadow},
};

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLock<Theme> = LazyLock::new(|| {
                Theme::from_json(include_str!($path)).expect("built-in theme should be valid")
            });
        )+
    };
}

generate_builtin_themes!(["../themes/default.json", DEFAULT_THEME]);

/// The design tokens a button is styled from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    #[serde(deserialize_with = "de_scale")]
    pub space: Scale,
    #[serde(deserialize_with = "de_scale")]
    pub font_sizes: Scale,
    #[serde(deserialize_with = "de_scale")]
    pub radii: Scale,
    pub shadows: ThemeShadows,
}

impl Theme {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// The built-in theme with `overrides` laid over it.
    pub fn resolve(overrides: Option<&ThemeOverride>) -> Theme {
        match overrides {
            Some(overrides) => DEFAULT_THEME.merged(overrides),
            None => DEFAULT_THEME.clone(),
        }
    }

    /// Shallow merge: each top-level key present in `overrides` replaces ours wholesale.
    pub fn merged(&self, overrides: &ThemeOverride) -> Theme {
        tracing::debug!(
            colors = overrides.colors.is_some(),
            space = overrides.space.is_some(),
            font_sizes = overrides.font_sizes.is_some(),
            radii = overrides.radii.is_some(),
            shadows = overrides.shadows.is_some(),
            "merging theme overrides"
        );

        Theme {
            colors: overrides.colors.as_ref().unwrap_or(&self.colors).clone(),
            space: overrides.space.as_ref().unwrap_or(&self.space).clone(),
            font_sizes: overrides
                .font_sizes
                .as_ref()
                .unwrap_or(&self.font_sizes)
                .clone(),
            radii: overrides.radii.as_ref().unwrap_or(&self.radii).clone(),
            shadows: overrides.shadows.as_ref().unwrap_or(&self.shadows).clone(),
        }
    }

    pub fn space_at(&self, index: usize) -> f32 {
        scale_value(&self.space, &DEFAULT_THEME.space, index)
    }

    pub fn font_size_at(&self, index: usize) -> f32 {
        scale_value(&self.font_sizes, &DEFAULT_THEME.font_sizes, index)
    }

    pub fn radius_at(&self, index: usize) -> f32 {
        scale_value(&self.radii, &DEFAULT_THEME.radii, index)
    }

    /// Looks a shadow up by name, falling back to the built-in theme's shadow of that name.
    pub fn shadow(&self, name: &str) -> Option<ThemeShadow> {
        self.shadows
            .get(name)
            .or_else(|| DEFAULT_THEME.shadows.get(name))
            .copied()
    }
}

fn scale_value(scale: &Scale, fallback: &Scale, index: usize) -> f32 {
    scale
        .at(index)
        .or_else(|| fallback.at(index))
        .unwrap_or_default()
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

/// A partial theme. Present keys replace the matching key of the base theme.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColors>,
    #[serde(
        default,
        deserialize_with = "de_opt_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub space: Option<Scale>,
    #[serde(
        default,
        deserialize_with = "de_opt_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_sizes: Option<Scale>,
    #[serde(
        default,
        deserialize_with = "de_opt_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub radii: Option<Scale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ThemeShadows>,
}

impl ThemeOverride {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<ThemeOverride, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn space(mut self, space: impl Into<Scale>) -> Self {
        self.space = Some(space.into());
        self
    }

    pub fn font_sizes(mut self, font_sizes: impl Into<Scale>) -> Self {
        self.font_sizes = Some(font_sizes.into());
        self
    }

    pub fn radii(mut self, radii: impl Into<Scale>) -> Self {
        self.radii = Some(radii.into());
        self
    }

    pub fn shadows(mut self, shadows: ThemeShadows) -> Self {
        self.shadows = Some(shadows);
        self
    }
}

impl From<Theme> for ThemeOverride {
    fn from(theme: Theme) -> Self {
        Self {
            colors: Some(theme.colors),
            space: Some(theme.space),
            font_sizes: Some(theme.font_sizes),
            radii: Some(theme.radii),
            shadows: Some(theme.shadows),
        }
    }
}

/// An ordered list of pixel values, addressed by position.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Scale(SmallVec<[f32; 10]>);

impl Scale {
    pub fn at(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }
}

impl Deref for Scale {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<SmallVec<[f32; 10]>> for Scale {
    fn from(values: SmallVec<[f32; 10]>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f32; N]> for Scale {
    fn from(values: [f32; N]) -> Self {
        Self(values.into_iter().collect())
    }
}

impl From<Vec<f32>> for Scale {
    fn from(values: Vec<f32>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}

pub type ThemeShadows = IndexMap<SharedString, ThemeShadow>;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct ThemeShadow {
    pub x: f32,
    pub y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Rgba,
}

impl ThemeShadow {
    /// A centered glow, as drawn around focused controls.
    pub fn glow(blur: f32, color: Rgba) -> Self {
        Self {
            x: 0.,
            y: 0.,
            blur,
            spread: 0.,
            color,
        }
    }
}

impl<'de> Deserialize<'de> for ThemeShadow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        de_shadow(deserializer)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeError::UnknownMode(other.to_owned())),
        }
    }
}

/// Color roles. `background`, `text` and `primary` are required, the rest are
/// only needed by the buttons that use them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    pub background: Rgba,
    pub text: Rgba,
    pub primary: Rgba,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent2: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent3: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent4: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray: Option<Rgba>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub modes: IndexMap<ThemeMode, ThemeColors>,
}

impl ThemeColors {
    /// The palette to draw with in `mode`.
    ///
    /// Light always uses the top-level palette. Other modes use their entry in
    /// `modes`, or the top-level palette when the theme does not define one.
    pub fn for_mode(&self, mode: ThemeMode) -> &ThemeColors {
        if mode == ThemeMode::Light {
            return self;
        }

        match self.modes.get(&mode) {
            Some(colors) => colors,
            None => {
                tracing::warn!(%mode, "theme has no palette for mode, using the base palette");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    fn palette(primary: u32) -> ThemeColors {
        ThemeColors {
            background: rgb(0xffffff),
            text: rgb(0x000000),
            primary: rgb(primary),
            secondary: None,
            accent: None,
            accent2: None,
            accent3: None,
            accent4: None,
            muted: None,
            highlight: None,
            gray: None,
            modes: IndexMap::new(),
        }
    }

    #[test]
    fn test_default_theme_parses() {
        let theme = &*DEFAULT_THEME;

        assert!(theme.space.len() > 3, "space scale should reach index 3");
        assert!(theme.font_sizes.len() > 3);
        assert!(theme.radii.len() > 1);
        assert!(theme.shadow("default").is_some());
        assert!(theme.colors.modes.contains_key(&ThemeMode::Dark));
        assert!(theme.colors.gray.is_some());
    }

    #[test]
    fn test_dark_mode_uses_mode_palette() {
        let colors = &DEFAULT_THEME.colors;
        let dark = colors.for_mode(ThemeMode::Dark);

        assert_eq!(dark, &colors.modes[&ThemeMode::Dark]);
        assert_ne!(dark.background, colors.background);
    }

    #[test]
    fn test_light_mode_uses_base_palette() {
        let colors = &DEFAULT_THEME.colors;

        assert_eq!(colors.for_mode(ThemeMode::Light), colors);
    }

    #[test]
    fn test_missing_mode_falls_back_to_base_palette() {
        let colors = palette(0x112233);

        assert_eq!(colors.for_mode(ThemeMode::Dark), &colors);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let overrides = ThemeOverride::default().colors(palette(0x112233));
        let theme = Theme::resolve(Some(&overrides));

        assert_eq!(theme.colors.primary, rgb(0x112233));
        assert_eq!(theme.space, DEFAULT_THEME.space);
        assert_eq!(theme.font_sizes, DEFAULT_THEME.font_sizes);
        assert_eq!(theme.radii, DEFAULT_THEME.radii);
        assert_eq!(theme.shadows, DEFAULT_THEME.shadows);
    }

    #[test]
    fn test_override_replaces_whole_key() {
        let overrides = ThemeOverride::default().space([1., 2.]);
        let theme = Theme::resolve(Some(&overrides));

        assert_eq!(&theme.space[..], &[1., 2.]);
        assert_eq!(theme.colors, DEFAULT_THEME.colors);
    }

    #[test]
    fn test_no_override_is_default() {
        assert_eq!(Theme::resolve(None), *DEFAULT_THEME);
        assert_eq!(
            Theme::resolve(Some(&ThemeOverride::default())),
            *DEFAULT_THEME
        );
    }

    #[test]
    fn test_short_scale_falls_back_to_default_value() {
        let theme = Theme::resolve(Some(&ThemeOverride::default().space([1., 2.])));

        assert_eq!(theme.space_at(1), 2.);
        assert_eq!(theme.space_at(3), DEFAULT_THEME.space[3]);
        assert_eq!(theme.space_at(500), 0.);
    }

    #[test]
    fn test_override_from_json() {
        let overrides = ThemeOverride::from_json(
            r##"{
                "fontSizes": [10, 11, "12px", 13],
                "shadows": { "default": "0 1px 2px #000000" }
            }"##,
        )
        .unwrap();

        assert_eq!(overrides.font_sizes.as_deref(), Some(&[10., 11., 12., 13.][..]));
        assert_eq!(overrides.shadows.as_ref().unwrap()["default"].blur, 2.);
        assert!(overrides.colors.is_none());
    }

    #[test]
    fn test_override_rejects_unknown_keys() {
        assert!(matches!(
            ThemeOverride::from_json(r#"{ "fonts": [] }"#),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeError::UnknownMode(mode)) if mode == "sepia"
        ));
    }

    #[test]
    fn test_theme_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
