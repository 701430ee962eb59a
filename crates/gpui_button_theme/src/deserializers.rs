use gpui::Rgba;
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{Scale, ThemeError, ThemeShadow};

pub fn de_scale<'de, D>(deserializer: D) -> Result<Scale, D::Error>
where
    D: Deserializer<'de>,
{
    let values = SmallVec::<[StringOrFloat; 10]>::deserialize(deserializer)?;

    values
        .into_iter()
        .map(|value| value.into_pixels().map_err(D::Error::custom))
        .collect::<Result<SmallVec<[f32; 10]>, _>>()
        .map(Scale::from)
}

pub fn de_opt_scale<'de, D>(deserializer: D) -> Result<Option<Scale>, D::Error>
where
    D: Deserializer<'de>,
{
    de_scale(deserializer).map(Some)
}

pub fn de_shadow<'de, D>(deserializer: D) -> Result<ThemeShadow, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrShadow {
        String(String),
        Shadow {
            #[serde(default)]
            x: f32,
            #[serde(default)]
            y: f32,
            #[serde(default)]
            blur: f32,
            #[serde(default)]
            spread: f32,
            color: Rgba,
        },
    }

    match StringOrShadow::deserialize(deserializer)? {
        StringOrShadow::String(string) => parse_shadow(&string).map_err(D::Error::custom),
        StringOrShadow::Shadow {
            x,
            y,
            blur,
            spread,
            color,
        } => Ok(ThemeShadow {
            x,
            y,
            blur,
            spread,
            color,
        }),
    }
}

/// Parses `"<x> <y> <blur> [<spread>] <color>"`, lengths in plain numbers or `px`.
pub(crate) fn parse_shadow(string: &str) -> Result<ThemeShadow, ThemeError> {
    let invalid = || ThemeError::InvalidShadow(string.to_owned());

    let tokens: SmallVec<[&str; 5]> = string.split_whitespace().collect();
    let Some((color, lengths)) = tokens.split_last() else {
        return Err(invalid());
    };

    let color = Rgba::try_from(*color).map_err(|_| invalid())?;
    let lengths = lengths
        .iter()
        .map(|token| parse_pixels(token).ok_or_else(invalid))
        .collect::<Result<SmallVec<[f32; 4]>, _>>()?;

    let (x, y, blur, spread) = match lengths.as_slice() {
        [x, y, blur] => (*x, *y, *blur, 0.),
        [x, y, blur, spread] => (*x, *y, *blur, *spread),
        _ => return Err(invalid()),
    };

    Ok(ThemeShadow {
        x,
        y,
        blur,
        spread,
        color,
    })
}

fn parse_pixels(string: &str) -> Option<f32> {
    string.strip_suffix("px").unwrap_or(string).parse().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

impl StringOrFloat {
    fn into_pixels(self) -> Result<f32, &'static str> {
        match self {
            StringOrFloat::Float(pixels) => Ok(pixels),
            StringOrFloat::String(string) => match string.strip_suffix("px") {
                Some(string) => string
                    .parse::<f32>()
                    .map_err(|_| "could not convert string into pixels"),
                None => Err("expected string to end with 'px'"),
            },
        }
    }
}
