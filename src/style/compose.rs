use gpui::Rgba;
use gpui_button_theme::{Theme, ThemeColors, ThemeShadow};

use super::{
    ButtonSize, ButtonStyle, ButtonVariant, FragmentKind, Padding, StyleCursor,
    StyleDeclarations, StyleFragment, StylePosition, StyleTransition,
};
use crate::{ButtonError, utils::RgbaExt};

const TRANSITION_DURATION_MS: u64 = 300;

const HOVER_DARKEN: f32 = 0.2;
const HOVER_SATURATE: f32 = 1.5;
const GRAY_HOVER_DARKEN: f32 = 0.5;
const VARIANT_HOVER_SATURATE: f32 = 0.5;

const FOCUS_BRIGHTEN: f32 = 1.;
const FOCUS_SATURATE: f32 = 3.;
const FOCUS_GLOW_BLUR: f32 = 8.;

const HOVER_LIFT: f32 = -3.;
const ACTIVE_PRESS: f32 = 1.;

const DISABLED_OPACITY: f32 = 0.6;

const BASE_SPACE: usize = 3;
const BASE_FONT_SIZE: usize = 3;
const BASE_RADIUS: usize = 1;

/// Everything a button's style depends on.
#[derive(Debug, Clone, Copy)]
pub struct StyleInputs<'a> {
    pub theme: &'a Theme,
    /// The palette for the active mode, see [`ThemeColors::for_mode`].
    pub colors: &'a ThemeColors,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub disable_color_transforms: bool,
    pub disable_animation: bool,
}

impl<'a> StyleInputs<'a> {
    pub fn new(theme: &'a Theme, colors: &'a ThemeColors) -> Self {
        Self {
            theme,
            colors,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            disable_color_transforms: false,
            disable_animation: false,
        }
    }
}

/// Builds the ordered style fragments for a button.
///
/// The base fragment always comes first. A size fragment follows for small
/// and medium buttons, then a variant fragment for anything but primary. The
/// disabled fragment, when present, is always last.
///
/// Fails when the palette has no color for the requested variant.
pub fn compose_styles(inputs: &StyleInputs) -> Result<ButtonStyle, ButtonError> {
    let mut style = ButtonStyle::default();

    style.push(base_fragment(inputs));

    if let Some(fragment) = size_fragment(inputs.theme, inputs.size) {
        style.push(fragment);
    }

    if inputs.variant != ButtonVariant::Primary {
        style.push(variant_fragment(inputs)?);
    }

    if inputs.disabled {
        style.push(disabled_fragment());
    }

    tracing::debug!(
        variant = %inputs.variant,
        size = %inputs.size,
        disabled = inputs.disabled,
        fragments = style.fragments().len(),
        "composed button style"
    );

    Ok(style)
}

fn focus_glow(color: Rgba) -> ThemeShadow {
    ThemeShadow::glow(
        FOCUS_GLOW_BLUR,
        color.brighten(FOCUS_BRIGHTEN).saturate(FOCUS_SATURATE),
    )
}

fn base_fragment(inputs: &StyleInputs) -> StyleFragment {
    let theme = inputs.theme;
    let primary = inputs.colors.primary;
    let animate = !inputs.disable_animation;

    let mut fragment = StyleFragment::new(FragmentKind::Base);

    fragment.base = StyleDeclarations {
        position: Some(StylePosition::Relative),
        cursor: Some(StyleCursor::Pointer),
        margin: Some(0.),
        border_width: Some(0.),
        padding: Some(Padding::all(theme.space_at(BASE_SPACE))),
        corner_radius: Some(theme.radius_at(BASE_RADIUS)),
        background: Some(primary),
        text_color: Some(inputs.colors.background),
        font_size: Some(theme.font_size_at(BASE_FONT_SIZE)),
        translate_y: Some(0.),
        transition: animate.then_some(StyleTransition::EaseInOut {
            duration_ms: TRANSITION_DURATION_MS,
        }),
        ..Default::default()
    };

    fragment.hover = StyleDeclarations {
        background: Some(if inputs.disable_color_transforms {
            primary
        } else {
            primary.darken(HOVER_DARKEN).saturate(HOVER_SATURATE)
        }),
        translate_y: animate.then_some(HOVER_LIFT),
        box_shadow: if animate { theme.shadow("default") } else { None },
        ..Default::default()
    };

    fragment.focus = StyleDeclarations {
        box_shadow: Some(focus_glow(primary)),
        ..Default::default()
    };

    fragment.active = StyleDeclarations {
        translate_y: animate.then_some(ACTIVE_PRESS),
        ..Default::default()
    };

    fragment
}

fn size_fragment(theme: &Theme, size: ButtonSize) -> Option<StyleFragment> {
    let base = match size {
        ButtonSize::Large => return None,

        ButtonSize::Medium => StyleDeclarations {
            padding: Some(Padding::all(theme.space_at(2))),
            ..Default::default()
        },

        ButtonSize::Small => StyleDeclarations {
            padding: Some(Padding {
                vertical: theme.space_at(1),
                horizontal: theme.space_at(2),
            }),
            font_size: Some(theme.font_size_at(2)),
            ..Default::default()
        },
    };

    let mut fragment = StyleFragment::new(FragmentKind::Size(size));
    fragment.base = base;
    Some(fragment)
}

fn variant_fragment(inputs: &StyleInputs) -> Result<StyleFragment, ButtonError> {
    let variant = inputs.variant;
    let colors = inputs.colors;
    let variant_color = variant
        .color(colors)
        .ok_or(ButtonError::MissingVariantColor(variant))?;

    let hover_color = if inputs.disable_color_transforms {
        variant_color
    } else if variant == ButtonVariant::Gray {
        variant_color.darken(GRAY_HOVER_DARKEN)
    } else {
        variant_color.saturate(VARIANT_HOVER_SATURATE)
    };

    let mut fragment = StyleFragment::new(FragmentKind::Variant(variant));

    fragment.base = StyleDeclarations {
        background: Some(variant_color),
        text_color: Some(if variant.on_text_color() {
            colors.text
        } else {
            colors.background
        }),
        ..Default::default()
    };

    fragment.hover = StyleDeclarations {
        background: Some(hover_color),
        ..Default::default()
    };

    fragment.focus = StyleDeclarations {
        box_shadow: Some(focus_glow(variant_color)),
        ..Default::default()
    };

    Ok(fragment)
}

fn disabled_fragment() -> StyleFragment {
    let settled = StyleDeclarations {
        translate_y: Some(0.),
        ..Default::default()
    };

    let mut fragment = StyleFragment::new(FragmentKind::Disabled);

    fragment.base = StyleDeclarations {
        opacity: Some(DISABLED_OPACITY),
        cursor: Some(StyleCursor::Default),
        transition: Some(StyleTransition::None),
        pointer_events: Some(false),
        ..settled.clone()
    };
    fragment.hover = settled.clone();
    fragment.active = settled;

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;
    use gpui_button_theme::{DEFAULT_THEME, ThemeMode, ThemeOverride};

    use crate::style::InteractionState;

    fn inputs(colors: &ThemeColors) -> StyleInputs<'_> {
        StyleInputs::new(&DEFAULT_THEME, colors)
    }

    fn light() -> &'static ThemeColors {
        &DEFAULT_THEME.colors
    }

    #[test]
    fn test_defaults_produce_only_base_fragment() {
        let style = compose_styles(&inputs(light())).unwrap();

        assert_eq!(style.kinds().collect::<Vec<_>>(), [FragmentKind::Base]);
    }

    #[test]
    fn test_base_fragment_uses_theme_scales() {
        let style = compose_styles(&inputs(light())).unwrap();
        let base = &style.fragments()[0].base;
        let theme = &*DEFAULT_THEME;

        assert_eq!(base.padding, Some(Padding::all(theme.space[3])));
        assert_eq!(base.corner_radius, Some(theme.radii[1]));
        assert_eq!(base.font_size, Some(theme.font_sizes[3]));
        assert_eq!(base.background, Some(theme.colors.primary));
        assert_eq!(base.text_color, Some(theme.colors.background));
        assert_eq!(base.position, Some(StylePosition::Relative));
        assert_eq!(base.cursor, Some(StyleCursor::Pointer));
    }

    #[test]
    fn test_base_interactive_states() {
        let style = compose_styles(&inputs(light())).unwrap();
        let base = &style.fragments()[0];
        let primary = light().primary;

        assert_eq!(
            base.hover.background,
            Some(primary.darken(0.2).saturate(1.5))
        );
        assert_eq!(base.hover.translate_y, Some(-3.));
        assert_eq!(base.hover.box_shadow, DEFAULT_THEME.shadow("default"));
        assert_eq!(
            base.focus.box_shadow,
            Some(ThemeShadow::glow(8., primary.brighten(1.).saturate(3.)))
        );
        assert_eq!(base.active.translate_y, Some(1.));
    }

    #[test]
    fn test_disable_animation_drops_motion_but_keeps_states() {
        let style = compose_styles(&StyleInputs {
            disable_animation: true,
            ..inputs(light())
        })
        .unwrap();
        let base = &style.fragments()[0];

        assert_eq!(base.base.transition, None);
        assert_eq!(base.hover.translate_y, None);
        assert_eq!(base.hover.box_shadow, None);
        assert_eq!(base.active.translate_y, None);
        assert!(base.hover.background.is_some());
        assert!(base.focus.box_shadow.is_some());
    }

    #[test]
    fn test_animation_declares_transition() {
        let resolved = compose_styles(&inputs(light())).unwrap().resolve();

        assert_eq!(
            resolved.transition(),
            StyleTransition::EaseInOut { duration_ms: 300 }
        );
    }

    #[test]
    fn test_disable_color_transforms_uses_primary_on_hover() {
        let style = compose_styles(&StyleInputs {
            disable_color_transforms: true,
            ..inputs(light())
        })
        .unwrap();

        assert_eq!(style.fragments()[0].hover.background, Some(light().primary));
    }

    #[test]
    fn test_small_size_overrides_padding_and_font_size() {
        let style = compose_styles(&StyleInputs {
            size: ButtonSize::Small,
            ..inputs(light())
        })
        .unwrap();
        let theme = &*DEFAULT_THEME;

        assert_eq!(
            style.kinds().collect::<Vec<_>>(),
            [FragmentKind::Base, FragmentKind::Size(ButtonSize::Small)]
        );

        let resolved = style.resolve();
        assert_eq!(
            resolved.base.padding,
            Some(Padding {
                vertical: theme.space[1],
                horizontal: theme.space[2],
            })
        );
        assert_eq!(resolved.base.font_size, Some(theme.font_sizes[2]));
    }

    #[test]
    fn test_medium_size_overrides_padding_only() {
        let style = compose_styles(&StyleInputs {
            size: ButtonSize::Medium,
            ..inputs(light())
        })
        .unwrap();
        let theme = &*DEFAULT_THEME;

        let resolved = style.resolve();
        assert_eq!(resolved.base.padding, Some(Padding::all(theme.space[2])));
        assert_eq!(resolved.base.font_size, Some(theme.font_sizes[3]));
        assert_eq!(style.fragments()[1].base.font_size, None);
    }

    #[test]
    fn test_gray_variant() {
        let style = compose_styles(&StyleInputs {
            variant: ButtonVariant::Gray,
            ..inputs(light())
        })
        .unwrap();
        let gray = light().gray.unwrap();
        let fragment = &style.fragments()[1];

        assert_eq!(fragment.kind, FragmentKind::Variant(ButtonVariant::Gray));
        assert_eq!(fragment.base.background, Some(gray));
        assert_eq!(fragment.base.text_color, Some(light().text));
        assert_eq!(fragment.hover.background, Some(gray.darken(0.5)));
        assert_eq!(
            fragment.focus.box_shadow,
            Some(ThemeShadow::glow(8., gray.brighten(1.).saturate(3.)))
        );
    }

    #[test]
    fn test_muted_variant_uses_text_color() {
        let style = compose_styles(&StyleInputs {
            variant: ButtonVariant::Muted,
            ..inputs(light())
        })
        .unwrap();

        assert_eq!(style.resolve().base.text_color, Some(light().text));
    }

    #[test]
    fn test_other_variants_saturate_on_hover() {
        let style = compose_styles(&StyleInputs {
            variant: ButtonVariant::Accent2,
            ..inputs(light())
        })
        .unwrap();
        let accent2 = light().accent2.unwrap();
        let fragment = &style.fragments()[1];

        assert_eq!(fragment.base.text_color, Some(light().background));
        assert_eq!(fragment.hover.background, Some(accent2.saturate(0.5)));
    }

    #[test]
    fn test_variant_hover_without_color_transforms() {
        let style = compose_styles(&StyleInputs {
            variant: ButtonVariant::Gray,
            disable_color_transforms: true,
            ..inputs(light())
        })
        .unwrap();

        assert_eq!(style.fragments()[1].hover.background, light().gray);
    }

    #[test]
    fn test_missing_variant_color_fails() {
        let mut colors = light().clone();
        colors.accent3 = None;

        let result = compose_styles(&StyleInputs {
            variant: ButtonVariant::Accent3,
            ..inputs(&colors)
        });

        assert!(matches!(
            result,
            Err(ButtonError::MissingVariantColor(ButtonVariant::Accent3))
        ));
    }

    #[test]
    fn test_disabled_fragment_is_always_last() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let style = compose_styles(&StyleInputs {
                    variant,
                    size,
                    disabled: true,
                    ..inputs(light())
                })
                .unwrap();

                assert_eq!(
                    style.kinds().last(),
                    Some(FragmentKind::Disabled),
                    "{variant} {size} should end with the disabled fragment"
                );
            }
        }
    }

    #[test]
    fn test_disabled_blocks_interaction() {
        let resolved = compose_styles(&StyleInputs {
            variant: ButtonVariant::Accent,
            disabled: true,
            ..inputs(light())
        })
        .unwrap()
        .resolve();

        let pressed = resolved.for_state(InteractionState {
            hovered: true,
            focused: true,
            pressed: true,
        });

        assert!(!resolved.is_interactive());
        assert_eq!(pressed.opacity, Some(0.6));
        assert_eq!(pressed.cursor, Some(StyleCursor::Default));
        assert_eq!(pressed.translate_y, Some(0.));
        assert_eq!(pressed.box_shadow, None);
        assert_eq!(resolved.transition(), StyleTransition::None);
        assert_eq!(resolved.hover.translate_y, Some(0.));
        assert_eq!(resolved.active.translate_y, Some(0.));
    }

    #[test]
    fn test_composition_is_idempotent() {
        for mode in ThemeMode::ALL {
            let colors = DEFAULT_THEME.colors.for_mode(mode);

            for variant in ButtonVariant::ALL {
                for size in ButtonSize::ALL {
                    for disabled in [false, true] {
                        let style_inputs = StyleInputs {
                            variant,
                            size,
                            disabled,
                            ..inputs(colors)
                        };

                        let first = compose_styles(&style_inputs).unwrap();
                        let second = compose_styles(&style_inputs).unwrap();

                        assert_eq!(first, second);
                        assert_eq!(
                            serde_json::to_string(&first).unwrap(),
                            serde_json::to_string(&second).unwrap()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_dark_mode_palette_drives_colors() {
        let dark = DEFAULT_THEME.colors.for_mode(ThemeMode::Dark);
        let resolved = compose_styles(&inputs(dark)).unwrap().resolve();

        assert_eq!(resolved.base.background, Some(dark.primary));
        assert_eq!(resolved.base.text_color, Some(dark.background));
        assert_ne!(resolved.base.background, Some(light().primary));
    }

    #[test]
    fn test_partial_theme_keeps_default_scales() {
        let colors = ThemeColors {
            background: rgb(0x000000),
            text: rgb(0xffffff),
            primary: rgb(0xff0000),
            secondary: None,
            accent: None,
            accent2: None,
            accent3: None,
            accent4: None,
            muted: None,
            highlight: None,
            gray: None,
            modes: Default::default(),
        };
        let theme = Theme::resolve(Some(&ThemeOverride::default().colors(colors)));
        let style = compose_styles(&StyleInputs::new(&theme, &theme.colors)).unwrap();
        let base = &style.fragments()[0];

        assert_eq!(base.base.background, Some(rgb(0xff0000)));
        assert_eq!(base.base.padding, Some(Padding::all(DEFAULT_THEME.space[3])));
        assert_eq!(base.hover.box_shadow, DEFAULT_THEME.shadow("default"));
    }

    #[test]
    fn test_short_scales_fall_back_to_defaults() {
        let theme = Theme::resolve(Some(&ThemeOverride::default().space([0., 2.])));
        let style = compose_styles(&StyleInputs {
            size: ButtonSize::Small,
            ..StyleInputs::new(&theme, &theme.colors)
        })
        .unwrap();
        let resolved = style.resolve();

        assert_eq!(
            resolved.base.padding,
            Some(Padding {
                vertical: 2.,
                horizontal: DEFAULT_THEME.space[2],
            })
        );
    }
}
