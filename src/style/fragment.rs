use gpui::Rgba;
use gpui_button_theme::ThemeShadow;
use serde::Serialize;
use smallvec::SmallVec;

use super::{ButtonSize, ButtonVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePosition {
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCursor {
    Pointer,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StyleTransition {
    None,
    EaseInOut { duration_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Padding {
    pub fn all(padding: f32) -> Self {
        Self {
            vertical: padding,
            horizontal: padding,
        }
    }
}

/// A set of style declarations. `None` means "not declared here", so
/// refining with it leaves the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleDeclarations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<StylePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<StyleCursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<StyleTransition>,
    /// Vertical offset from the laid out position, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<ThemeShadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_events: Option<bool>,
}

macro_rules! refine_declarations {
    ($this:expr, $other:expr, [ $( $field:ident ),+ $(,)? ]) => {
        $(
            if $other.$field.is_some() {
                $this.$field = $other.$field;
            }
        )+
    };
}

impl StyleDeclarations {
    /// Overwrites every declaration that `other` makes.
    pub fn refine(&mut self, other: &StyleDeclarations) {
        refine_declarations!(
            self,
            other,
            [
                position,
                cursor,
                margin,
                border_width,
                padding,
                corner_radius,
                background,
                text_color,
                font_size,
                opacity,
                transition,
                translate_y,
                box_shadow,
                pointer_events,
            ]
        );
    }

    pub fn refined(mut self, other: &StyleDeclarations) -> Self {
        self.refine(other);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &StyleDeclarations::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FragmentKind {
    Base,
    Size(ButtonSize),
    Variant(ButtonVariant),
    Disabled,
}

/// One unit of style: declarations for the resting element plus the
/// interactive states layered on top of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleFragment {
    pub kind: FragmentKind,
    #[serde(skip_serializing_if = "StyleDeclarations::is_empty")]
    pub base: StyleDeclarations,
    #[serde(skip_serializing_if = "StyleDeclarations::is_empty")]
    pub hover: StyleDeclarations,
    #[serde(skip_serializing_if = "StyleDeclarations::is_empty")]
    pub focus: StyleDeclarations,
    #[serde(skip_serializing_if = "StyleDeclarations::is_empty")]
    pub active: StyleDeclarations,
}

impl StyleFragment {
    pub fn new(kind: FragmentKind) -> Self {
        Self {
            kind,
            base: StyleDeclarations::default(),
            hover: StyleDeclarations::default(),
            focus: StyleDeclarations::default(),
            active: StyleDeclarations::default(),
        }
    }
}

/// The ordered fragments of a button. Later fragments win on conflicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ButtonStyle {
    fragments: SmallVec<[StyleFragment; 4]>,
}

impl ButtonStyle {
    pub(crate) fn push(&mut self, fragment: StyleFragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[StyleFragment] {
        &self.fragments
    }

    pub fn kinds(&self) -> impl Iterator<Item = FragmentKind> + '_ {
        self.fragments.iter().map(|fragment| fragment.kind)
    }

    /// Folds the fragments, in order, into one set of declarations per state.
    pub fn resolve(&self) -> ResolvedButtonStyle {
        self.fragments.iter().fold(
            ResolvedButtonStyle::default(),
            |mut resolved, fragment| {
                resolved.base.refine(&fragment.base);
                resolved.hover.refine(&fragment.hover);
                resolved.focus.refine(&fragment.focus);
                resolved.active.refine(&fragment.active);
                resolved
            },
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub focused: bool,
    pub pressed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedButtonStyle {
    pub base: StyleDeclarations,
    pub hover: StyleDeclarations,
    pub focus: StyleDeclarations,
    pub active: StyleDeclarations,
}

impl ResolvedButtonStyle {
    pub fn is_interactive(&self) -> bool {
        self.base.pointer_events != Some(false)
    }

    pub fn transition(&self) -> StyleTransition {
        self.base.transition.unwrap_or(StyleTransition::None)
    }

    /// The declarations in effect for `state`, applied hover, focus, active.
    pub fn for_state(&self, state: InteractionState) -> StyleDeclarations {
        let mut style = self.base.clone();

        if !self.is_interactive() {
            return style;
        }

        if state.hovered {
            style.refine(&self.hover);
        }
        if state.focused {
            style.refine(&self.focus);
        }
        if state.pressed {
            style.refine(&self.active);
        }

        style
    }
}
