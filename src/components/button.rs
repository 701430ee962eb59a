use std::time::Duration;

use gpui::{
    AnyElement, App, AppContext, BoxShadow, ClickEvent, Context, CursorStyle, ElementId, Entity,
    InteractiveElement, IntoElement, MouseButton, ParentElement, Render, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, point, prelude::FluentBuilder,
    px,
};
use gpui_button_theme::{Theme, ThemeExt, ThemeMode, ThemeOverride, ThemeShadow};
use gpui_transitions::TransitionExt;
use smallvec::SmallVec;

use crate::{
    ButtonError,
    style::{
        ButtonSize, ButtonStyle, ButtonVariant, InteractionState, StyleCursor, StyleInputs,
        StyleTransition, compose_styles,
    },
    utils::{ElementIdExt, goal_transition},
};

/// The kind of element a button presents itself as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonElementKind {
    #[default]
    Button,
    /// Underlined, like a hyperlink.
    Link,
    /// A plain container that is not a tab stop.
    Container,
}

impl ButtonElementKind {
    pub fn is_focusable(&self) -> bool {
        !matches!(self, ButtonElementKind::Container)
    }
}

/// The non-style attributes a rendered button carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAttributes {
    pub id: SharedString,
    /// Selector the rendered element can be found by in tests.
    pub test_id: SharedString,
    pub element_kind: ButtonElementKind,
    pub disabled: bool,
    pub tooltip: Option<SharedString>,
}

/// A themeable button.
///
/// The style is recomputed from the theme and the button's flags on every
/// render, see [`compose_styles`].
///
/// ```ignore
/// StyledButton::new("save")
///     .variant(ButtonVariant::Accent)
///     .size(ButtonSize::Small)
///     .mode(ThemeMode::Dark)
///     .on_click(|_event, _window, _cx| println!("saved"))
///     .child("Save")
/// ```
#[derive(IntoElement)]
pub struct StyledButton {
    id: ElementId,
    element_kind: ButtonElementKind,
    variant: ButtonVariant,
    size: ButtonSize,
    mode: ThemeMode,
    disabled: bool,
    disable_color_transforms: bool,
    disable_animation: bool,
    theme: Option<ThemeOverride>,
    tooltip: Option<SharedString>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    children: SmallVec<[AnyElement; 2]>,
}

impl StyledButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            element_kind: ButtonElementKind::default(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            mode: ThemeMode::default(),
            disabled: false,
            disable_color_transforms: false,
            disable_animation: false,
            theme: None,
            tooltip: None,
            on_click: None,
            children: SmallVec::new(),
        }
    }

    pub fn element_kind(mut self, element_kind: ButtonElementKind) -> Self {
        self.element_kind = element_kind;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn disable_color_transforms(mut self, disable_color_transforms: bool) -> Self {
        self.disable_color_transforms = disable_color_transforms;
        self
    }

    pub fn disable_animation(mut self, disable_animation: bool) -> Self {
        self.disable_animation = disable_animation;
        self
    }

    /// Overrides parts of the built-in theme for this button only.
    pub fn theme(mut self, theme: impl Into<ThemeOverride>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Text shown while the pointer rests on the button.
    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// The theme this button draws with: its own override laid over the
    /// built-in theme, or the app theme when it has none.
    pub fn effective_theme(&self, cx: &App) -> Theme {
        match &self.theme {
            Some(overrides) => Theme::resolve(Some(overrides)),
            None => cx.get_theme().clone(),
        }
    }

    /// Composes this button's style.
    pub fn style(&self, cx: &App) -> Result<ButtonStyle, ButtonError> {
        let theme = self.effective_theme(cx);
        compose_styles(&self.style_inputs(&theme))
    }

    fn style_inputs<'a>(&self, theme: &'a Theme) -> StyleInputs<'a> {
        StyleInputs {
            variant: self.variant,
            size: self.size,
            disabled: self.disabled,
            disable_color_transforms: self.disable_color_transforms,
            disable_animation: self.disable_animation,
            ..StyleInputs::new(theme, theme.colors.for_mode(self.mode))
        }
    }

    pub fn attributes(&self) -> ButtonAttributes {
        let id = self.id.to_test_id();

        ButtonAttributes {
            test_id: id.clone(),
            id,
            element_kind: self.element_kind,
            disabled: self.disabled,
            tooltip: self.tooltip.clone(),
        }
    }

    fn handle_on_click(
        window: &mut Window,
        cx: &mut App,
        event: &ClickEvent,
        on_click: Option<&Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    ) {
        if let Some(on_click) = on_click {
            (on_click)(event, window, cx)
        }
    }
}

impl ParentElement for StyledButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

fn to_box_shadow(shadow: ThemeShadow) -> BoxShadow {
    BoxShadow {
        color: shadow.color.into(),
        offset: point(px(shadow.x), px(shadow.y)),
        blur_radius: px(shadow.blur),
        spread_radius: px(shadow.spread),
    }
}

/// Clears pointer states that only a release over the button would otherwise reset.
fn release_pointer_states(states: &[&Entity<bool>], cx: &mut App) {
    for state in states {
        state.update(cx, |this, _cx| *this = false);
        cx.notify(state.entity_id());
    }
}

struct ButtonTooltip {
    text: SharedString,
    background: Rgba,
    text_color: Rgba,
}

impl Render for ButtonTooltip {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .py(px(4.))
            .px(px(8.))
            .rounded(px(4.))
            .text_size(px(12.))
            .bg(self.background)
            .text_color(self.text_color)
            .child(self.text.clone())
    }
}

impl RenderOnce for StyledButton {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = self.effective_theme(cx);
        let inputs = self.style_inputs(&theme);
        let attributes = self.attributes();

        let style = match compose_styles(&inputs) {
            Ok(style) => style,
            Err(error) => {
                tracing::error!(
                    id = %attributes.id,
                    %error,
                    "invalid button configuration, drawing the primary variant"
                );

                compose_styles(&StyleInputs {
                    variant: ButtonVariant::Primary,
                    ..inputs
                })
                .unwrap_or_default()
            }
        };
        let resolved = style.resolve();
        let is_interactive = resolved.is_interactive();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle(),
            )
            .read(cx)
            .clone()
            .tab_stop(self.element_kind.is_focusable());
        let is_focus = focus_handle.is_focused(window);

        if is_focus && !is_interactive {
            window.blur();
        }

        let declarations = resolved.for_state(InteractionState {
            hovered: is_hover,
            focused: is_focus,
            pressed: is_click_down,
        });

        let colors = inputs.colors;
        let duration = match resolved.transition() {
            StyleTransition::EaseInOut { duration_ms } => Duration::from_millis(duration_ms),
            StyleTransition::None => Duration::ZERO,
        };

        let bg_color_state = goal_transition(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            duration,
            declarations.background.unwrap_or(colors.primary),
        );
        let text_color_state = goal_transition(
            self.id.with_suffix("state:transition:text_color"),
            window,
            cx,
            duration,
            declarations.text_color.unwrap_or(colors.background),
        );
        let translate_y_state = goal_transition(
            self.id.with_suffix("state:transition:translate_y"),
            window,
            cx,
            duration,
            declarations.translate_y.unwrap_or_default(),
        );

        let tooltip_background = colors.text;
        let tooltip_text_color = colors.background;
        let test_id = attributes.test_id;

        div()
            .id(self.id.clone())
            .debug_selector(move || test_id.to_string())
            .relative()
            .flex_none()
            .flex()
            .justify_center()
            .items_center()
            .cursor(match declarations.cursor {
                Some(StyleCursor::Pointer) => CursorStyle::PointingHand,
                Some(StyleCursor::Default) | None => CursorStyle::Arrow,
            })
            .when(declarations.margin == Some(0.), |this| this.m_0())
            .when(declarations.border_width == Some(0.), |this| this.border_0())
            .when_some(declarations.padding, |this, padding| {
                this.py(px(padding.vertical)).px(px(padding.horizontal))
            })
            .when_some(declarations.corner_radius, |this, radius| {
                this.rounded(px(radius))
            })
            .when_some(declarations.font_size, |this, size| {
                this.text_size(px(size))
            })
            .when_some(declarations.opacity, |this, opacity| this.opacity(opacity))
            .when_some(declarations.box_shadow, |this, shadow| {
                this.shadow(vec![to_box_shadow(shadow)])
            })
            .when(self.element_kind == ButtonElementKind::Link, |this| {
                this.underline()
            })
            .child(div().flex().items_center().children(self.children))
            .when_some(attributes.tooltip, |this, text| {
                this.tooltip(move |_window, cx| {
                    cx.new(|_cx| ButtonTooltip {
                        text: text.clone(),
                        background: tooltip_background,
                        text_color: tooltip_text_color,
                    })
                    .into()
                })
            })
            .when(is_interactive, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                    // Keeps the focus glow from flashing on mouse clicks.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(is_click_down_state_on_mouse_down.entity_id());
                })
                .on_click(move |event, window, cx| {
                    is_click_down_state_on_click.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state_on_click.entity_id());

                    Self::handle_on_click(window, cx, event, self.on_click.as_ref());
                })
                .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                    // Pressed on the button, released somewhere else.
                    release_pointer_states(&[&is_hover_state, &is_click_down_state], cx);
                })
                .track_focus(&focus_handle)
            })
            .with_transitions(
                (bg_color_state, text_color_state, translate_y_state),
                |_cx, this, (bg_color, text_color, translate_y)| {
                    this.bg(bg_color)
                        .text_color(text_color)
                        .top(px(translate_y))
                },
            )
    }
}
