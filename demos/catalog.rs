//! Every button variant in every size, enabled and disabled, in both modes.

use gpui::{
    App, AppContext, Application, Bounds, Context, SharedString, Window, WindowBounds,
    WindowOptions, div, prelude::*, px, size,
};

use gpui_styled_button::{
    components::StyledButton,
    style::{ButtonSize, ButtonVariant},
    theme::{ThemeExt, ThemeMode},
};

struct Catalog;

fn button_row(mode: ThemeMode, size: ButtonSize, disabled: bool) -> impl IntoElement {
    div()
        .flex()
        .flex_wrap()
        .items_center()
        .gap(px(8.))
        .children(ButtonVariant::ALL.into_iter().map(move |variant| {
            let state = if disabled { "disabled" } else { "enabled" };

            StyledButton::new(SharedString::from(format!(
                "{mode}-{size}-{variant}-{state}"
            )))
                .mode(mode)
                .size(size)
                .variant(variant)
                .disabled(disabled)
                .child(variant.name())
        }))
}

impl Render for Catalog {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_styled_button::init_for_window(window, cx);

        let theme = cx.get_theme().clone();

        div()
            .id("catalog")
            .size_full()
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .children(ThemeMode::ALL.into_iter().map(|mode| {
                let colors = theme.colors.for_mode(mode);

                div()
                    .bg(colors.background)
                    .text_color(colors.text)
                    .flex()
                    .flex_col()
                    .gap(px(16.))
                    .p(px(24.))
                    .child(format!("{mode}"))
                    .children(ButtonSize::ALL.into_iter().flat_map(|size| {
                        [
                            button_row(mode, size, false).into_any_element(),
                            button_row(mode, size, true).into_any_element(),
                        ]
                    }))
            }))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx: &mut App| {
        gpui_styled_button::init(cx);

        let bounds = Bounds::centered(None, size(px(1100.), px(900.)), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_window, cx| cx.new(|_cx| Catalog),
        );

        if let Err(error) = opened {
            tracing::error!(%error, "failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
