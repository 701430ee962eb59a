//! A window of styled buttons with a light/dark toggle.
//!
//! Pass a path to a partial theme JSON file to draw the buttons with it:
//!
//! ```sh
//! cargo run --example app -- my-theme.json
//! ```

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, Window, WindowBounds, WindowOptions, div,
    prelude::*, px, size,
};

use gpui_styled_button::{
    components::{ButtonElementKind, StyledButton},
    style::{ButtonSize, ButtonVariant},
    theme::{Theme, ThemeExt, ThemeMode, ThemeOverride},
};

struct Demo {
    mode: ThemeMode,
    clicks: usize,
}

impl Render for Demo {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_styled_button::init_for_window(window, cx);

        let colors = cx.get_theme().colors.for_mode(self.mode).clone();
        let mode = self.mode;

        div()
            .size_full()
            .bg(colors.background)
            .text_color(colors.text)
            .flex()
            .flex_col()
            .justify_center()
            .items_center()
            .gap(px(24.))
            .child(format!("{mode} mode, {} clicks", self.clicks))
            .child(
                div()
                    .flex()
                    .gap(px(12.))
                    .items_center()
                    .child(
                        StyledButton::new("count")
                            .mode(mode)
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.clicks += 1;
                                cx.notify();
                            }))
                            .child("Count"),
                    )
                    .child(
                        StyledButton::new("reset")
                            .mode(mode)
                            .variant(ButtonVariant::Gray)
                            .size(ButtonSize::Medium)
                            .disabled(self.clicks == 0)
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.clicks = 0;
                                cx.notify();
                            }))
                            .child("Reset"),
                    )
                    .child(
                        StyledButton::new("toggle-mode")
                            .mode(mode)
                            .variant(ButtonVariant::Accent)
                            .size(ButtonSize::Small)
                            .element_kind(ButtonElementKind::Link)
                            .tooltip("Switch the palette")
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.mode = view.mode.toggled();
                                tracing::info!(mode = %view.mode, "switched mode");
                                cx.notify();
                            }))
                            .child(format!("Use {} mode", mode.toggled())),
                    ),
            )
    }
}

fn load_theme() -> anyhow::Result<Theme> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(Theme::default());
    };

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read theme file {path}"))?;
    let overrides = ThemeOverride::from_json(json)
        .with_context(|| format!("failed to parse theme file {path}"))?;

    tracing::info!(%path, "loaded theme overrides");

    Ok(Theme::resolve(Some(&overrides)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let theme = load_theme()?;

    Application::new().run(move |cx: &mut App| {
        cx.set_theme(&theme);
        gpui_styled_button::init(cx);

        let bounds = Bounds::centered(None, size(px(620.), px(400.)), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_window, cx| {
                cx.new(|_cx| Demo {
                    mode: ThemeMode::default(),
                    clicks: 0,
                })
            },
        );

        if let Err(error) = opened {
            tracing::error!(%error, "failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
