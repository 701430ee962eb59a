use gpui::{App, Window, px};

use crate::theme::{DEFAULT_THEME, Theme, ThemeExt};

/// Installs the built-in theme unless the app already set one.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        tracing::debug!("no app theme set, installing the built-in theme");
        cx.set_theme(&*DEFAULT_THEME);
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(px(cx.get_theme().font_size_at(2)));
}
