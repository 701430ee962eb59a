pub mod components;

pub mod style;

pub use gpui_button_theme as theme;

mod utils;
pub use utils::{ElementIdExt, RgbaExt};

mod error;
pub use error::*;

mod init;
pub use init::*;
