use thiserror::Error;

use crate::style::ButtonVariant;

#[derive(Debug, Error)]
pub enum ButtonError {
    #[error("unknown button variant \"{0}\"")]
    UnknownVariant(String),

    #[error("the theme palette has no \"{0}\" color")]
    MissingVariantColor(ButtonVariant),
}
