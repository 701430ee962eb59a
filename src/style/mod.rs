//! Style composition for [`StyledButton`](crate::components::StyledButton).
//!
//! A button's look is an ordered list of [`StyleFragment`]s computed from the
//! theme and the button's flags. Each fragment carries resting declarations
//! plus hover, focus and active declarations; later fragments override
//! earlier ones.

mod kinds;
pub use kinds::*;

mod fragment;
pub use fragment::*;

mod compose;
pub use compose::*;
