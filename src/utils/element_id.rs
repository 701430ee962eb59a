use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, used to key per-element state.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// The id as plain text, for lookups in tests.
    fn to_test_id(&self) -> SharedString;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }

    fn to_test_id(&self) -> SharedString {
        match self {
            ElementId::Name(name) => name.clone(),
            other => other.to_string().into(),
        }
    }
}
