//! Selectable options.

use serde::{Deserialize, Serialize};

/// A single selectable item.
///
/// `value` is the caller's payload and is what signals carry. `label` is the
/// text shown in the option list and, once selected, in the widget label.
/// `disabled` is fixed for the lifetime of the option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption<T> {
    /// Caller-supplied value.
    pub value: T,
    /// Display label.
    pub label: String,
    /// Whether this option can be hovered, highlighted or selected.
    #[serde(default)]
    pub disabled: bool,
}

impl<T> SelectOption<T> {
    /// Create an enabled option.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Set disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether this option can take part in hover, highlight and selection.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

impl SelectOption<String> {
    /// Create an option where value equals label.
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
            disabled: false,
        }
    }
}
