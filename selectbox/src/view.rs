//! Derived render view.
//!
//! Nothing here is stored: every flag is computed from the widget's central
//! indices when the view is built, so the per-option flags cannot disagree
//! with the state.

use crate::option::SelectOption;

/// What a presentation layer needs to draw the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectView<'a, T> {
    /// Selected option's label, or the placeholder
    pub label: &'a str,
    /// Whether a selection exists (label is not the placeholder)
    pub has_selection: bool,
    /// Whether the option list is visible
    pub is_open: bool,
    /// Option list in caller order; empty while closed
    pub options: Vec<OptionView<'a, T>>,
}

/// One entry of the rendered option list.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView<'a, T> {
    /// Position in the option sequence
    pub index: usize,
    pub option: &'a SelectOption<T>,
    pub disabled: bool,
    pub hovered: bool,
    pub highlighted: bool,
    pub selected: bool,
}

impl<T> SelectView<'_, T> {
    /// The hovered entry, if any.
    pub fn hovered(&self) -> Option<&OptionView<'_, T>> {
        self.options.iter().find(|o| o.hovered)
    }

    /// The highlighted entry, if any.
    pub fn highlighted(&self) -> Option<&OptionView<'_, T>> {
        self.options.iter().find(|o| o.highlighted)
    }

    /// The selected entry, if any.
    pub fn selected(&self) -> Option<&OptionView<'_, T>> {
        self.options.iter().find(|o| o.selected)
    }
}
