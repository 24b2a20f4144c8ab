/// Interaction state of a single select widget.
///
/// Indices point into the widget's option sequence. `None` means "not set":
/// the pointer is over no enabled option, keyboard navigation has not picked
/// anything yet, or nothing is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Whether the option list overlay is visible.
    pub is_open: bool,
    /// Whether the widget holds input focus.
    pub is_focused: bool,
    /// Option under the pointer.
    pub hover_index: Option<usize>,
    /// Option picked by arrow-key navigation.
    pub highlight_index: Option<usize>,
    /// Committed choice.
    pub selection: Option<usize>,
}

impl WidgetState {
    /// Fresh state with an optional pre-selected index.
    pub fn new(selection: Option<usize>) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    /// Starting point for arrow navigation: highlight wins over hover.
    pub fn candidate(&self) -> Option<usize> {
        self.highlight_index.or(self.hover_index)
    }
}
