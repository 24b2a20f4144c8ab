//! The select widget state machine.

use log::{debug, trace};

use crate::config::SelectConfig;
use crate::event::{Event, EventResult, Key};
use crate::option::SelectOption;
use crate::signal::{SignalQueue, SignalReceiver};
use crate::state::WidgetState;
use crate::view::{OptionView, SelectView};

/// Direction of arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Prev,
}

/// A dropdown select widget.
///
/// Owns the option sequence and one `WidgetState`. All mutation goes through
/// [`SelectWidget::handle`] or the explicit setters; committed selections are
/// reported to subscribers as [`Signal`](crate::Signal)s after the event is
/// applied.
///
/// # Example
///
/// ```
/// use selectbox::{Event, Key, SelectOption, SelectWidget, Signal};
///
/// let mut select = SelectWidget::new(vec![
///     SelectOption::simple("Alabama"),
///     SelectOption::simple("Alaska"),
/// ])
/// .placeholder("Pick a state");
/// let mut signals = select.subscribe();
///
/// select.handle(Event::Focus);
/// select.handle(Event::Key(Key::Space));
/// select.handle(Event::Key(Key::Down));
/// select.handle(Event::Key(Key::Tab));
///
/// assert_eq!(select.label(), "Alabama");
/// assert_eq!(
///     signals.try_recv(),
///     Some(Signal::ValueChanged("Alabama".to_string()))
/// );
/// ```
#[derive(Debug)]
pub struct SelectWidget<T> {
    options: Vec<SelectOption<T>>,
    placeholder: String,
    state: WidgetState,
    signals: SignalQueue<T>,
}

impl<T: Clone + PartialEq> Default for SelectWidget<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone + PartialEq> SelectWidget<T> {
    /// Create a closed, unfocused widget with no selection.
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        Self {
            options,
            placeholder: String::new(),
            state: WidgetState::default(),
            signals: SignalQueue::default(),
        }
    }

    /// Set the placeholder shown while nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Pre-select the first enabled option equal to `value`.
    ///
    /// A value matching no enabled option leaves the selection empty.
    pub fn value(mut self, value: &T) -> Self {
        self.state.selection = self.position_of(value);
        self
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Current interaction state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.state.hover_index
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.state.highlight_index
    }

    /// The committed option, if any.
    pub fn selection(&self) -> Option<&SelectOption<T>> {
        self.state.selection.and_then(|i| self.options.get(i))
    }

    /// The committed value, if any.
    pub fn selected_value(&self) -> Option<&T> {
        self.selection().map(|o| &o.value)
    }

    /// Label text: the selected option's label, or the placeholder.
    pub fn label(&self) -> &str {
        self.selection()
            .map(|o| o.label.as_str())
            .unwrap_or(self.placeholder.as_str())
    }

    /// Build the render view from the current state.
    pub fn view(&self) -> SelectView<'_, T> {
        let options = if self.state.is_open {
            self.options
                .iter()
                .enumerate()
                .map(|(index, option)| OptionView {
                    index,
                    option,
                    disabled: option.disabled,
                    hovered: self.state.hover_index == Some(index),
                    highlighted: self.state.highlight_index == Some(index),
                    selected: self.state.selection == Some(index),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectView {
            label: self.label(),
            has_selection: self.selection().is_some(),
            is_open: self.state.is_open,
            options,
        }
    }

    // -------------------------------------------------------------------------
    // Caller-side updates (no signals)
    // -------------------------------------------------------------------------

    /// Register an observer for committed selection changes.
    pub fn subscribe(&mut self) -> SignalReceiver<T> {
        self.signals.subscribe()
    }

    /// Replace the option sequence.
    ///
    /// The selection survives if an equal, enabled value is still present.
    /// Hover and highlight refer to the old sequence and are cleared.
    pub fn set_options(&mut self, options: Vec<SelectOption<T>>) {
        let previous = self.selected_value().cloned();
        self.options = options;
        self.state.selection = previous.as_ref().and_then(|v| self.position_of(v));
        self.state.hover_index = None;
        self.state.highlight_index = None;
        debug!(
            "SelectWidget::set_options count={} selection={:?}",
            self.options.len(),
            self.state.selection
        );
    }

    /// Set the selection from the caller side, e.g. a bound value.
    pub fn set_value(&mut self, value: Option<&T>) {
        self.state.selection = value.and_then(|v| self.position_of(v));
        debug!("SelectWidget::set_value selection={:?}", self.state.selection);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    // -------------------------------------------------------------------------
    // Event dispatch
    // -------------------------------------------------------------------------

    /// Apply one input event, then deliver any signals it produced.
    pub fn handle(&mut self, event: Event) -> EventResult {
        let result = self.dispatch(event);
        trace!(
            "SelectWidget::handle event={:?} result={:?} state={:?}",
            event, result, self.state
        );
        self.signals.flush();
        result
    }

    fn dispatch(&mut self, event: Event) -> EventResult {
        match event {
            Event::ClickLabel => {
                self.state.is_open = !self.state.is_open;
                debug!("SelectWidget toggled open={}", self.state.is_open);
                EventResult::Consumed
            }
            Event::ClickOption(index) => {
                if !self.state.is_open || !self.is_enabled(index) {
                    return EventResult::Ignored;
                }
                self.commit(index);
                self.close();
                EventResult::Consumed
            }
            Event::Mouseover(index) => {
                if !self.is_enabled(index) {
                    return EventResult::Ignored;
                }
                self.state.hover_index = Some(index);
                EventResult::Consumed
            }
            Event::Focus => {
                self.state.is_focused = true;
                EventResult::Consumed
            }
            Event::Blur => {
                self.state.is_focused = false;
                self.close();
                EventResult::Consumed
            }
            Event::Key(key) => self.on_key(key),
        }
    }

    fn on_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Space if self.state.is_focused && !self.state.is_open => {
                self.state.is_open = true;
                debug!("SelectWidget opened by keyboard");
                EventResult::Consumed
            }
            Key::Escape | Key::Enter if self.state.is_open => {
                self.close();
                EventResult::Consumed
            }
            Key::Tab if self.state.is_open => {
                // Keyboard choice first, then pointer, else unchanged.
                let target = self
                    .state
                    .candidate()
                    .filter(|&i| self.is_enabled(i) && self.state.selection != Some(i));
                if let Some(index) = target {
                    self.commit(index);
                }
                self.close();
                EventResult::Consumed
            }
            Key::Down => self.navigate(Step::Next),
            Key::Up => self.navigate(Step::Prev),
            _ => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn close(&mut self) {
        if self.state.is_open {
            self.state.is_open = false;
            debug!("SelectWidget closed");
        }
    }

    fn commit(&mut self, index: usize) {
        let Some(option) = self.options.get(index) else {
            return;
        };
        self.state.selection = Some(index);
        debug!("SelectWidget committed index={} label={}", index, option.label);
        self.signals.push_commit(option.value.clone());
    }

    fn navigate(&mut self, step: Step) -> EventResult {
        let Some(index) = self.resolve_step(step) else {
            return EventResult::Ignored;
        };
        self.state.highlight_index = Some(index);
        trace!("SelectWidget highlight={} step={:?}", index, step);
        EventResult::Consumed
    }

    /// Next/previous enabled option from the candidate, stopping at the
    /// boundary. Without a candidate: first enabled going down, last going up.
    /// A hover-only candidate is a starting point, not a target: Down from a
    /// hovered option highlights the enabled option after it.
    fn resolve_step(&self, step: Step) -> Option<usize> {
        let candidate = self
            .state
            .candidate()
            .filter(|&i| i < self.options.len());

        let Some(current) = candidate else {
            return match step {
                Step::Next => (0..self.options.len()).find(|&i| self.is_enabled(i)),
                Step::Prev => (0..self.options.len()).rev().find(|&i| self.is_enabled(i)),
            };
        };

        let found = match step {
            Step::Next => (current + 1..self.options.len()).find(|&i| self.is_enabled(i)),
            Step::Prev => (0..current).rev().find(|&i| self.is_enabled(i)),
        };
        found.or_else(|| self.is_enabled(current).then_some(current))
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(SelectOption::is_enabled)
    }

    fn position_of(&self, value: &T) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.is_enabled() && o.value == *value)
    }
}

impl SelectWidget<String> {
    /// Build a widget from a loaded configuration.
    pub fn from_config(config: SelectConfig) -> Self {
        let SelectConfig {
            options,
            placeholder,
            value,
        } = config;

        let widget = Self::new(options).placeholder(placeholder.unwrap_or_default());
        match value {
            Some(value) => widget.value(&value),
            None => widget,
        }
    }
}
