//! Input events understood by the select widget.

/// An interaction event targeted at one select widget.
///
/// Option indices refer to positions in the widget's option sequence. An
/// index from a stale event (out of range, or pointing at a disabled option)
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Click on the label showing the current selection or placeholder
    ClickLabel,
    /// Click on an option in the open list
    ClickOption(usize),
    /// Pointer moved over an option
    Mouseover(usize),
    /// Widget gained input focus
    Focus,
    /// Widget lost input focus
    Blur,
    /// Key press while the widget receives keyboard input
    Key(Key),
}

/// Keys with a meaning for the select widget.
///
/// Anything else arrives as `Char` or `Other` and is ignored by the widget,
/// which lets the host route it elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    Tab,
    Enter,
    Up,
    Down,
    Char(char),
    Other,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, the host may route it elsewhere.
    Ignored,
    /// Event changed the widget or was handled by it.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Enter => Key::Enter,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Other,
        }
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Event::Key(key)
    }
}
