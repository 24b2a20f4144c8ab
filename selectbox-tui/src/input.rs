//! Convert crossterm events to select widget events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;

use selectbox::{Event, Key};

use crate::layout::{Hit, Layout};

/// What the event loop should do with a terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Feed these events to the widget, in order
    Dispatch(Vec<Event>),
    /// Redraw without touching the widget
    Redraw,
    Quit,
    None,
}

/// Map a terminal event onto widget events.
///
/// `focused` is the widget's current focus, so a click on the label can
/// focus the widget first and a click elsewhere can blur it.
pub fn translate(event: &CrosstermEvent, layout: &Layout, focused: bool) -> Action {
    let action = match event {
        CrosstermEvent::Key(key) => translate_key(key),
        CrosstermEvent::Mouse(mouse) => translate_mouse(mouse, layout, focused),
        CrosstermEvent::FocusGained => Action::Dispatch(vec![Event::Focus]),
        CrosstermEvent::FocusLost => Action::Dispatch(vec![Event::Blur]),
        CrosstermEvent::Resize(_, _) => Action::Redraw,
        _ => Action::None,
    };
    trace!("translate {:?} -> {:?}", event, action);
    action
}

fn translate_key(key: &KeyEvent) -> Action {
    // Only presses; some terminals also report release/repeat
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        _ if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Action::None,
        code => match Key::from(code) {
            Key::Char(_) | Key::Other => Action::None,
            key => Action::Dispatch(vec![Event::Key(key)]),
        },
    }
}

fn translate_mouse(mouse: &MouseEvent, layout: &Layout, focused: bool) -> Action {
    let hit = layout.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Hit::Label if focused => Action::Dispatch(vec![Event::ClickLabel]),
            Hit::Label => Action::Dispatch(vec![Event::Focus, Event::ClickLabel]),
            Hit::Option(index) => Action::Dispatch(vec![Event::ClickOption(index)]),
            Hit::Outside if focused => Action::Dispatch(vec![Event::Blur]),
            Hit::Outside => Action::None,
        },
        MouseEventKind::Moved => match hit {
            Hit::Option(index) => Action::Dispatch(vec![Event::Mouseover(index)]),
            _ => Action::None,
        },
        _ => Action::None,
    }
}
