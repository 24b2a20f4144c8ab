//! Tests for arrow-key highlight navigation.

use selectbox::{Event, EventResult, Key, SelectOption, SelectWidget};

fn abc_with_disabled_b() -> SelectWidget<char> {
    SelectWidget::new(vec![
        SelectOption::new('a', "A"),
        SelectOption::new('b', "B").disabled(true),
        SelectOption::new('c', "C"),
    ])
}

fn press(select: &mut SelectWidget<char>, key: Key) -> EventResult {
    select.handle(Event::Key(key))
}

// ============================================================================
// Without a candidate
// ============================================================================

#[test]
fn test_down_without_candidate_highlights_first_enabled() {
    let mut select = SelectWidget::new(vec![
        SelectOption::new('x', "X").disabled(true),
        SelectOption::new('y', "Y"),
        SelectOption::new('z', "Z"),
    ]);
    press(&mut select, Key::Down);
    assert_eq!(select.highlight_index(), Some(1));
}

#[test]
fn test_up_without_candidate_highlights_last_enabled() {
    let mut select = SelectWidget::new(vec![
        SelectOption::new('x', "X"),
        SelectOption::new('y', "Y"),
        SelectOption::new('z', "Z").disabled(true),
    ]);
    press(&mut select, Key::Up);
    assert_eq!(select.highlight_index(), Some(1));
}

#[test]
fn test_no_enabled_options_leaves_highlight_unset() {
    let mut select = SelectWidget::new(vec![
        SelectOption::new('x', "X").disabled(true),
        SelectOption::new('y', "Y").disabled(true),
    ]);
    select.handle(Event::ClickLabel);

    assert_eq!(press(&mut select, Key::Down), EventResult::Ignored);
    assert_eq!(press(&mut select, Key::Up), EventResult::Ignored);
    assert_eq!(select.highlight_index(), None);
    assert!(select.view().highlighted().is_none());
}

// ============================================================================
// Stepping
// ============================================================================

#[test]
fn test_arrows_skip_disabled_options() {
    let mut select = abc_with_disabled_b();
    select.handle(Event::ClickLabel);

    press(&mut select, Key::Down);
    assert_eq!(select.highlight_index(), Some(0));
    press(&mut select, Key::Down);
    assert_eq!(select.highlight_index(), Some(2));
    press(&mut select, Key::Up);
    assert_eq!(select.highlight_index(), Some(0));
}

#[test]
fn test_down_stops_at_last_enabled() {
    let mut select = abc_with_disabled_b();
    press(&mut select, Key::Down);
    press(&mut select, Key::Down);
    press(&mut select, Key::Down);
    assert_eq!(select.highlight_index(), Some(2));
}

#[test]
fn test_up_stops_at_first_enabled() {
    let mut select = abc_with_disabled_b();
    press(&mut select, Key::Down);
    press(&mut select, Key::Up);
    press(&mut select, Key::Up);
    assert_eq!(select.highlight_index(), Some(0));
}

#[test]
fn test_moves_past_middle_and_back() {
    let options: Vec<_> = (0..10u8)
        .map(|i| SelectOption::new(i, format!("opt{i}")).disabled(i % 3 == 0))
        .collect();
    let mut select = SelectWidget::new(options);
    select.handle(Event::ClickLabel);
    select.handle(Event::Mouseover(5));
    press_u8(&mut select, Key::Down);
    let after_down = select.highlight_index().unwrap();
    assert!(after_down > 5);

    press_u8(&mut select, Key::Up);
    press_u8(&mut select, Key::Up);
    assert!(select.highlight_index().unwrap() < 5);
}

fn press_u8(select: &mut SelectWidget<u8>, key: Key) {
    select.handle(Event::Key(key));
}

// ============================================================================
// Candidate resolution
// ============================================================================

#[test]
fn test_hover_is_candidate_without_highlight() {
    let mut select = SelectWidget::new(vec![
        SelectOption::new('a', "A"),
        SelectOption::new('b', "B"),
        SelectOption::new('c', "C"),
    ]);
    select.handle(Event::ClickLabel);
    select.handle(Event::Mouseover(1));

    press(&mut select, Key::Down);
    assert_eq!(select.highlight_index(), Some(2));
    assert_eq!(select.hover_index(), Some(1));
}

#[test]
fn test_highlight_wins_over_later_hover() {
    let mut select = SelectWidget::new(vec![
        SelectOption::new('a', "A"),
        SelectOption::new('b', "B"),
        SelectOption::new('c', "C"),
        SelectOption::new('d', "D"),
    ]);
    press(&mut select, Key::Down);
    select.handle(Event::Mouseover(3));

    press(&mut select, Key::Down);
    assert_eq!(select.highlight_index(), Some(1));
}

#[test]
fn test_single_highlighted_option_in_view() {
    let mut select = abc_with_disabled_b();
    select.handle(Event::ClickLabel);
    press(&mut select, Key::Down);
    press(&mut select, Key::Down);

    let view = select.view();
    assert_eq!(view.options.iter().filter(|o| o.highlighted).count(), 1);
    assert!(!view.options[1].highlighted);
    assert!(view.options[2].highlighted);
}

#[test]
fn test_arrows_work_while_closed() {
    let mut select = abc_with_disabled_b();
    assert_eq!(press(&mut select, Key::Down), EventResult::Consumed);
    assert_eq!(select.highlight_index(), Some(0));
    assert!(select.view().options.is_empty());
}

#[test]
fn test_disabled_never_reached_by_any_sequence() {
    let mut select = abc_with_disabled_b();
    let events = [
        Event::ClickLabel,
        Event::Mouseover(1),
        Event::Key(Key::Down),
        Event::Mouseover(0),
        Event::Key(Key::Down),
        Event::Key(Key::Up),
        Event::ClickOption(1),
        Event::Key(Key::Tab),
        Event::ClickLabel,
        Event::Mouseover(2),
        Event::Key(Key::Up),
        Event::Key(Key::Tab),
    ];

    for event in events {
        select.handle(event);
        let state = *select.state();
        assert_ne!(state.hover_index, Some(1));
        assert_ne!(state.highlight_index, Some(1));
        assert_ne!(state.selection, Some(1));
    }
    assert_eq!(select.selected_value(), Some(&'a'));
}
