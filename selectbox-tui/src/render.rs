//! Draw the widget view with crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use selectbox::{OptionView, SelectView};

use crate::layout::Layout;

/// Last observed signals, shown under the widget.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Status {
    pub last_value: Option<String>,
    pub confirmed: Option<String>,
    pub commits: usize,
}

/// Redraw the whole screen.
pub fn draw(
    out: &mut impl Write,
    view: &SelectView<'_, String>,
    focused: bool,
    layout: &Layout,
    status: &Status,
) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;

    queue!(
        out,
        MoveTo(layout.left, 0),
        SetAttribute(Attribute::Bold),
        Print("selectbox"),
        SetAttribute(Attribute::Reset)
    )?;

    draw_label(out, view, focused, layout)?;
    for option in &view.options {
        draw_option(out, option, layout)?;
    }

    let status_row = layout.bottom().saturating_add(1);
    queue!(
        out,
        MoveTo(layout.left, status_row),
        Print(format!(
            "value: {}   confirmed: {}   commits: {}",
            status.last_value.as_deref().unwrap_or("-"),
            status.confirmed.as_deref().unwrap_or("-"),
            status.commits
        )),
        MoveTo(layout.left, status_row.saturating_add(1)),
        SetAttribute(Attribute::Dim),
        Print("click/space open · ↑↓ highlight · tab commit · enter/esc close · q quit"),
        SetAttribute(Attribute::Reset)
    )?;

    out.flush()
}

fn draw_label(
    out: &mut impl Write,
    view: &SelectView<'_, String>,
    focused: bool,
    layout: &Layout,
) -> io::Result<()> {
    let arrow = if view.is_open { "▲" } else { "▼" };
    let text = pad(view.label, layout.width.saturating_sub(3));

    queue!(out, MoveTo(layout.left, layout.label_row))?;
    if focused {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if !view.has_selection {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    queue!(
        out,
        Print(format!(" {} {}", text, arrow)),
        SetAttribute(Attribute::Reset)
    )
}

fn draw_option(
    out: &mut impl Write,
    option: &OptionView<'_, String>,
    layout: &Layout,
) -> io::Result<()> {
    let marker = if option.selected { "✓" } else { " " };
    let text = pad(&option.option.label, layout.width.saturating_sub(3));

    queue!(out, MoveTo(layout.left, layout.option_row(option.index)))?;
    if option.disabled {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if option.highlighted {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    if option.hovered {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        Print(format!("{} {} ", marker, text)),
        SetAttribute(Attribute::Reset)
    )
}

fn pad(text: &str, width: u16) -> String {
    format!("{:<width$}", text, width = usize::from(width))
}

#[cfg(test)]
mod tests {
    use selectbox::{Event, SelectOption, SelectWidget};

    use super::*;

    #[test]
    fn test_draw_writes_label_and_options() {
        let mut select = SelectWidget::new(vec![
            SelectOption::simple("Gin"),
            SelectOption::simple("Rum").disabled(true),
        ])
        .placeholder("Spirit");
        select.handle(Event::ClickLabel);
        let layout = Layout::for_widget(&select);

        let mut out = Vec::new();
        draw(&mut out, &select.view(), false, &layout, &Status::default()).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("Spirit"));
        assert!(text.contains("Gin"));
        assert!(text.contains("Rum"));
        assert!(text.contains("commits: 0"));
    }

    #[test]
    fn test_pad_fills_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 3), "abcdef");
    }
}
