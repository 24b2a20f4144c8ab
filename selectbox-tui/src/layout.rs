//! Screen geometry and hit testing for the single select widget.

use selectbox::SelectWidget;

const LEFT: u16 = 2;
const LABEL_ROW: u16 = 2;
const MIN_WIDTH: u16 = 16;
/// Room for the open/closed arrow and padding.
const CHROME: u16 = 4;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Label,
    Option(usize),
    Outside,
}

/// Where the label and option rows sit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub left: u16,
    pub label_row: u16,
    pub width: u16,
    /// Number of option rows drawn (0 while closed)
    pub visible_options: usize,
}

impl Layout {
    /// Compute the layout for the widget's current view.
    pub fn for_widget<T>(select: &SelectWidget<T>) -> Self
    where
        T: Clone + PartialEq,
    {
        let widest = select
            .options()
            .iter()
            .map(|o| o.label.chars().count())
            .chain(std::iter::once(select.placeholder_text().chars().count()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(widest)
            .unwrap_or(u16::MAX - CHROME)
            .saturating_add(CHROME)
            .max(MIN_WIDTH);

        Self {
            left: LEFT,
            label_row: LABEL_ROW,
            width,
            visible_options: if select.is_open() {
                select.options().len()
            } else {
                0
            },
        }
    }

    /// Screen row of the option at `index`.
    pub fn option_row(&self, index: usize) -> u16 {
        let offset = u16::try_from(index).unwrap_or(u16::MAX);
        self.label_row.saturating_add(1).saturating_add(offset)
    }

    /// First row below the option list.
    pub fn bottom(&self) -> u16 {
        self.option_row(self.visible_options)
    }

    pub fn hit(&self, x: u16, y: u16) -> Hit {
        if x < self.left || x >= self.left.saturating_add(self.width) {
            return Hit::Outside;
        }
        if y == self.label_row {
            return Hit::Label;
        }
        if y > self.label_row {
            let index = usize::from(y - self.label_row - 1);
            if index < self.visible_options {
                return Hit::Option(index);
            }
        }
        Hit::Outside
    }
}
