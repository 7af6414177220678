use crate::calendar::{CellStyler, DayCell};
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const OVERFLOW_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

/// Lights up today and dims the overflow days around the month.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Shade;

impl CellStyler for Shade {
    fn cell_style(&self, cell: &DayCell) -> Style {
        if cell.is_today {
            TODAY_STYLE
        } else if cell.is_overflow() {
            OVERFLOW_STYLE
        } else {
            Style::new()
        }
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
