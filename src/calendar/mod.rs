mod cache;
mod page;
mod pager;
mod widget;
pub(crate) use self::page::{DayCell, YearMonth};
pub(crate) use self::pager::MonthPager;
pub(crate) use self::widget::MonthGrid;
use ratatui::style::Style;

/// Chooses how a grid cell is drawn.  Hosts implement this to theme the
/// calendar without touching the page computation.
pub(crate) trait CellStyler {
    fn cell_style(&self, cell: &DayCell) -> Style;
}

impl<T: CellStyler + ?Sized> CellStyler for &T {
    fn cell_style(&self, cell: &DayCell) -> Style {
        (**self).cell_style(cell)
    }
}
