use super::pager::MonthPager;
use super::CellStyler;
use ratatui::{prelude::*, widgets::*};

static HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su ";

/// Width of the grid in columns
const MAIN_WIDTH: u16 = 28;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 3;

const ACS_HLINE: char = '─';

/// Renders the pager's current month page as a seven-column grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid<S> {
    styler: S,
}

impl<S> MonthGrid<S> {
    pub(crate) fn new(styler: S) -> MonthGrid<S> {
        MonthGrid { styler }
    }
}

impl<S: CellStyler> StatefulWidget for MonthGrid<S> {
    type State = MonthPager;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left),
                Constraint::Length(MAIN_WIDTH.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area);
        let area = chunks[1];
        let Ok(page) = state.current_page() else {
            return;
        };
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(&page.month().to_string());
        canvas.draw_header();
        for (i, week) in std::iter::zip(0u16.., page.weeks()) {
            for (j, cell) in std::iter::zip(0u16.., week) {
                canvas.draw_day(i, j, cell.show(self.styler.cell_style(cell)));
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> BufferCanvas<'a> {
        BufferCanvas { area, buf }
    }

    fn draw_title(&mut self, title: &str) {
        let width = u16::try_from(title.chars().count()).unwrap_or(u16::MAX);
        let x = MAIN_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, title, Some(Style::new().bold()));
    }

    fn draw_header(&mut self) {
        self.mvprint(1, 0, HEADER, Some(Style::new().bold()));
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, weekday_no: u16, s: Span<'_>) {
        self.mvprint(
            week_no + HEADER_LINES,
            DAY_WIDTH * weekday_no,
            s.content,
            Some(s.style),
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // grid's area, though we need to be sure that the Rect passed to
            // the Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
