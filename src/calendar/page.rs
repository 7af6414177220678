use ratatui::{style::Style, text::Span};
use std::fmt;
use std::iter::successors;
use time::{Date, Month};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// A calendar month in a specific year; the identity a page is keyed by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct YearMonth {
    pub(crate) year: i32,
    pub(crate) month: Month,
}

impl YearMonth {
    pub(crate) fn of(date: Date) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month `months` whole months away, negative values moving into the
    /// past.  `None` if the resulting year overflows.
    pub(crate) fn offset_by(self, months: i32) -> Option<YearMonth> {
        let total = self.index() + i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month0 = u8::try_from(total.rem_euclid(12)).ok()?;
        let month = Month::try_from(month0 + 1).ok()?;
        Some(YearMonth { year, month })
    }

    /// Signed number of whole months from `origin` to `self`.
    pub(crate) fn months_from(self, origin: YearMonth) -> i32 {
        i32::try_from(self.index() - origin.index())
            .expect("month distance between real dates should fit in an i32")
    }

    // Months since the start of year 0
    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(u8::from(self.month)) - 1
    }

    pub(crate) fn length(self) -> u8 {
        time::util::days_in_month(self.month, self.year)
    }

    fn first_day(self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    fn last_day(self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, self.length()).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Shifts a date by whole months.  A day-of-month past the end of the target
/// month is clamped to the month's last day, never rolled over.
pub(super) fn shift_months(date: Date, months: i32) -> Option<Date> {
    let ym = YearMonth::of(date).offset_by(months)?;
    let day = date.day().min(ym.length());
    Date::from_calendar_date(ym.year, ym.month, day).ok()
}

/// Which month a cell's date belongs to, relative to the page's month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DayKind {
    PreviousOverflow,
    InMonth,
    NextOverflow,
}

/// One cell of a month grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) date: Date,
    pub(crate) kind: DayKind,
    pub(crate) is_today: bool,
}

impl DayCell {
    fn new(date: Date, kind: DayKind, today: Date) -> DayCell {
        DayCell {
            date,
            kind,
            is_today: date == today,
        }
    }

    pub(crate) fn day(&self) -> u8 {
        self.date.day()
    }

    pub(crate) fn is_overflow(&self) -> bool {
        self.kind != DayKind::InMonth
    }

    pub(crate) fn show(&self, style: Style) -> Span<'static> {
        let s = if self.is_today {
            format!("[{:2}]", self.day())
        } else {
            format!(" {:2} ", self.day())
        };
        Span::styled(s, style)
    }
}

/// Every day of a month plus the overflow days needed to complete its first
/// and last Monday-to-Sunday weeks, in chronological order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthPage {
    month: YearMonth,
    days: Vec<DayCell>,
}

impl MonthPage {
    /// Assembles the page for `month`, marking the cell matching `today`.
    /// Returns `None` when the page's days (overflow included) do not all
    /// fit in `Date`'s representable range.
    pub(super) fn build(month: YearMonth, today: Date) -> Option<MonthPage> {
        let first = month.first_day()?;
        let last = month.last_day()?;
        let leading = usize::from(first.weekday().number_days_from_monday());
        let trailing = usize::from(6 - last.weekday().number_days_from_monday());
        let length = usize::from(month.length());
        let mut days = Vec::with_capacity(leading + length + trailing);
        let mut before = iter_days_before(first)
            .take(leading)
            .map(|d| DayCell::new(d, DayKind::PreviousOverflow, today))
            .collect::<Vec<_>>();
        if before.len() != leading {
            return None;
        }
        before.reverse();
        days.extend(before);
        days.extend(
            successors(Some(first), |&d| d.next_day())
                .take(length)
                .map(|d| DayCell::new(d, DayKind::InMonth, today)),
        );
        days.extend(
            iter_days_after(last)
                .take(trailing)
                .map(|d| DayCell::new(d, DayKind::NextOverflow, today)),
        );
        (days.len() == leading + length + trailing).then(|| MonthPage { month, days })
    }

    pub(crate) fn month(&self) -> YearMonth {
        self.month
    }

    pub(crate) fn days(&self) -> &[DayCell] {
        &self.days
    }

    /// The page's cells one Monday-to-Sunday week at a time.
    pub(crate) fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.days.chunks(DAYS_IN_WEEK)
    }
}

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}
