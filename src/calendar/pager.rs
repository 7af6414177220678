use super::cache::PageCache;
use super::page::{shift_months, MonthPage, YearMonth};
use std::num::NonZeroUsize;
use thiserror::Error;
use time::Date;

/// How many month pages are remembered before the least recently used one is
/// dropped.  Hosts only ever look at a narrow window of months at a time.
const CACHE_MONTHS: usize = 24;

/// Serves month pages by signed month offset from a fixed start date.
///
/// `today` is supplied by the caller, so every page is a pure function of
/// the pager's configuration and the requested offset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthPager {
    today: Date,
    start_date: Date,
    offset: i32,
    cache: PageCache,
}

impl MonthPager {
    pub(crate) fn new(today: Date) -> MonthPager {
        MonthPager {
            today,
            start_date: today,
            offset: 0,
            cache: PageCache::new(
                NonZeroUsize::new(CACHE_MONTHS).expect("cache capacity should be nonzero"),
            ),
        }
    }

    /// Replaces the date whose month sits at offset 0.
    pub(crate) fn start_date(mut self, date: Date) -> MonthPager {
        self.start_date = date;
        self
    }

    /// The page `offset` whole months from the start date's month, out of
    /// the cache when that month has been computed before.
    pub(crate) fn page(&mut self, offset: i32) -> Result<&MonthPage, OutOfTimeError> {
        let month = self.target_month(offset)?;
        if self.cache.get(month).is_none() {
            let page = MonthPage::build(month, self.today).ok_or(OutOfTimeError)?;
            self.cache.insert(page);
        }
        self.cache.get(month).ok_or(OutOfTimeError)
    }

    /// The page currently paged to.
    pub(crate) fn current_page(&mut self) -> Result<&MonthPage, OutOfTimeError> {
        self.page(self.offset)
    }

    fn target_month(&self, offset: i32) -> Result<YearMonth, OutOfTimeError> {
        // Shift the start date itself (day clamped to wherever it lands) and
        // take the month it falls in.
        let date = shift_months(self.start_date, offset).ok_or(OutOfTimeError)?;
        Ok(YearMonth::of(date))
    }

    pub(crate) fn one_month_forwards(&mut self) -> Result<(), OutOfTimeError> {
        self.page_to(self.offset.checked_add(1).ok_or(OutOfTimeError)?)
    }

    pub(crate) fn one_month_backwards(&mut self) -> Result<(), OutOfTimeError> {
        self.page_to(self.offset.checked_sub(1).ok_or(OutOfTimeError)?)
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.offset = YearMonth::of(self.today).months_from(YearMonth::of(self.start_date));
    }

    /// Pages to the given month.
    pub(crate) fn jump_to_month(&mut self, month: YearMonth) -> Result<(), OutOfTimeError> {
        self.page_to(month.months_from(YearMonth::of(self.start_date)))
    }

    // Commits the position only if the target page is representable
    fn page_to(&mut self, offset: i32) -> Result<(), OutOfTimeError> {
        self.page(offset)?;
        self.offset = offset;
        Ok(())
    }
}

/// A page lies partly or wholly outside the range of representable dates.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
