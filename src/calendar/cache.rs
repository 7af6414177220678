use super::page::{MonthPage, YearMonth};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// A bounded store of computed month pages, dropping the least recently used
/// page once full.
// Invariant: pages.len() <= capacity, most recently used at the back.  A
// linear scan suffices at the capacities the pager uses.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct PageCache {
    pages: VecDeque<MonthPage>,
    capacity: NonZeroUsize,
}

impl PageCache {
    pub(super) fn new(capacity: NonZeroUsize) -> PageCache {
        PageCache {
            pages: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Looks up the page for `month`, promoting it to most recently used.
    /// The stored page is returned as-is, never recomputed.
    pub(super) fn get(&mut self, month: YearMonth) -> Option<&MonthPage> {
        let i = self.pages.iter().position(|p| p.month() == month)?;
        let page = self.pages.remove(i)?;
        self.pages.push_back(page);
        self.pages.back()
    }

    /// Stores a freshly built page, evicting the least recently used page if
    /// the cache is full.
    pub(super) fn insert(&mut self, page: MonthPage) {
        if self.pages.len() >= self.capacity.get() {
            self.pages.pop_front();
        }
        self.pages.push_back(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;

    fn page(year: i32, month: Month) -> MonthPage {
        MonthPage::build(YearMonth { year, month }, date!(2024 - 01 - 01))
            .expect("page should build")
    }

    fn cache(capacity: usize) -> PageCache {
        PageCache::new(NonZeroUsize::new(capacity).expect("capacity should be nonzero"))
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = cache(4);
        let feb = YearMonth {
            year: 2024,
            month: Month::February,
        };
        assert_eq!(cache.get(feb), None);
        let built = page(2024, Month::February);
        cache.insert(built.clone());
        assert_eq!(cache.get(feb), Some(&built));
        assert_eq!(cache.get(feb), Some(&built));
    }

    #[test]
    fn test_full_cache_evicts_the_oldest() {
        let mut cache = cache(2);
        cache.insert(page(2024, Month::January));
        cache.insert(page(2024, Month::February));
        cache.insert(page(2024, Month::March));
        assert!(cache
            .get(YearMonth {
                year: 2024,
                month: Month::January
            })
            .is_none());
        assert!(cache
            .get(YearMonth {
                year: 2024,
                month: Month::February
            })
            .is_some());
        assert!(cache
            .get(YearMonth {
                year: 2024,
                month: Month::March
            })
            .is_some());
    }

    #[test]
    fn test_lookup_protects_against_eviction() {
        let mut cache = cache(2);
        cache.insert(page(2024, Month::January));
        cache.insert(page(2024, Month::February));
        // touch January so February becomes the eviction candidate
        assert!(cache
            .get(YearMonth {
                year: 2024,
                month: Month::January
            })
            .is_some());
        cache.insert(page(2024, Month::March));
        assert!(cache
            .get(YearMonth {
                year: 2024,
                month: Month::January
            })
            .is_some());
        assert!(cache
            .get(YearMonth {
                year: 2024,
                month: Month::February
            })
            .is_none());
    }
}
