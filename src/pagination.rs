use crate::names::QUESTIONS_PER_PAGE;

/// A 1-based page index into an ordered listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Values below 1 are coerced to the first page.
    pub fn new(page: i64) -> Self {
        usize::try_from(page)
            .ok()
            .filter(|&p| p >= 1)
            .map_or(Self::FIRST, Page)
    }

    /// Parses a raw `page` query value. Missing or non-integer values give the
    /// first page.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .map_or(Self::FIRST, Self::new)
    }

    pub fn number(self) -> usize {
        self.0
    }

    /// Returns the items in `[(page - 1) * size, page * size)`, or nothing when the
    /// page lies past the end.
    pub fn slice<T>(self, mut items: Vec<T>) -> Vec<T> {
        let start = (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE);
        if start >= items.len() {
            return Vec::new();
        }
        let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
        items.truncate(end);
        items.drain(..start);
        items
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_holds_first_ten() {
        assert_eq!(Page::FIRST.slice(numbers(25)), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn every_page_matches_its_window() {
        let items = numbers(37);
        for p in 1..=6 {
            let start = ((p - 1) * QUESTIONS_PER_PAGE).min(items.len());
            let end = (p * QUESTIONS_PER_PAGE).min(items.len());
            assert_eq!(
                Page::new(p as i64).slice(items.clone()),
                items[start..end].to_vec(),
                "page {p}"
            );
        }
    }

    #[test]
    fn last_partial_page() {
        assert_eq!(Page::new(3).slice(numbers(25)), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        assert!(Page::new(4).slice(numbers(30)).is_empty());
        assert!(Page::FIRST.slice(Vec::<usize>::new()).is_empty());
        assert!(Page::new(i64::MAX).slice(numbers(30)).is_empty());
    }

    #[test]
    fn non_positive_pages_are_coerced_to_first() {
        assert_eq!(Page::new(0), Page::FIRST);
        assert_eq!(Page::new(-3), Page::FIRST);
    }

    #[test]
    fn from_param_coerces_garbage() {
        assert_eq!(Page::from_param(None), Page::FIRST);
        assert_eq!(Page::from_param(Some("abc")), Page::FIRST);
        assert_eq!(Page::from_param(Some("1.5")), Page::FIRST);
        assert_eq!(Page::from_param(Some("-2")), Page::FIRST);
        assert_eq!(Page::from_param(Some("3")).number(), 3);
    }
}
