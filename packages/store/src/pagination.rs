//! Page arithmetic for the paginated lists. Pages are 1-based.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub count: u64,
    pub limit: u32,
    pub current: u32,
}

impl Pagination {
    pub fn new(count: u64, limit: u32, current: u32) -> Self {
        Self {
            count,
            limit: limit.max(1),
            current: current.max(1),
        }
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn total_pages(&self) -> u32 {
        let pages = self.count.div_ceil(u64::from(self.limit));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Whether a control is worth rendering at all.
    pub fn is_needed(&self) -> bool {
        self.total_pages() > 1
    }

    /// `page` clamped into `1..=total_pages`.
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages())
    }

    /// All page numbers, for the numbered buttons.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(0, 6, 1).total_pages(), 1);
        assert_eq!(Pagination::new(6, 6, 1).total_pages(), 1);
        assert_eq!(Pagination::new(7, 6, 1).total_pages(), 2);
        assert_eq!(Pagination::new(13, 6, 1).total_pages(), 3);
    }

    #[test]
    fn test_neighbours() {
        let first = Pagination::new(13, 6, 1);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Pagination::new(13, 6, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_clamp_and_zero_inputs() {
        let p = Pagination::new(13, 0, 0);
        assert_eq!(p.limit, 1);
        assert_eq!(p.current, 1);
        assert_eq!(Pagination::new(13, 6, 1).clamp(9), 3);
        assert_eq!(Pagination::new(13, 6, 1).clamp(0), 1);
        assert!(!Pagination::new(5, 6, 1).is_needed());
    }
}
