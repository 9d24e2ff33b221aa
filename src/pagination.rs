//! Pagination State
//!
//! Page bounds and the per-view fetch state machine.

use std::ops::RangeInclusive;

/// Current page and page count (both 1-based, total ≥ 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub total: u32,
}

impl PageState {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current: current.max(1),
            total: total.max(1),
        }
    }

    /// Clamp a navigation target into `1..=total`
    pub fn clamp(&self, target: u32) -> u32 {
        target.clamp(1, self.total)
    }

    pub fn can_prev(&self, loading: bool) -> bool {
        !loading && self.current > 1
    }

    pub fn can_next(&self, loading: bool) -> bool {
        !loading && self.current < self.total
    }

    pub fn prev(&self) -> Option<u32> {
        (self.current > 1).then(|| self.clamp(self.current - 1))
    }

    pub fn next(&self) -> Option<u32> {
        (self.current < self.total).then(|| self.current + 1)
    }

    pub fn numbers(&self) -> RangeInclusive<u32> {
        1..=self.total
    }

    /// Controls are hidden for a single page
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }
}

/// `idle → loading → (success | error)`, back to loading on any input change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let first = PageState::new(1, 3);
        assert!(!first.can_prev(false));
        assert!(first.can_next(false));
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));

        let last = PageState::new(3, 3);
        assert!(last.can_prev(false));
        assert!(!last.can_next(false));
        assert_eq!(last.next(), None);
        assert_eq!(last.prev(), Some(2));
    }

    #[test]
    fn test_loading_disables_both_directions() {
        let mid = PageState::new(2, 3);
        assert!(!mid.can_prev(true));
        assert!(!mid.can_next(true));
    }

    #[test]
    fn test_clamp_and_numbers() {
        let state = PageState::new(2, 4);
        assert_eq!(state.clamp(0), 1);
        assert_eq!(state.clamp(9), 4);
        assert_eq!(state.numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_total_is_one_page() {
        let state = PageState::new(0, 0);
        assert_eq!(state, PageState { current: 1, total: 1 });
        assert!(!state.is_visible());
    }

    #[test]
    fn test_prev_from_beyond_last_page_clamps() {
        let state = PageState::new(7, 3);
        assert_eq!(state.prev(), Some(3));
    }

    #[test]
    fn test_fetch_status() {
        assert!(FetchStatus::Loading.is_loading());
        assert_eq!(FetchStatus::Error("boom".into()).error(), Some("boom"));
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }
}
