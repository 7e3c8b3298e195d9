//! Footer and header summary figures.

use crate::model::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    /// Lags the collection by the counter delay, except right after a load
    pub active_count: usize,
    pub has_completed: bool,
    pub all_completed: bool,
}

impl Summary {
    pub(crate) fn of(items: &[Item], active_count: usize) -> Self {
        Self {
            total: items.len(),
            active_count,
            has_completed: items.iter().any(|item| item.completed),
            all_completed: !items.is_empty() && items.iter().all(|item| item.completed),
        }
    }
}

pub(crate) fn count_active(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{count} items left")
    }
}
