//! Filter Projection
//!
//! Derives the displayed subset of the list from the full collection.

use crate::model::Item;

/// View selector in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.completed,
            FilterMode::Completed => item.completed,
        }
    }
}

/// Items visible under `mode`, in collection order
pub fn project(items: &[Item], mode: FilterMode) -> Vec<Item> {
    items.iter().filter(|item| mode.matches(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: i64, completed: bool) -> Item {
        Item {
            id,
            owner_id: 1,
            title: format!("todo {id}"),
            completed,
        }
    }

    fn sample() -> Vec<Item> {
        vec![item(1, false), item(2, true), item(3, false), item(4, true)]
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn all_returns_collection_unchanged() {
        assert_eq!(project(&sample(), FilterMode::All), sample());
    }

    #[test]
    fn active_and_completed_keep_source_order() {
        assert_eq!(ids(&project(&sample(), FilterMode::Active)), vec![1, 3]);
        assert_eq!(ids(&project(&sample(), FilterMode::Completed)), vec![2, 4]);
    }

    #[test]
    fn active_and_completed_partition_the_list() {
        let items = sample();
        let active = project(&items, FilterMode::Active);
        let completed = project(&items, FilterMode::Completed);

        assert_eq!(active.len() + completed.len(), items.len());
        for it in &items {
            let in_active = active.contains(it);
            let in_completed = completed.contains(it);
            assert!(in_active != in_completed, "item {} must be in exactly one side", it.id);
        }
    }

    #[test]
    fn empty_collection_projects_to_empty() {
        for mode in FilterMode::ALL {
            assert!(project(&[], mode).is_empty());
        }
    }
}
