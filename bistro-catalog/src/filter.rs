//! Category filter
//!
//! The visible dish list is a pure function of the dish collection and the
//! selected filter. It is recomputed on every read and never stored.

use serde::Serialize;
use shared::{Category, Dish};

/// Label of the catch-all filter
pub const ALL_LABEL: &str = "All";

/// Selected category filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter control label; `"All"` selects everything
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(name) => name,
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => dish.category == *name,
        }
    }
}

/// Dishes shown under `filter`, in collection order
pub fn visible_dishes<'a>(dishes: &'a [Dish], filter: &CategoryFilter) -> Vec<&'a Dish> {
    dishes.iter().filter(|dish| filter.matches(dish)).collect()
}

/// One control of the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub filter: CategoryFilter,
    pub selected: bool,
}

/// Filter bar: "All" followed by one control per category
pub fn filter_options(categories: &[Category], selected: &CategoryFilter) -> Vec<FilterOption> {
    std::iter::once(CategoryFilter::All)
        .chain(
            categories
                .iter()
                .map(|cat| CategoryFilter::Category(cat.name.clone())),
        )
        .map(|filter| FilterOption {
            label: filter.label().to_string(),
            selected: filter == *selected,
            filter,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Decimal;

    fn dish(id: &str, category: &str) -> Dish {
        Dish {
            id: id.into(),
            name: format!("dish {id}"),
            category: category.into(),
            price: Decimal::new(10, 0),
            image: None,
        }
    }

    fn category(name: &str) -> Category {
        Category {
            id: Some(format!("c-{name}")),
            name: name.into(),
        }
    }

    fn ids(dishes: &[&Dish]) -> Vec<String> {
        dishes.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_lunch_filter_selects_one() {
        let dishes = vec![dish("1", "Breakfast"), dish("2", "Lunch")];
        let visible = visible_dishes(&dishes, &CategoryFilter::from_label("Lunch"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_all_filter_keeps_everything_in_order() {
        let dishes = vec![dish("1", "Breakfast"), dish("2", "Lunch"), dish("3", "Breakfast")];
        let visible = visible_dishes(&dishes, &CategoryFilter::All);
        assert_eq!(ids(&visible), ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_exact_partition() {
        let dishes = vec![
            dish("1", "Breakfast"),
            dish("2", "Lunch"),
            dish("3", "Breakfast"),
            dish("4", "Dinner"),
            dish("5", "breakfast"),
        ];
        let filter = CategoryFilter::Category("Breakfast".into());
        let visible = visible_dishes(&dishes, &filter);
        assert_eq!(ids(&visible), ["1", "3"]);

        // Every matching dish exactly once, nothing else
        for d in &dishes {
            let count = visible.iter().filter(|v| v.id == d.id).count();
            assert_eq!(count, usize::from(d.category == "Breakfast"));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dishes = vec![dish("1", "Breakfast"), dish("2", "Lunch")];
        let filter = CategoryFilter::Category("Lunch".into());
        let once = ids(&visible_dishes(&dishes, &filter));
        let twice = ids(&visible_dishes(&dishes, &filter));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_category_shows_nothing() {
        let dishes = vec![dish("1", "Breakfast")];
        assert!(visible_dishes(&dishes, &CategoryFilter::Category("Brunch".into())).is_empty());
        assert!(visible_dishes(&[], &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_filter_options_empty_categories() {
        let options = filter_options(&[], &CategoryFilter::All);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "All");
        assert!(options[0].selected);
    }

    #[test]
    fn test_filter_options_marks_selection() {
        let categories = vec![category("Breakfast"), category("Lunch")];
        let options = filter_options(&categories, &CategoryFilter::Category("Lunch".into()));
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["All", "Breakfast", "Lunch"]);
        let selected: Vec<_> = options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, [false, false, true]);
    }

    #[test]
    fn test_label_roundtrip() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::from_label("Lunch").label(), "Lunch");
    }
}
