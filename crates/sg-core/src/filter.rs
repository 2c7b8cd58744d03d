//! Category filtering for galleries and service grids

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Project, ProjectCategory, Service, ServiceCategoryId, Testimonial};
use crate::CoreError;

/// Id of the pass-through filter in URLs and filter buttons
pub const ALL_ID: &str = "all";

/// Items that belong to exactly one category
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

impl Categorized for Service {
    type Category = ServiceCategoryId;

    fn category(&self) -> ServiceCategoryId {
        self.category
    }
}

impl Categorized for Testimonial {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.project_type
    }
}

impl<T: Categorized> Categorized for &T {
    type Category = T::Category;

    fn category(&self) -> T::Category {
        (*self).category()
    }
}

/// Selected filter: everything, or one exact category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl<C: fmt::Display> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_ID),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

impl<C> FromStr for CategoryFilter<C>
where
    C: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_ID) {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Stable subsequence of `items` whose category matches `filter`
pub fn filter_by_category<T>(items: &[T], filter: CategoryFilter<T::Category>) -> Vec<&T>
where
    T: Categorized,
{
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

/// `All` followed by each category present in `items`, in first-seen order
pub fn available_filters<T>(items: &[T]) -> Vec<CategoryFilter<T::Category>>
where
    T: Categorized,
{
    let mut filters = vec![CategoryFilter::All];
    for item in items {
        let candidate = CategoryFilter::Only(item.category());
        if !filters.contains(&candidate) {
            filters.push(candidate);
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{PROJECTS, SERVICES};

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, ProjectCategory);

    impl Categorized for Item {
        type Category = ProjectCategory;

        fn category(&self) -> ProjectCategory {
            self.1
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item("A", ProjectCategory::Signboard),
            Item("B", ProjectCategory::Contracting),
            Item("C", ProjectCategory::Both),
        ]
    }

    fn names(items: Vec<&Item>) -> Vec<&'static str> {
        items.into_iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_filter_single_category() {
        let items = sample();
        let signboard = filter_by_category(&items, CategoryFilter::Only(ProjectCategory::Signboard));
        assert_eq!(names(signboard), vec!["A"]);
    }

    #[test]
    fn test_filter_all_passes_everything_through() {
        let items = sample();
        assert_eq!(names(filter_by_category(&items, CategoryFilter::All)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_both_is_an_exact_category() {
        let items = sample();
        let both = filter_by_category(&items, CategoryFilter::Only(ProjectCategory::Both));
        assert_eq!(names(both), vec!["C"]);
        let contracting = filter_by_category(&items, CategoryFilter::Only(ProjectCategory::Contracting));
        assert_eq!(names(contracting), vec!["B"]);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        for category in ProjectCategory::ALL {
            let filtered = filter_by_category(PROJECTS.as_slice(), CategoryFilter::Only(category));
            let expected: Vec<_> = PROJECTS.iter().filter(|p| p.category == category).collect();
            assert_eq!(filtered, expected);

            let positions: Vec<_> = filtered
                .iter()
                .map(|p| PROJECTS.iter().position(|q| q.id == p.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_filter_services() {
        let signage = filter_by_category(SERVICES.as_slice(), CategoryFilter::Only(ServiceCategoryId::Signage));
        assert!(!signage.is_empty());
        assert!(signage.iter().all(|s| s.category == ServiceCategoryId::Signage));
    }

    #[test]
    fn test_filter_empty_list() {
        let items: Vec<Item> = Vec::new();
        assert!(filter_by_category(&items, CategoryFilter::All).is_empty());
        assert!(filter_by_category(&items, CategoryFilter::Only(ProjectCategory::Both)).is_empty());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<CategoryFilter<ProjectCategory>>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "signboard".parse::<CategoryFilter<ProjectCategory>>().unwrap(),
            CategoryFilter::Only(ProjectCategory::Signboard)
        );
        assert!("neon".parse::<CategoryFilter<ProjectCategory>>().is_err());
        assert_eq!(CategoryFilter::Only(ProjectCategory::Both).to_string(), "both");
        assert_eq!(CategoryFilter::<ProjectCategory>::All.to_string(), "all");
    }

    #[test]
    fn test_available_filters_first_seen_order() {
        let items = vec![
            Item("x", ProjectCategory::Both),
            Item("y", ProjectCategory::Signboard),
            Item("z", ProjectCategory::Both),
        ];
        assert_eq!(
            available_filters(&items),
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(ProjectCategory::Both),
                CategoryFilter::Only(ProjectCategory::Signboard),
            ]
        );
    }
}
