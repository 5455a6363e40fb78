//! Category + free-text narrowing of the static content lists.

use std::fmt;

/// An enumerated facet such as a project or post category.
pub trait Category: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Something that can appear in a filtered listing.
pub trait Listing {
    type Category: Category;

    fn category(&self) -> Self::Category;
    fn title(&self) -> &str;
    /// Excerpt or description; searched together with the title.
    fn summary(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    /// "All" followed by every concrete category, in display order.
    pub fn choices() -> Vec<Self> {
        std::iter::once(CategoryFilter::All)
            .chain(C::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl<C: Category> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery<C> {
    pub category: CategoryFilter<C>,
    pub text: String,
}

impl<C> Default for ListingQuery<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            text: String::new(),
        }
    }
}

impl<C: Category> ListingQuery<C> {
    pub fn matches<T: Listing<Category = C>>(&self, item: &T) -> bool {
        self.category.admits(item.category()) && text_matches(item, &self.text.to_lowercase())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.text.is_empty()
    }
}

fn text_matches<T: Listing>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item.title().to_lowercase().contains(needle)
        || item.summary().to_lowercase().contains(needle)
}

/// The items admitted by `query`, in source order.
pub fn filter<'a, T: Listing>(items: &'a [T], query: &ListingQuery<T::Category>) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::content::{PostCategory, ProjectCategory, BLOG_POSTS, PROJECTS};

    fn titles<T: Listing>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.title().to_string()).collect()
    }

    #[test]
    fn all_with_empty_text_returns_everything() {
        let query = ListingQuery::<ProjectCategory>::default();
        assert!(query.is_unfiltered());
        assert_eq!(filter(PROJECTS, &query).len(), PROJECTS.len());
    }

    #[test]
    fn residential_returns_exactly_residential_projects() {
        let query = ListingQuery {
            category: CategoryFilter::Only(ProjectCategory::Residential),
            text: String::new(),
        };
        let found = filter(PROJECTS, &query);
        let expected: Vec<_> = PROJECTS
            .iter()
            .filter(|p| p.category == ProjectCategory::Residential)
            .collect();
        assert_eq!(found, expected);
        assert_eq!(
            titles(&found),
            vec!["Oakridge Residences", "Lakeside Villa", "The Heights Apartments"]
        );
    }

    #[test]
    fn text_narrows_within_category_case_insensitively() {
        let mut query = ListingQuery {
            category: CategoryFilter::Only(ProjectCategory::Residential),
            text: "villa".to_string(),
        };
        assert_eq!(titles(&filter(PROJECTS, &query)), vec!["Lakeside Villa"]);

        query.text = "VILLA".to_string();
        assert_eq!(titles(&filter(PROJECTS, &query)), vec!["Lakeside Villa"]);
    }

    #[test]
    fn text_searches_summary_too() {
        let query = ListingQuery::<ProjectCategory> {
            category: CategoryFilter::All,
            text: "leed".to_string(),
        };
        assert_eq!(titles(&filter(PROJECTS, &query)), vec!["Green Valley Community Center"]);
    }

    #[test]
    fn category_and_text_must_both_hold() {
        let query = ListingQuery {
            category: CategoryFilter::Only(PostCategory::Tips),
            text: "sustainable".to_string(),
        };
        assert!(filter(BLOG_POSTS, &query).is_empty());
        assert!(!query.matches(&BLOG_POSTS[4]));
    }

    #[test]
    fn blog_search_matches_excerpt() {
        let query = ListingQuery::<PostCategory> {
            category: CategoryFilter::All,
            text: "drones".to_string(),
        };
        assert_eq!(
            titles(&filter(BLOG_POSTS, &query)),
            vec!["The Impact of Technology on Construction"]
        );
    }

    #[test]
    fn filter_agrees_with_matches() {
        let query = ListingQuery {
            category: CategoryFilter::Only(PostCategory::Tips),
            text: "HOME".to_string(),
        };
        assert!(!query.is_unfiltered());
        let expected: Vec<_> = BLOG_POSTS.iter().filter(|post| query.matches(*post)).collect();
        assert_eq!(filter(BLOG_POSTS, &query), expected);
    }

    #[test]
    fn choices_start_with_all() {
        let labels: Vec<_> = CategoryFilter::<ProjectCategory>::choices()
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(labels, vec!["All", "Commercial", "Residential", "Renovation", "Institutional"]);
    }
}
