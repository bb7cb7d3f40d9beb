use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

#[must_use]
pub fn normalize_page(page: Option<u32>) -> u32 {
    page.unwrap_or(1).max(1)
}

#[must_use]
pub fn normalize_page_size(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

impl<T> Page<T> {
    /// Slice an already filtered and ordered listing into one page.
    ///
    /// Pages past the end come back empty with the real `total`.
    #[must_use]
    pub fn paginate(items: Vec<T>, page: Option<u32>, limit: Option<u32>) -> Self {
        let page = normalize_page(page);
        let limit = normalize_page_size(limit);
        let total = items.len();
        let total_pages = u32::try_from(total.div_ceil(limit as usize)).unwrap_or(u32::MAX);
        let skip = (page as usize - 1).saturating_mul(limit as usize);

        let items = items.into_iter().skip(skip).take(limit as usize).collect();
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_applies_defaults_and_bounds() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(normalize_page_size(None), 20);
        assert_eq!(normalize_page_size(Some(0)), 1);
        assert_eq!(normalize_page_size(Some(1_000)), 100);
    }

    #[test]
    fn paginate_slices_requested_page() {
        let page = Page::paginate((1..=45).collect::<Vec<_>>(), Some(3), Some(20));
        assert_eq!(page.items, vec![41, 42, 43, 44, 45]);
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn paginate_past_end_is_empty() {
        let page = Page::paginate(vec![1, 2, 3], Some(9), Some(2));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_serializes_camel_case() {
        let page = Page::paginate(vec!["a"], None, None);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["limit"], 20);
    }
}
