use serde::Serialize;

/// Page metadata reported alongside every listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: usize,
    /// Zero-based page index.
    pub number: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct PagedModel<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
}

impl<T> PagedModel<T> {
    pub fn new(content: Vec<T>, number: usize, size: usize, total_elements: usize) -> Self {
        let size = size.max(1);

        Self {
            content,
            page: PageMetadata {
                size,
                number,
                total_elements,
                total_pages: total_elements.div_ceil(size),
            },
        }
    }

    /// Converts every item, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PagedModel<U>
    where
        F: FnMut(T) -> U,
    {
        PagedModel {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let paged = PagedModel::new(vec![1, 2, 3], 0, 3, 7);
        assert_eq!(paged.page.total_pages, 3);
        assert_eq!(paged.page.total_elements, 7);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let paged: PagedModel<u8> = PagedModel::new(vec![], 0, 10, 0);
        assert_eq!(paged.page.total_pages, 0);
        assert!(paged.content.is_empty());
    }

    #[test]
    fn map_keeps_metadata() {
        let paged = PagedModel::new(vec![1, 2], 1, 2, 4).map(|n| n * 10);
        assert_eq!(paged.content, vec![10, 20]);
        assert_eq!(paged.page.number, 1);
    }

    #[test]
    fn serializes_page_envelope() {
        let value = serde_json::to_value(PagedModel::new(vec!["a"], 0, 10, 1)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content": ["a"],
                "page": {"size": 10, "number": 0, "totalElements": 1, "totalPages": 1}
            })
        );
    }
}
