//! Paginated list output

use serde::{Deserialize, Serialize};

use catalog_domain::SearchResult;

/// One page of mapped items plus the page metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub last_page: usize,
}

pub struct PaginationOutputMapper;

impl PaginationOutputMapper {
    /// Pair already mapped `items` with the metadata of `result`
    pub fn to_output<T, E>(items: Vec<T>, result: &SearchResult<E>) -> PaginationOutput<T> {
        PaginationOutput {
            items,
            total: result.total(),
            current_page: result.current_page(),
            per_page: result.per_page(),
            last_page: result.last_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_output_copies_metadata() {
        let result = SearchResult::new(vec!["a", "b"], 17, 1, 2);

        let output = PaginationOutputMapper::to_output(vec![1, 2], &result);

        assert_eq!(
            output,
            PaginationOutput {
                items: vec![1, 2],
                total: 17,
                current_page: 1,
                per_page: 2,
                last_page: 9,
            }
        );
    }
}
