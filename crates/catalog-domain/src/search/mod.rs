//! Search contract shared by every repository backend
//!
//! [`SearchParams`] describes what to fetch, [`SearchResult`] carries one page
//! of it. Both are backend-agnostic; backends only decide how to filter and
//! order.

mod params;
mod result;

pub use params::{
    SearchFilter, SearchInput, SearchParams, SortDirection, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
pub use result::SearchResult;
