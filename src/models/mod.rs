//! Request and result types shared across the index

mod search;

pub use search::{DocIdNode, FilterKind, GatherRequest, SearchFilter, SearchQuery};
