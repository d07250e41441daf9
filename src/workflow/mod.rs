pub mod search_ctx;
pub mod source_searcher;

pub use search_ctx::SearchCtx;
pub use source_searcher::{SearchTimings, SourceSearcher};
