pub mod catalog;
pub mod job;
pub mod loaders;
pub mod profile;
pub mod source;

pub use job::{JobPosting, SearchRequest};
pub use loaders::{load_generic_sources, parse_generic_sources};
pub use profile::{
    Extraction, FieldQueries, Navigation, SelectorProfile, SourceProfile, SpaceStyle, UrlTemplate,
};
pub use source::Source;
