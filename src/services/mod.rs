pub mod document_reader;
pub mod exporter;
pub mod field_extractor;
pub mod keyword_service;
pub mod scroll_loader;

pub use document_reader::read_document_text;
pub use exporter::Exporter;
pub use field_extractor::{clean_text, FieldExtractor, SelectorChain};
pub use keyword_service::{split_keywords, KeywordService};
pub use scroll_loader::{ScrollLoader, ScrollStop};
