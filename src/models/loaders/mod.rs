pub mod toml_loader;

pub use toml_loader::{load_generic_sources, parse_generic_sources, GenericSourceEntry};
