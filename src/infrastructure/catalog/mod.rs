//! Order catalog implementations
//!
//! - `InMemoryOrderCatalog`: fixed list of orders, for tests and embedding
//! - `TomlOrderCatalog`: `[[orders]]` tables loaded from a file

mod in_memory;
mod toml_catalog;

pub use in_memory::InMemoryOrderCatalog;
pub use toml_catalog::TomlOrderCatalog;
