//! Attribute store implementations: in-memory and HTTP document store.

mod http;
mod memory;

pub use http::HttpAttributeStore;
pub use memo_types::{AttributeBag, AttributeStore, AttributeStoreError};
pub use memory::InMemoryAttributeStore;
