mod memory;
#[cfg(feature = "use-mongodb")]
mod mongo;

use serde_json::{ Map, Value };
use thiserror::Error;

pub use memory::MemoryStore;
#[cfg(feature = "use-mongodb")]
pub use mongo::MongoStore;

/// A stored document. The identifier lives under [`ID_FIELD`].
pub type Document = Map<String, Value>;

pub const ID_FIELD: &str = "id";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store failure: {0}")]
    Backend(String),
    #[error("a document with id {0} already exists")]
    DuplicateId(String),
    #[error("document has no id")]
    MissingId,
    #[error("document store lock poisoned")]
    Poisoned
}

/// The external document database. Filters are field-equality matches: a
/// document matches when every filter field is present with an equal value.
#[rocket::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in the collection, in the store's natural order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    async fn find_one(&self, collection: &str, filter: &Document) -> Result<Option<Document>, StoreError>;

    async fn insert(&self, collection: &str, document: Document) -> Result<(), StoreError>;

    /// Returns false when no document has the given id.
    async fn replace_by_id(&self, collection: &str, id: &str, document: Document) -> Result<bool, StoreError>;

    /// Removes the first document matching `filter`. Returns false when none did.
    async fn remove(&self, collection: &str, filter: &Document) -> Result<bool, StoreError>;
}

pub fn id_of(document: &Document) -> Option<&str> {
    document.get(ID_FIELD).and_then(Value::as_str)
}

pub fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(field, value)| document.get(field) == Some(value))
}

pub fn filter_by(field: &str, value: &str) -> Document {
    let mut filter = Map::new();
    filter.insert(field.to_string(), Value::String(value.to_string()));
    filter
}
