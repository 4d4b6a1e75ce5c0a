use std::collections::HashMap;
use std::sync::RwLock;
use crate::api::store::{ id_of, matches, Document, DocumentStore, StoreError };

/// In-process store. Natural order is insertion order.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

#[rocket::async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, filter: &Document) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        let found = collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|document| matches(document, filter)))
            .cloned();
        Ok(found)
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        let id = id_of(&document).ok_or(StoreError::MissingId)?.to_string();
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let documents = collections.entry(collection.to_string()).or_default();
        if documents.iter().any(|existing| id_of(existing) == Some(id.as_str())) {
            return Err(StoreError::DuplicateId(id));
        }
        documents.push(document);
        Ok(())
    }

    async fn replace_by_id(&self, collection: &str, id: &str, document: Document) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let existing = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|existing| id_of(existing) == Some(id)));
        match existing {
            Some(existing) => {
                *existing = document;
                Ok(true)
            },
            None => Ok(false)
        }
    }

    async fn remove(&self, collection: &str, filter: &Document) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(documents) = collections.get_mut(collection) {
            if let Some(index) = documents.iter().position(|document| matches(document, filter)) {
                documents.remove(index);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;
    use crate::api::store::filter_by;

    fn document(value: serde_json::Value) -> Document {
        value.as_object().cloned().expect("object literal")
    }

    #[rocket::async_test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryStore::new();
        for id in ["b", "a", "c"] {
            store.insert("beers", document(json!({ "id": id }))).await.expect("insert");
        }
        let ids: Vec<String> = store.find_all("beers").await.expect("find all")
            .iter()
            .map(|document| id_of(document).unwrap_or_default().to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[rocket::async_test]
    async fn find_all_on_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all("nothing").await.expect("find all").is_empty());
    }

    #[rocket::async_test]
    async fn insert_rejects_duplicate_and_missing_ids() {
        let store = MemoryStore::new();
        store.insert("beers", document(json!({ "id": "1", "name": "Stout" }))).await.expect("insert");

        let duplicate = store.insert("beers", document(json!({ "id": "1", "name": "Porter" }))).await;
        assert!(matches!(duplicate, Err(StoreError::DuplicateId(id)) if id == "1"));

        let missing = store.insert("beers", document(json!({ "name": "Porter" }))).await;
        assert!(matches!(missing, Err(StoreError::MissingId)));
    }

    #[rocket::async_test]
    async fn find_one_returns_first_match() {
        let store = MemoryStore::new();
        store.insert("users", document(json!({ "id": "1", "email": "al@x.com" }))).await.expect("insert");
        store.insert("users", document(json!({ "id": "2", "email": "al@x.com" }))).await.expect("insert");

        let found = store.find_one("users", &filter_by("email", "al@x.com")).await.expect("find");
        assert_eq!(found.as_ref().and_then(id_of), Some("1"));
        assert!(store.find_one("users", &filter_by("email", "bo@x.com")).await.expect("find").is_none());
    }

    #[rocket::async_test]
    async fn replace_by_id_reports_missing_documents() {
        let store = MemoryStore::new();
        store.insert("beers", document(json!({ "id": "1", "name": "Stout" }))).await.expect("insert");

        let replaced = store.replace_by_id("beers", "1", document(json!({ "id": "1", "name": "Porter" }))).await;
        assert!(replaced.expect("replace"));
        let missing = store.replace_by_id("beers", "2", document(json!({ "id": "2" }))).await;
        assert!(!missing.expect("replace"));

        let found = store.find_one("beers", &filter_by("id", "1")).await.expect("find").expect("present");
        assert_eq!(found.get("name"), Some(&json!("Porter")));
    }

    #[rocket::async_test]
    async fn remove_needs_every_filter_field_to_match() {
        let store = MemoryStore::new();
        store.insert("beers", document(json!({ "id": "1", "name": "Stout", "labels": { "icon": "i" } }))).await.expect("insert");

        let drifted = document(json!({ "id": "1", "name": "Stout", "labels": { "icon": "other" } }));
        assert!(!store.remove("beers", &drifted).await.expect("remove"));

        let exact = document(json!({ "id": "1", "name": "Stout", "labels": { "icon": "i" } }));
        assert!(store.remove("beers", &exact).await.expect("remove"));
        assert!(store.find_all("beers").await.expect("find all").is_empty());
    }
}
