use mongodb::bson::{ self, doc, Bson };
use mongodb::{ Client, Database };
use serde_json::Value;
use crate::api::store::{ Document, DocumentStore, StoreError, ID_FIELD };

const MONGO_ID_FIELD: &str = "_id";

/// MongoDB-backed store. The client is created once and shared by every
/// request; the driver pools connections internally.
pub struct MongoStore {
    database: Database
}

impl MongoStore {
    /// Connects and pings the server so an unreachable database fails at startup
    /// instead of on the first request.
    pub async fn connect(server: &str, database_name: &str) -> Result<MongoStore, StoreError> {
        let client = Client::with_uri_str(server).await.map_err(backend)?;
        let database = client.database(database_name);
        database.run_command(doc! { "ping": 1 }, None).await.map_err(backend)?;
        log::info!("Connected to MongoDB database \"{}\"", database_name);
        Ok(MongoStore { database })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<bson::Document> {
        self.database.collection::<bson::Document>(name)
    }
}

fn backend(error: mongodb::error::Error) -> StoreError {
    StoreError::Backend(error.to_string())
}

// `id` on our side is `_id` on Mongo's.
fn to_bson(mut document: Document) -> Result<bson::Document, StoreError> {
    if let Some(id) = document.remove(ID_FIELD) {
        document.insert(MONGO_ID_FIELD.to_string(), id);
    }
    bson::to_document(&document).map_err(|error| StoreError::Backend(error.to_string()))
}

fn from_bson(document: bson::Document) -> Document {
    let mut document = match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Document::new()
    };
    if let Some(id) = document.remove(MONGO_ID_FIELD) {
        document.insert(ID_FIELD.to_string(), id);
    }
    document
}

#[rocket::async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let mut cursor = self.collection(collection).find(None, None).await.map_err(backend)?;
        let mut documents = vec![];
        while cursor.advance().await.map_err(backend)? {
            let document: bson::Document = cursor.deserialize_current().map_err(backend)?;
            documents.push(from_bson(document));
        }
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: &Document) -> Result<Option<Document>, StoreError> {
        let filter = to_bson(filter.clone())?;
        let found = self.collection(collection).find_one(filter, None).await.map_err(backend)?;
        Ok(found.map(from_bson))
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        if !document.contains_key(ID_FIELD) {
            return Err(StoreError::MissingId);
        }
        let document = to_bson(document)?;
        self.collection(collection).insert_one(document, None).await.map_err(backend)?;
        Ok(())
    }

    async fn replace_by_id(&self, collection: &str, id: &str, document: Document) -> Result<bool, StoreError> {
        let replacement = to_bson(document)?;
        let result = self.collection(collection)
            .replace_one(doc! { "_id": id }, replacement, None)
            .await
            .map_err(backend)?;
        Ok(result.matched_count > 0)
    }

    async fn remove(&self, collection: &str, filter: &Document) -> Result<bool, StoreError> {
        let filter = to_bson(filter.clone())?;
        let result = self.collection(collection).delete_one(filter, None).await.map_err(backend)?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use uuid::Uuid;
    use super::*;
    use crate::api::models::{ Beer, Favorite, Label, User };

    fn document<T: Serialize>(value: &T) -> Document {
        match serde_json::to_value(value).expect("serializable") {
            Value::Object(document) => document,
            other => panic!("expected an object, got {}", other)
        }
    }

    fn assert_round_trip(original: Document) {
        let stored = to_bson(original.clone()).expect("to bson");
        if original.contains_key(ID_FIELD) {
            assert!(stored.contains_key(MONGO_ID_FIELD), "stored: {:?}", stored);
        }
        assert!(!stored.contains_key(ID_FIELD), "stored: {:?}", stored);
        assert_eq!(from_bson(stored), original);
    }

    #[test]
    fn beer_id_is_stored_as_mongo_id() {
        let id = Uuid::new_v4();
        let beer = Beer {
            id: Some(id),
            name: "Pale Ale".to_string(),
            abv: "5.2".to_string(),
            labels: Label { icon: "s.png".to_string(), medium: "m.png".to_string(), large: "l.png".to_string() },
            rating: 4.3,
            ..Default::default()
        };
        let stored = to_bson(document(&beer)).expect("to bson");
        assert_eq!(stored.get_str(MONGO_ID_FIELD).expect("_id string"), id.to_string());
        assert_round_trip(document(&beer));
    }

    #[test]
    fn user_with_favorites_survives_the_round_trip() {
        let id = Uuid::new_v4();
        let user = User {
            id: Some(id),
            name: "Al".to_string(),
            email: "al@x.com".to_string(),
            password: "$2b$04$hash".to_string(),
            favorites: vec![
                Favorite { user_id: id.to_string(), beer_id: "b1".to_string() },
                Favorite { user_id: id.to_string(), beer_id: "b2".to_string() }
            ],
            ..Default::default()
        };
        assert_round_trip(document(&user));
    }

    #[test]
    fn default_beer_survives_the_round_trip() {
        assert_round_trip(document(&Beer { id: Some(Uuid::new_v4()), ..Default::default() }));
    }

    #[test]
    fn filter_without_id_has_no_mongo_id() {
        let filter = crate::api::store::filter_by("email", "al@x.com");
        let stored = to_bson(filter.clone()).expect("to bson");
        assert!(!stored.contains_key(MONGO_ID_FIELD));
        assert_eq!(from_bson(stored), filter);
    }
}
