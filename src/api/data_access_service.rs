use std::sync::Arc;
use serde::{ de::DeserializeOwned, Serialize };
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;
use crate::api::models::{ Beer, Favorite, User };
use crate::api::store::{ filter_by, Document, DocumentStore, StoreError, ID_FIELD };

const BEER_COLLECTION: &str = "beers";
const USER_COLLECTION: &str = "users";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("malformed or unknown id")]
    NotFoundOrInvalidId,
    #[error("no matching document")]
    NotFound,
    #[error("document has no id")]
    MissingId,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("value does not serialize to a document")]
    NotADocument
}

/// Typed access to the beer and user collections. Cloning shares the
/// underlying store handle.
#[derive(Clone)]
pub struct DataAccessService {
    store: Arc<dyn DocumentStore>
}

impl DataAccessService {
    pub fn new(store: Arc<dyn DocumentStore>) -> DataAccessService {
        DataAccessService { store }
    }

    pub async fn find_all_beers(&self) -> Result<Vec<Beer>, DataError> {
        self.store.find_all(BEER_COLLECTION).await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// A malformed id and an unknown id are the same failure.
    pub async fn find_beer_by_id(&self, id: &str) -> Result<Beer, DataError> {
        let id = Uuid::parse_str(id).map_err(|_| DataError::NotFoundOrInvalidId)?;
        let filter = filter_by(ID_FIELD, &id.to_string());
        match self.store.find_one(BEER_COLLECTION, &filter).await? {
            Some(document) => decode(document),
            None => Err(DataError::NotFoundOrInvalidId)
        }
    }

    pub async fn insert_beer(&self, beer: &Beer) -> Result<(), DataError> {
        if beer.id.is_none() {
            return Err(DataError::MissingId);
        }
        self.store.insert(BEER_COLLECTION, encode(beer)?).await?;
        Ok(())
    }

    /// Full replace keyed by the beer's id.
    pub async fn update_beer(&self, beer: &Beer) -> Result<(), DataError> {
        let id = beer.id.ok_or(DataError::MissingId)?;
        if self.store.replace_by_id(BEER_COLLECTION, &id.to_string(), encode(beer)?).await? {
            Ok(())
        } else {
            Err(DataError::NotFound)
        }
    }

    /// Removes the beer whose stored fields all equal the given beer's. A
    /// payload that drifted from the stored document in any field is
    /// `NotFound`.
    pub async fn delete_beer(&self, beer: &Beer) -> Result<(), DataError> {
        if beer.id.is_none() {
            return Err(DataError::MissingId);
        }
        if self.store.remove(BEER_COLLECTION, &encode(beer)?).await? {
            Ok(())
        } else {
            Err(DataError::NotFound)
        }
    }

    pub async fn insert_user(&self, user: &User) -> Result<(), DataError> {
        if user.id.is_none() {
            return Err(DataError::MissingId);
        }
        self.store.insert(USER_COLLECTION, encode(user)?).await?;
        Ok(())
    }

    pub async fn find_user_by_id(&self, id: &str) -> Result<User, DataError> {
        self.find_user(&filter_by(ID_FIELD, id)).await
    }

    /// Emails are not unique; whichever match the store yields first wins.
    pub async fn find_user_by_email(&self, email: &str) -> Result<User, DataError> {
        self.find_user(&filter_by("email", email)).await
    }

    /// Read-modify-write of the user's whole document. Two concurrent calls
    /// for the same user race and the last write wins.
    pub async fn add_favorite(&self, favorite: &Favorite) -> Result<(), DataError> {
        let mut user = self.find_user_by_id(&favorite.user_id).await?;
        user.favorites.push(favorite.clone());
        if self.store.replace_by_id(USER_COLLECTION, &favorite.user_id, encode(&user)?).await? {
            Ok(())
        } else {
            Err(DataError::NotFound)
        }
    }

    pub async fn get_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, DataError> {
        Ok(self.find_user_by_id(user_id).await?.favorites)
    }

    async fn find_user(&self, filter: &Document) -> Result<User, DataError> {
        match self.store.find_one(USER_COLLECTION, filter).await? {
            Some(document) => decode(document),
            None => Err(DataError::NotFound)
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Document, DataError> {
    match serde_json::to_value(value)? {
        Value::Object(document) => Ok(document),
        _ => Err(DataError::NotADocument)
    }
}

fn decode<T: DeserializeOwned>(document: Document) -> Result<T, DataError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
