use rocket::tokio::task;
use crate::api::ApiError;

/// Salted bcrypt hashing. Both operations run on the blocking pool.
#[derive(Clone)]
pub struct PasswordService {
    cost: u32
}

impl PasswordService {
    pub fn new(cost: u32) -> PasswordService {
        PasswordService { cost }
    }

    pub async fn hash(&self, plaintext: String) -> Result<String, ApiError> {
        let cost = self.cost;
        match task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(error)) => Err(ApiError::Hashing(error.to_string())),
            Err(error) => Err(ApiError::Hashing(error.to_string()))
        }
    }

    /// A stored value that is not a bcrypt hash never verifies.
    pub async fn verify(&self, plaintext: String, hash: String) -> bool {
        match task::spawn_blocking(move || bcrypt::verify(plaintext, &hash)).await {
            Ok(Ok(matched)) => matched,
            Ok(Err(error)) => {
                log::warn!("Stored password is not a valid hash: {}", error);
                false
            },
            Err(error) => {
                log::error!("Password verification task failed: {}", error);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_HASH_COST: u32 = 4;

    #[rocket::async_test]
    async fn hash_verifies_only_the_original_plaintext() {
        let service = PasswordService::new(TEST_HASH_COST);
        let hash = service.hash("secret".to_string()).await.expect("hash");

        assert_ne!(hash, "secret");
        assert!(service.verify("secret".to_string(), hash.clone()).await);
        assert!(!service.verify("Secret".to_string(), hash.clone()).await);
        assert!(!service.verify(String::new(), hash).await);
    }

    #[rocket::async_test]
    async fn hashes_are_salted() {
        let service = PasswordService::new(TEST_HASH_COST);
        let first = service.hash("secret".to_string()).await.expect("hash");
        let second = service.hash("secret".to_string()).await.expect("hash");
        assert_ne!(first, second);
    }

    #[rocket::async_test]
    async fn garbage_hash_does_not_verify() {
        let service = PasswordService::new(TEST_HASH_COST);
        assert!(!service.verify("secret".to_string(), "secret".to_string()).await);
    }

    #[rocket::async_test]
    async fn out_of_range_cost_is_a_hashing_error() {
        let service = PasswordService::new(2);
        assert!(matches!(service.hash("secret".to_string()).await, Err(ApiError::Hashing(_))));
    }
}
