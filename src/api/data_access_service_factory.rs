use std::sync::Arc;
use crate::api::config::{ Config, StoreBackend };
use crate::api::store::{ DocumentStore, MemoryStore, StoreError };
#[cfg(feature = "use-mongodb")]
use crate::api::store::MongoStore;
use crate::api::DataAccessService;

pub struct DataAccessServiceFactory {}

impl DataAccessServiceFactory {
    /// Opens the configured store once; the handle is shared for the life of
    /// the process.
    pub async fn create(config: &Config) -> Result<DataAccessService, StoreError> {
        let store = Self::open_store(config).await?;
        Ok(DataAccessService::new(store))
    }

    #[cfg(feature = "use-mongodb")]
    async fn open_store(config: &Config) -> Result<Arc<dyn DocumentStore>, StoreError> {
        match config.store_backend {
            StoreBackend::MongoDb => {
                log::info!("Connecting to MongoDB at \"{}\"", config.database_url);
                let store = MongoStore::connect(&config.database_url, &config.database_name).await?;
                Ok(Arc::new(store))
            },
            StoreBackend::Memory => Ok(Self::memory_store())
        }
    }

    #[cfg(not(feature = "use-mongodb"))]
    async fn open_store(config: &Config) -> Result<Arc<dyn DocumentStore>, StoreError> {
        if config.store_backend == StoreBackend::MongoDb {
            log::warn!("Feature \"use-mongodb\" was not set; falling back to the in-memory store");
        }
        Ok(Self::memory_store())
    }

    fn memory_store() -> Arc<dyn DocumentStore> {
        log::info!("Using the in-memory document store; nothing survives a restart");
        Arc::new(MemoryStore::new())
    }
}
