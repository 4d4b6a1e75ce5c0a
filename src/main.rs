#[macro_use] extern crate rocket;
extern crate env_logger;
use beer_cellar::api::config::Config;
use beer_cellar::api::DataAccessServiceFactory;

#[launch]
async fn rocket() -> _ {
    env_logger::init();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => panic!("Couldn't read configuration: {}", error)
    };
    log::info!("Using {:?} store, database \"{}\"", config.store_backend, config.database_name);
    let data_access_service = match DataAccessServiceFactory::create(&config).await {
        Ok(data_access_service) => data_access_service,
        Err(error) => panic!("Couldn't connect to the document store: {}", error)
    };
    beer_cellar::build_rocket(config, data_access_service)
}
