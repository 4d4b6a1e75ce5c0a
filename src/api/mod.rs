mod account_service;
mod auth_service;
mod data_access_service;
mod data_access_service_factory;
mod error;
mod password_service;
pub mod config;
pub mod cors;
pub mod models;
pub mod store;

pub use account_service::*;
pub use auth_service::*;
pub use data_access_service::*;
pub use data_access_service_factory::*;
pub use error::*;
pub use password_service::*;
