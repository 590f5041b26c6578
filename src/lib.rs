pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod inventory;
pub mod pricing;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

use sea_orm::DatabaseConnection;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
