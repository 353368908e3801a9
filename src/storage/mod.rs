//! Storage backends for the catalog.
//!
//! One trait, two interchangeable backends: an in-memory one seeded from
//! [`crate::seed`] and a SQLite one behind sqlx. Backends only list and
//! insert records; filtering lives in [`crate::search`] so both backends
//! share one set of predicates.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Destination, NewDestination, NewReview, NewService, Review, Service,
};

pub mod database;
pub mod memory;

pub use database::DatabaseStorage;
pub use memory::MemoryStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("corrupt record: {0}")]
    CorruptRecord(#[from] serde_json::Error),
}

/// Catalog access. Listing methods return records in catalog order, the
/// order they were seeded or inserted.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn destinations(&self) -> Result<Vec<Destination>, StorageError>;
    async fn destination(&self, id: &str) -> Result<Option<Destination>, StorageError>;
    async fn create_destination(&self, new: NewDestination) -> Result<Destination, StorageError>;

    async fn reviews(&self) -> Result<Vec<Review>, StorageError>;
    async fn reviews_by_destination(&self, destination_id: &str)
        -> Result<Vec<Review>, StorageError>;
    async fn create_review(&self, new: NewReview) -> Result<Review, StorageError>;

    async fn services(&self) -> Result<Vec<Service>, StorageError>;
    async fn services_by_category(&self, category: &str) -> Result<Vec<Service>, StorageError>;
    async fn create_service(&self, new: NewService) -> Result<Service, StorageError>;
}
