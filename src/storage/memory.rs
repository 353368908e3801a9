//! In-memory backend, the development default.
//!
//! Records live in `Vec`s so iteration order is insertion order; the filter
//! contract depends on catalog order surviving a round trip through storage.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Destination, NewDestination, NewReview, NewService, Review, Service,
};
use crate::seed;

use super::{Storage, StorageError};

#[derive(Default)]
pub struct MemoryStorage {
    destinations: RwLock<Vec<Destination>>,
    reviews: RwLock<Vec<Review>>,
    services: RwLock<Vec<Service>>,
}

impl MemoryStorage {
    /// Empty store, for tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the sample catalog.
    pub fn seeded() -> Self {
        Self {
            destinations: RwLock::new(seed::seed_destinations()),
            reviews: RwLock::new(seed::seed_reviews()),
            services: RwLock::new(seed::seed_services()),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn destinations(&self) -> Result<Vec<Destination>, StorageError> {
        Ok(self.destinations.read().await.clone())
    }

    async fn destination(&self, id: &str) -> Result<Option<Destination>, StorageError> {
        Ok(self
            .destinations
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn create_destination(&self, new: NewDestination) -> Result<Destination, StorageError> {
        let destination = Destination {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            location: new.location,
            image_url: new.image_url,
            rating: new.rating.unwrap_or(0),
            price_per_person: new.price_per_person,
            recommended_days: new.recommended_days,
            category: new.category,
            features: new.features.unwrap_or_default(),
            created_at: Utc::now(),
        };

        self.destinations.write().await.push(destination.clone());
        Ok(destination)
    }

    async fn reviews(&self) -> Result<Vec<Review>, StorageError> {
        Ok(self.reviews.read().await.clone())
    }

    async fn reviews_by_destination(
        &self,
        destination_id: &str,
    ) -> Result<Vec<Review>, StorageError> {
        Ok(self
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.destination_id.as_deref() == Some(destination_id))
            .cloned()
            .collect())
    }

    async fn create_review(&self, new: NewReview) -> Result<Review, StorageError> {
        let review = Review {
            id: Uuid::new_v4().to_string(),
            destination_id: new.destination_id,
            user_name: new.user_name,
            user_avatar: new.user_avatar,
            rating: new.rating,
            comment: new.comment,
            location: new.location,
            created_at: Utc::now(),
        };

        self.reviews.write().await.push(review.clone());
        Ok(review)
    }

    async fn services(&self) -> Result<Vec<Service>, StorageError> {
        Ok(self.services.read().await.clone())
    }

    async fn services_by_category(&self, category: &str) -> Result<Vec<Service>, StorageError> {
        Ok(self
            .services
            .read()
            .await
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect())
    }

    async fn create_service(&self, new: NewService) -> Result<Service, StorageError> {
        let service = Service {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            category: new.category,
            description: new.description,
            image_url: new.image_url,
            price: new.price,
            price_unit: new.price_unit,
            rating: new.rating.unwrap_or(0),
            location: new.location,
            created_at: Utc::now(),
        };

        self.services.write().await.push(service.clone());
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_destination() -> NewDestination {
        NewDestination {
            name: "Patratu Valley".to_string(),
            description: "Winding valley road with lake views".to_string(),
            location: "Patratu, Jharkhand".to_string(),
            image_url: String::new(),
            rating: None,
            price_per_person: 3000,
            recommended_days: 1,
            category: "hill-station".to_string(),
            features: None,
        }
    }

    #[tokio::test]
    async fn create_applies_schema_defaults() {
        let store = MemoryStorage::new();
        let created = store.create_destination(sample_destination()).await.unwrap();

        assert_eq!(created.rating, 0);
        assert!(created.features.is_empty());
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn lookup_by_id() {
        let store = MemoryStorage::seeded();

        let found = store.destination("dest-4").await.unwrap().unwrap();
        assert_eq!(found.name, "Betla National Park");

        assert!(store.destination("dest-999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let store = MemoryStorage::new();
        let first = store.create_destination(sample_destination()).await.unwrap();
        let second = store.create_destination(sample_destination()).await.unwrap();

        let all = store.destinations().await.unwrap();
        assert_eq!(
            all.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            vec![first.id.as_str(), second.id.as_str()]
        );
    }

    #[tokio::test]
    async fn reviews_filter_by_destination() {
        let store = MemoryStorage::seeded();

        let for_dest1 = store.reviews_by_destination("dest-1").await.unwrap();
        assert_eq!(for_dest1.len(), 1);
        assert_eq!(for_dest1[0].user_name, "Priya Sharma");

        assert_eq!(store.reviews().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn services_filter_by_category() {
        let store = MemoryStorage::seeded();

        let guides = store.services_by_category("guide").await.unwrap();
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].name, "Expert Local Guide");

        assert!(store.services_by_category("spa").await.unwrap().is_empty());
    }
}
