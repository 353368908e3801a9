//! SQLite backend for deployments that outlive the process.
//!
//! The `features` list is stored as a JSON text column; everything else maps
//! straight onto table columns. Listing queries order by rowid so catalog
//! order matches insertion order, same as the in-memory backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{FromRow, SqlitePool};
use tracing::info;
use uuid::Uuid;

use crate::models::{
    Destination, NewDestination, NewReview, NewService, Review, Service,
};
use crate::seed;

use super::{Storage, StorageError};

pub struct DatabaseStorage {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DestinationRow {
    id: String,
    name: String,
    description: String,
    location: String,
    image_url: String,
    rating: i64,
    price_per_person: i64,
    recommended_days: i64,
    category: String,
    features: String,
    created_at: DateTime<Utc>,
}

impl DestinationRow {
    fn into_destination(self) -> Result<Destination, StorageError> {
        Ok(Destination {
            id: self.id,
            name: self.name,
            description: self.description,
            location: self.location,
            image_url: self.image_url,
            rating: self.rating,
            price_per_person: self.price_per_person,
            recommended_days: self.recommended_days,
            category: self.category,
            features: serde_json::from_str(&self.features)?,
            created_at: self.created_at,
        })
    }
}

const SELECT_DESTINATION: &str = "SELECT id, name, description, location, image_url, rating, \
     price_per_person, recommended_days, category, features, created_at FROM destinations";

impl DatabaseStorage {
    /// Connects, runs migrations, and seeds the sample catalog if the
    /// destinations table is empty.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let storage = Self { pool };
        storage.seed_if_empty().await?;

        Ok(storage)
    }

    async fn seed_if_empty(&self) -> Result<(), StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            return Ok(());
        }

        info!("Empty database, seeding sample catalog");

        for dest in seed::seed_destinations() {
            self.insert_destination(&dest).await?;
        }
        for review in seed::seed_reviews() {
            self.insert_review(&review).await?;
        }
        for service in seed::seed_services() {
            self.insert_service(&service).await?;
        }

        Ok(())
    }

    async fn insert_destination(&self, dest: &Destination) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO destinations (id, name, description, location, image_url, rating, \
             price_per_person, recommended_days, category, features, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&dest.id)
        .bind(&dest.name)
        .bind(&dest.description)
        .bind(&dest.location)
        .bind(&dest.image_url)
        .bind(dest.rating)
        .bind(dest.price_per_person)
        .bind(dest.recommended_days)
        .bind(&dest.category)
        .bind(serde_json::to_string(&dest.features)?)
        .bind(dest.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_review(&self, review: &Review) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO reviews (id, destination_id, user_name, user_avatar, rating, comment, \
             location, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&review.id)
        .bind(&review.destination_id)
        .bind(&review.user_name)
        .bind(&review.user_avatar)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(&review.location)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_service(&self, service: &Service) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO services (id, name, category, description, image_url, price, \
             price_unit, rating, location, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&service.id)
        .bind(&service.name)
        .bind(&service.category)
        .bind(&service.description)
        .bind(&service.image_url)
        .bind(service.price)
        .bind(&service.price_unit)
        .bind(service.rating)
        .bind(&service.location)
        .bind(service.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn destinations(&self) -> Result<Vec<Destination>, StorageError> {
        let rows: Vec<DestinationRow> =
            sqlx::query_as(&format!("{SELECT_DESTINATION} ORDER BY rowid"))
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(DestinationRow::into_destination).collect()
    }

    async fn destination(&self, id: &str) -> Result<Option<Destination>, StorageError> {
        let row: Option<DestinationRow> =
            sqlx::query_as(&format!("{SELECT_DESTINATION} WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(DestinationRow::into_destination).transpose()
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

        self.insert_destination(&destination).await?;
        Ok(destination)
    }

    async fn reviews(&self) -> Result<Vec<Review>, StorageError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT id, destination_id, user_name, user_avatar, rating, comment, location, \
             created_at FROM reviews ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    async fn reviews_by_destination(
        &self,
        destination_id: &str,
    ) -> Result<Vec<Review>, StorageError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT id, destination_id, user_name, user_avatar, rating, comment, location, \
             created_at FROM reviews WHERE destination_id = ? ORDER BY rowid",
        )
        .bind(destination_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
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

        self.insert_review(&review).await?;
        Ok(review)
    }

    async fn services(&self) -> Result<Vec<Service>, StorageError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, name, category, description, image_url, price, price_unit, rating, \
             location, created_at FROM services ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    async fn services_by_category(&self, category: &str) -> Result<Vec<Service>, StorageError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, name, category, description, image_url, price, price_unit, rating, \
             location, created_at FROM services WHERE category = ? ORDER BY rowid",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
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

        self.insert_service(&service).await?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Named shared-cache databases: a plain ":memory:" URL gives every pooled
    // connection its own empty database.
    async fn in_memory_db(name: &str) -> DatabaseStorage {
        let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
        DatabaseStorage::connect(&url).await.unwrap()
    }

    #[tokio::test]
    async fn migrates_and_seeds_on_first_connect() {
        let store = in_memory_db("seed_test").await;

        let all = store.destinations().await.unwrap();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].id, "dest-1");
        assert_eq!(all[7].id, "dest-8");
        assert_eq!(all[1].features, vec!["photography", "nature", "swimming", "adventure"]);
    }

    #[tokio::test]
    async fn lookup_and_create_round_trip() {
        let store = in_memory_db("crud_test").await;

        let found = store.destination("dest-6").await.unwrap().unwrap();
        assert_eq!(found.category, "heritage");

        let created = store
            .create_destination(NewDestination {
                name: "Patratu Valley".to_string(),
                description: "Winding valley road with lake views".to_string(),
                location: "Patratu, Jharkhand".to_string(),
                image_url: String::new(),
                rating: None,
                price_per_person: 3000,
                recommended_days: 1,
                category: "hill-station".to_string(),
                features: None,
            })
            .await
            .unwrap();

        assert_eq!(created.rating, 0);
        let all = store.destinations().await.unwrap();
        assert_eq!(all.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn review_and_service_queries() {
        let store = in_memory_db("relations_test").await;

        let for_dest2 = store.reviews_by_destination("dest-2").await.unwrap();
        assert_eq!(for_dest2.len(), 1);
        assert_eq!(for_dest2[0].user_name, "Rajesh Kumar");

        let homestays = store.services_by_category("homestay").await.unwrap();
        assert_eq!(homestays.len(), 1);
        assert_eq!(homestays[0].price, 1500);
    }
}
