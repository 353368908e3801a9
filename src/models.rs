//! Catalog record types.
//!
//! Wire names stay camelCase (`pricePerPerson`, `recommendedDays`, ...) so the
//! JSON matches what the frontend already consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A destination in the catalog.
///
/// `rating` is stored as stars x10 (48 = 4.8 stars) so one decimal of
/// precision survives integer storage. Valid range is 0..=50.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub rating: i64,
    pub price_per_person: i64,
    pub recommended_days: i64,
    pub category: String,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a destination. `id` and `created_at` are assigned by
/// the storage backend; `rating` defaults to 0 and `features` to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    #[serde(default)]
    pub rating: Option<i64>,
    pub price_per_person: i64,
    pub recommended_days: i64,
    pub category: String,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub destination_id: Option<String>,
    pub user_name: String,
    pub user_avatar: String,
    pub rating: i64,
    pub comment: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub destination_id: Option<String>,
    pub user_name: String,
    pub user_avatar: String,
    pub rating: i64,
    pub comment: String,
    pub location: String,
}

/// A marketplace service (homestay, guide, handicraft, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
    pub price_unit: String,
    pub rating: i64,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
    pub price_unit: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
}
