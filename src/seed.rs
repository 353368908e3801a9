//! Seed data loaded once at process start.
//!
//! The catalog order here is the order every endpoint returns; filters are
//! sub-sequence preserving and never reorder.

use chrono::Utc;

use crate::models::{Destination, Review, Service};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_destinations() -> Vec<Destination> {
    let now = Utc::now();

    vec![
        Destination {
            id: "dest-1".to_string(),
            name: "Netarhat".to_string(),
            description: "Queen of Chotanagpur - Famous for mesmerizing sunrises and scenic beauty"
                .to_string(),
            location: "Netarhat, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 48,
            price_per_person: 8000,
            recommended_days: 2,
            category: "hill-station".to_string(),
            features: strings(&["sunrise-point", "nature-trails", "scenic-beauty", "adventure"]),
            created_at: now,
        },
        Destination {
            id: "dest-2".to_string(),
            name: "Dassam Falls".to_string(),
            description: "Spectacular waterfall perfect for nature lovers and photographers"
                .to_string(),
            location: "Taimara, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1519904981063-b0cf448d479e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 46,
            price_per_person: 5500,
            recommended_days: 1,
            category: "waterfall".to_string(),
            features: strings(&["photography", "nature", "swimming", "adventure"]),
            created_at: now,
        },
        Destination {
            id: "dest-3".to_string(),
            name: "Ranchi Heritage".to_string(),
            description: "Rich cultural heritage with historic temples and modern attractions"
                .to_string(),
            location: "Ranchi, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 45,
            price_per_person: 12000,
            recommended_days: 3,
            category: "heritage".to_string(),
            features: strings(&["temples", "museums", "cultural-sites", "cultural"]),
            created_at: now,
        },
        Destination {
            id: "dest-4".to_string(),
            name: "Betla National Park".to_string(),
            description: "Wildlife sanctuary with tigers, elephants and diverse flora and fauna"
                .to_string(),
            location: "Latehar, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1549366021-9f761d040a94?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 47,
            price_per_person: 15000,
            recommended_days: 3,
            category: "wildlife".to_string(),
            features: strings(&["safari", "nature", "wildlife", "photography", "adventure"]),
            created_at: now,
        },
        Destination {
            id: "dest-5".to_string(),
            name: "Hundru Falls".to_string(),
            description: "Majestic waterfall cascading from 320 feet height, perfect for picnics"
                .to_string(),
            location: "Ranchi, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1506197603052-3cc9c3a201bd?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 44,
            price_per_person: 4000,
            recommended_days: 1,
            category: "waterfall".to_string(),
            features: strings(&["picnic", "nature", "photography", "relaxation"]),
            created_at: now,
        },
        Destination {
            id: "dest-6".to_string(),
            name: "Deoghar Temple Complex".to_string(),
            description: "Sacred pilgrimage site with ancient Shiva temples and spiritual atmosphere"
                .to_string(),
            location: "Deoghar, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 49,
            price_per_person: 6000,
            recommended_days: 2,
            category: "heritage".to_string(),
            features: strings(&["temples", "pilgrimage", "cultural", "spiritual"]),
            created_at: now,
        },
        Destination {
            id: "dest-7".to_string(),
            name: "Parasnath Hill".to_string(),
            description: "Highest peak in Jharkhand, sacred Jain pilgrimage site with trekking trails"
                .to_string(),
            location: "Giridih, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1464822759844-d150baec93d5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 46,
            price_per_person: 9000,
            recommended_days: 2,
            category: "hill-station".to_string(),
            features: strings(&["trekking", "pilgrimage", "adventure", "nature"]),
            created_at: now,
        },
        Destination {
            id: "dest-8".to_string(),
            name: "Jamshedpur City Tour".to_string(),
            description: "Industrial city with beautiful parks, lakes and modern attractions"
                .to_string(),
            location: "Jamshedpur, Jharkhand".to_string(),
            image_url: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            rating: 43,
            price_per_person: 7500,
            recommended_days: 2,
            category: "city".to_string(),
            features: strings(&["parks", "lakes", "museums", "cultural"]),
            created_at: now,
        },
    ]
}

pub fn seed_reviews() -> Vec<Review> {
    let now = Utc::now();

    vec![
        Review {
            id: "review-1".to_string(),
            destination_id: Some("dest-1".to_string()),
            user_name: "Priya Sharma".to_string(),
            user_avatar: "https://pixabay.com/get/g0540d75090551bfef78705dcb9dd1a26ec01914b0c813d8a00730685d923524a2a49ac8a804ee1aaf443ee2a84b5292b4631daac4c6f8951e7c7daa352c17c11_1280.jpg".to_string(),
            rating: 5,
            comment: "The AI itinerary planner was incredible! It suggested hidden gems in Netarhat that I would never have found on my own. The local guide recommendations were spot on.".to_string(),
            location: "Netarhat, Jharkhand".to_string(),
            created_at: now,
        },
        Review {
            id: "review-2".to_string(),
            destination_id: Some("dest-2".to_string()),
            user_name: "Rajesh Kumar".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150".to_string(),
            rating: 5,
            comment: "Perfect for family trips! The budget planning feature helped us stay within our limits while experiencing everything. The kids loved the interactive map features.".to_string(),
            location: "Dassam Falls, Jharkhand".to_string(),
            created_at: now,
        },
        Review {
            id: "review-3".to_string(),
            destination_id: Some("dest-3".to_string()),
            user_name: "Anjali Singh".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150".to_string(),
            rating: 4,
            comment: "The multilingual chat support made everything so easy! I could ask questions in Hindi and get instant responses. Real-time weather updates were very helpful.".to_string(),
            location: "Ranchi, Jharkhand".to_string(),
            created_at: now,
        },
    ]
}

pub fn seed_services() -> Vec<Service> {
    let now = Utc::now();

    vec![
        Service {
            id: "service-1".to_string(),
            name: "Mountain View Homestay".to_string(),
            category: "homestay".to_string(),
            description: "Experience authentic village life with panoramic mountain views and traditional meals.".to_string(),
            image_url: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            price: 1500,
            price_unit: "per night".to_string(),
            rating: 49,
            location: Some("Netarhat".to_string()),
            created_at: now,
        },
        Service {
            id: "service-2".to_string(),
            name: "Expert Local Guide".to_string(),
            category: "guide".to_string(),
            description: "Professional guide with 15+ years experience. Fluent in Hindi, English, and local dialects.".to_string(),
            image_url: "https://pixabay.com/get/gaabbc5b68008c538ce7e1ae256274f3f931bd27e7d11323a011176ee34e88905dc0b1e028818796a47d3794b5bec6d21c980a8adb5073b7b06a36e0d4ab16e7d_1280.jpg".to_string(),
            price: 2000,
            price_unit: "per day".to_string(),
            rating: 48,
            location: Some("Jharkhand".to_string()),
            created_at: now,
        },
        Service {
            id: "service-3".to_string(),
            name: "Traditional Handicrafts".to_string(),
            category: "handicraft".to_string(),
            description: "Authentic handcrafted items made by local artisans. Perfect souvenirs and gifts.".to_string(),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            price: 500,
            price_unit: "onwards".to_string(),
            rating: 47,
            location: Some("Local Markets".to_string()),
            created_at: now,
        },
    ]
}
