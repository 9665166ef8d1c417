//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{
    DestinationDetails, DiscoveryApi, Dish, FetchError, Place, Post, RestaurantDetails, Review,
    ReviewUser, UserDetails,
};

/// A canned [`DiscoveryApi`] for screen tests that must not hit the network.
pub struct StubApi {
    failure_status: Option<u16>,
}

impl StubApi {
    /// Every endpoint answers with its sample payload.
    pub fn ok() -> Self {
        Self {
            failure_status: None,
        }
    }

    /// Every endpoint fails with the given HTTP status.
    pub fn failing_with_status(status: u16) -> Self {
        Self {
            failure_status: Some(status),
        }
    }

    fn fail<T>(&self) -> Option<Result<T, FetchError>> {
        self.failure_status
            .map(|status| Err(FetchError::Status(status)))
    }
}

#[async_trait]
impl DiscoveryApi for StubApi {
    async fn category_places(&self, _name: &str) -> Result<Vec<Place>, FetchError> {
        self.fail().unwrap_or_else(|| Ok(sample_places()))
    }

    async fn destination_details(&self, _name: &str) -> Result<DestinationDetails, FetchError> {
        self.fail().unwrap_or_else(|| Ok(sample_destination_details()))
    }

    async fn restaurant_details(&self, _id: u32) -> Result<RestaurantDetails, FetchError> {
        self.fail().unwrap_or_else(|| Ok(sample_restaurant_details()))
    }

    async fn user_details(&self, _id: u32) -> Result<UserDetails, FetchError> {
        self.fail().unwrap_or_else(|| Ok(sample_user_details()))
    }
}

pub fn sample_places() -> Vec<Place> {
    vec![
        Place {
            name: "Sushi House".to_string(),
            thumbnail: "https://img.example/sushi.jpg".to_string(),
        },
        Place {
            name: "Tapas Bar".to_string(),
            thumbnail: "https://img.example/tapas.jpg".to_string(),
        },
        Place {
            name: "Noodle Corner".to_string(),
            thumbnail: "https://img.example/noodles.jpg".to_string(),
        },
    ]
}

pub fn sample_destination_details() -> DestinationDetails {
    DestinationDetails {
        description: "A city of lights, museums and long walks along the river.".to_string(),
        photos: vec![
            "https://img.example/paris-1.jpg".to_string(),
            "https://img.example/paris-2.jpg".to_string(),
            "https://img.example/paris-3.jpg".to_string(),
        ],
    }
}

pub fn sample_restaurant_details() -> RestaurantDetails {
    RestaurantDetails {
        description: "Famous for tapas with a Japanese twist.".to_string(),
        country: "Japan".to_string(),
        city: "Tokyo".to_string(),
        popular_dishes: vec![
            Dish {
                name: "Gyoza".to_string(),
                price: "$8.99".to_string(),
                photo: "https://img.example/gyoza.jpg".to_string(),
                num_photos: 12,
            },
            Dish {
                name: "Karaage".to_string(),
                price: "$11.50".to_string(),
                photo: "https://img.example/karaage.jpg".to_string(),
                num_photos: 5,
            },
        ],
        photos: vec![
            "https://img.example/room.jpg".to_string(),
            "https://img.example/bar.jpg".to_string(),
        ],
        reviews: vec![Review {
            user: ReviewUser {
                username: "amyadams".to_string(),
                first_name: "Amy".to_string(),
                last_name: "Adams".to_string(),
                profile_image: "https://img.example/amy.jpg".to_string(),
            },
            rating: 5,
            text: "Wonderful evening, the gyoza is a must.".to_string(),
        }],
    }
}

pub fn sample_user_details() -> UserDetails {
    UserDetails {
        username: "amyadams".to_string(),
        first_name: "Amy".to_string(),
        last_name: "Adams".to_string(),
        profile_image: "https://img.example/amy.jpg".to_string(),
        followers: 1234,
        following: 40,
        posts: vec![Post {
            title: "Tokyo at night".to_string(),
            image_url: "https://img.example/tokyo.jpg".to_string(),
            views: "27,492".to_string(),
            hashtags: vec!["travel".to_string(), "night".to_string()],
        }],
    }
}
