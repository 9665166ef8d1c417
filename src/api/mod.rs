pub mod client;
pub mod types;

pub use client::{DiscoveryApi, DiscoveryClient, FetchError, DEFAULT_BASE_URL};
pub use types::{
    DestinationDetails, Dish, ImageRef, Place, Post, RestaurantDetails, Review, ReviewUser,
    UserDetails, image_refs,
};
