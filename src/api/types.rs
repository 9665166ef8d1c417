//! Wire types for the travel discovery API.
//!
//! Field names on the wire are camelCase; structs use serde renames rather
//! than non-idiomatic field names. Everything here is decode-only; this app
//! never posts content back.

use serde::Deserialize;

/// A place inside a category listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub thumbnail: String,
}

/// Destination payload: prose plus the photo set that feeds the header pager.
#[derive(Deserialize, Debug, Clone)]
pub struct DestinationDetails {
    pub description: String,
    pub photos: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    pub description: String,
    pub country: String,
    pub city: String,
    pub popular_dishes: Vec<Dish>,
    pub photos: Vec<String>,
    pub reviews: Vec<Review>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,
    pub price: String,
    pub photo: String,
    pub num_photos: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Review {
    pub user: ReviewUser,
    pub rating: u8,
    pub text: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: String,
    pub followers: u32,
    pub following: u32,
    pub posts: Vec<Post>,
}

/// A creator post. `views` arrives as a preformatted string ("27,492"),
/// not a number, so keep it opaque.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub image_url: String,
    pub views: String,
    pub hashtags: Vec<String>,
}

/// Opaque handle to a remote image resource. The terminal cannot decode
/// pixels, so the handle is carried through the pager and rendered as a
/// resource reference; an external loader would resolve it elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    url: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Maps a decoded photo list into pager handles.
pub fn image_refs(urls: &[String]) -> Vec<ImageRef> {
    urls.iter().map(ImageRef::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_list_decodes() {
        let json = r#"[
            {"name": "Sushi House", "thumbnail": "https://img.example/sushi.jpg"},
            {"name": "Tapas Bar", "thumbnail": "https://img.example/tapas.jpg"}
        ]"#;
        let places: Vec<Place> = serde_json::from_str(json).unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Sushi House");
        assert_eq!(places[1].thumbnail, "https://img.example/tapas.jpg");
    }

    #[test]
    fn test_restaurant_details_decodes_camel_case() {
        let json = r#"{
            "description": "Famous for tapas.",
            "country": "Japan",
            "city": "Tokyo",
            "popularDishes": [
                {"name": "Gyoza", "price": "$8.99", "photo": "https://img.example/gyoza.jpg", "numPhotos": 12}
            ],
            "photos": ["https://img.example/a.jpg"],
            "reviews": [
                {
                    "user": {"username": "amyadams", "firstName": "Amy", "lastName": "Adams", "profileImage": "https://img.example/amy.jpg"},
                    "rating": 5,
                    "text": "Wonderful."
                }
            ]
        }"#;
        let details: RestaurantDetails = serde_json::from_str(json).unwrap();

        assert_eq!(details.city, "Tokyo");
        assert_eq!(details.popular_dishes[0].num_photos, 12);
        assert_eq!(details.reviews[0].user.first_name, "Amy");
    }

    #[test]
    fn test_user_details_decodes_with_string_views() {
        let json = r#"{
            "username": "amyadams",
            "firstName": "Amy",
            "lastName": "Adams",
            "profileImage": "https://img.example/amy.jpg",
            "followers": 1234,
            "following": 40,
            "posts": [
                {"title": "Tokyo at night", "imageUrl": "https://img.example/tokyo.jpg", "views": "27,492", "hashtags": ["travel", "night"]}
            ]
        }"#;
        let details: UserDetails = serde_json::from_str(json).unwrap();

        assert_eq!(details.followers, 1234);
        assert_eq!(details.posts[0].views, "27,492");
        assert_eq!(details.posts[0].hashtags, vec!["travel", "night"]);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        // destination payload without photos must not decode silently
        let json = r#"{"description": "no photos key"}"#;
        let result: Result<DestinationDetails, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_image_refs_preserve_order() {
        let urls = vec![
            "https://img.example/1.jpg".to_string(),
            "https://img.example/2.jpg".to_string(),
        ];
        let refs = image_refs(&urls);

        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].url(), "https://img.example/1.jpg");
        assert_eq!(refs[1].url(), "https://img.example/2.jpg");
    }
}
