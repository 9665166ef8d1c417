use wayfarer::api::{DiscoveryApi, DiscoveryClient, FetchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn category_body() -> serde_json::Value {
    serde_json::json!([
        {"name": "Sushi House", "thumbnail": "https://img.example/sushi.jpg"},
        {"name": "Tapas Bar", "thumbnail": "https://img.example/tapas.jpg"}
    ])
}

fn restaurant_body() -> serde_json::Value {
    serde_json::json!({
        "description": "Famous for tapas.",
        "country": "Japan",
        "city": "Tokyo",
        "popularDishes": [
            {"name": "Gyoza", "price": "$8.99", "photo": "https://img.example/gyoza.jpg", "numPhotos": 12}
        ],
        "photos": ["https://img.example/a.jpg", "https://img.example/b.jpg"],
        "reviews": [
            {
                "user": {"username": "amyadams", "firstName": "Amy", "lastName": "Adams", "profileImage": "https://img.example/amy.jpg"},
                "rating": 4,
                "text": "Lovely."
            }
        ]
    })
}

// ============================================================================
// Decoding
// ============================================================================

#[tokio::test]
async fn test_category_places_decode_and_lowercased_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category"))
        .and(query_param("name", "food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let places = client.category_places("Food").await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Sushi House");
}

#[tokio::test]
async fn test_category_name_with_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    // The matcher compares the decoded value; the raw request line carries
    // the percent-encoded form.
    Mock::given(method("GET"))
        .and(path("/category"))
        .and(query_param("name", "live events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let places = client.category_places("Live events").await.unwrap();

    assert!(places.is_empty());
}

#[tokio::test]
async fn test_restaurant_details_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/restaurant"))
        .and(query_param("id", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(restaurant_body()))
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let details = client.restaurant_details(0).await.unwrap();

    assert_eq!(details.city, "Tokyo");
    assert_eq!(details.popular_dishes[0].num_photos, 12);
    assert_eq!(details.reviews[0].rating, 4);
    assert_eq!(details.photos.len(), 2);
}

#[tokio::test]
async fn test_destination_details_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/destination"))
        .and(query_param("name", "paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "description": "A city of lights.",
            "photos": ["https://img.example/1.jpg"]
        })))
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let details = client.destination_details("Paris").await.unwrap();

    assert_eq!(details.description, "A city of lights.");
    assert_eq!(details.photos.len(), 1);
}

#[tokio::test]
async fn test_user_details_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(query_param("id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "samsmith",
            "firstName": "Sam",
            "lastName": "Smith",
            "profileImage": "https://img.example/sam.jpg",
            "followers": 53,
            "following": 1,
            "posts": []
        })))
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let details = client.user_details(2).await.unwrap();

    assert_eq!(details.username, "samsmith");
    assert_eq!(details.followers, 53);
}

// ============================================================================
// Error policy
// ============================================================================

#[tokio::test]
async fn test_status_404_wins_over_decodable_body() {
    let mock_server = MockServer::start().await;

    // The body would decode fine; the status must still win.
    Mock::given(method("GET"))
        .and(path("/category"))
        .respond_with(ResponseTemplate::new(404).set_body_json(category_body()))
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let result = client.category_places("food").await;

    assert!(matches!(result, Err(FetchError::Status(404))));
}

#[tokio::test]
async fn test_mismatched_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/destination"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unexpected": true
        })))
        .mount(&mock_server)
        .await;

    let client = DiscoveryClient::new(mock_server.uri());
    let result = client.destination_details("paris").await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Start a server only to learn a port that is then closed again.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = DiscoveryClient::new(uri);
    let result = client.category_places("food").await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_invalid_base_url_fails_before_any_request() {
    let client = DiscoveryClient::new("not a url");
    let result = client.category_places("food").await;

    assert!(matches!(result, Err(FetchError::Decode(msg)) if msg == "invalid endpoint"));
}
