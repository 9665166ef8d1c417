//! Static discover-screen catalogs.
//!
//! The discover screen is seeded with a fixed set of categories,
//! destinations, restaurants and creators; only the detail screens go to the
//! network. Restaurant and creator ids line up with the remote records.

pub struct Category {
    pub name: &'static str,
}

pub struct Destination {
    pub name: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub struct Restaurant {
    pub id: u32,
    pub name: &'static str,
}

pub struct Creator {
    pub id: u32,
    pub name: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "Art" },
    Category { name: "Sports" },
    Category { name: "Live events" },
    Category { name: "Food" },
    Category { name: "History" },
    Category { name: "Hot" },
];

pub const DESTINATIONS: &[Destination] = &[
    Destination { name: "Paris", country: "France", latitude: 48.855, longitude: 2.341 },
    Destination { name: "Tokyo", country: "Japan", latitude: 35.678, longitude: 139.76 },
    Destination { name: "New York", country: "USA", latitude: 40.76, longitude: -74.0055 },
];

pub const RESTAURANTS: &[Restaurant] = &[
    Restaurant { id: 0, name: "Japan's Finest Tapas" },
    Restaurant { id: 1, name: "Bar grill" },
];

pub const CREATORS: &[Creator] = &[
    Creator { id: 0, name: "Amy Adams" },
    Creator { id: 1, name: "Billy" },
    Creator { id: 2, name: "Sam Smith" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut restaurant_ids: Vec<u32> = RESTAURANTS.iter().map(|r| r.id).collect();
        restaurant_ids.dedup();
        assert_eq!(restaurant_ids.len(), RESTAURANTS.len());

        let mut creator_ids: Vec<u32> = CREATORS.iter().map(|c| c.id).collect();
        creator_ids.dedup();
        assert_eq!(creator_ids.len(), CREATORS.len());
    }

    #[test]
    fn test_category_names_survive_url_lowercasing() {
        // Every catalog name must stay distinct after the lowercasing the
        // client applies when building the query.
        let mut lowered: Vec<String> = CATEGORIES.iter().map(|c| c.name.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), CATEGORIES.len());
    }
}
