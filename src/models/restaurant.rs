use serde::{Deserialize, Serialize};

const METERS_PER_MILE: f64 = 1609.34;

/// Miles to whole meters, as the search provider expects its radius.
pub fn miles_to_meters(miles: f64) -> u32 {
    (miles * METERS_PER_MILE).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry from the business-search provider, in the provider's own order.
/// Rating and street address are optional in the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub rating: Option<f64>,
    pub address: Option<String>,
}

impl RestaurantRecord {
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => rating.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn address_label(&self) -> &str {
        self.address.as_deref().unwrap_or("N/A")
    }
}

/// Outcome of a completed search: the resolved inputs plus up to five
/// open restaurants.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub food_type: String,
    pub coordinate: Coordinate,
    pub distance_miles: f64,
    pub restaurants: Vec<RestaurantRecord>,
}

impl SearchSummary {
    /// The display text shown to the user: a header naming the food type,
    /// the resolved coordinates and the distance, then one line per result.
    pub fn render(&self) -> String {
        let mut text = format!(
            "Recommended food type: {}\nLocation: {}, {}\nDistance: {} miles\n",
            self.food_type,
            self.coordinate.latitude,
            self.coordinate.longitude,
            self.distance_miles,
        );

        if self.restaurants.is_empty() {
            text.push_str("No open restaurants found. Try expanding your search criteria.");
        } else {
            text.push_str("\nOpen Restaurants:\n");
            for restaurant in &self.restaurants {
                text.push_str(&format!(
                    "{} - Rating: {}\n",
                    restaurant.name,
                    restaurant.rating_label()
                ));
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, 3219)]
    #[case(0.5, 805)]
    #[case(1.0, 1609)]
    #[case(10.0, 16093)]
    fn converts_miles_to_whole_meters(#[case] miles: f64, #[case] meters: u32) {
        assert_eq!(miles_to_meters(miles), meters);
    }

    fn summary_with(restaurants: Vec<RestaurantRecord>) -> SearchSummary {
        SearchSummary {
            food_type: "tacos".to_string(),
            coordinate: Coordinate {
                latitude: 30.27,
                longitude: -97.74,
            },
            distance_miles: 2.0,
            restaurants,
        }
    }

    #[test]
    fn renders_one_line_per_restaurant() {
        let summary = summary_with(vec![
            RestaurantRecord {
                name: "Taqueria Uno".to_string(),
                rating: Some(4.5),
                address: Some("1 Main St".to_string()),
            },
            RestaurantRecord {
                name: "El Segundo".to_string(),
                rating: None,
                address: None,
            },
        ]);

        let text = summary.render();
        assert!(text.starts_with("Recommended food type: tacos\n"));
        assert!(text.contains("Location: 30.27, -97.74\n"));
        assert!(text.contains("Distance: 2 miles\n"));
        assert!(text.contains("\nOpen Restaurants:\n"));
        assert!(text.contains("Taqueria Uno - Rating: 4.5\n"));
        assert!(text.contains("El Segundo - Rating: N/A\n"));
        assert_eq!(text.matches(" - Rating: ").count(), 2);
    }

    #[test]
    fn renders_not_found_when_list_is_empty() {
        let text = summary_with(Vec::new()).render();
        assert!(text.ends_with("No open restaurants found. Try expanding your search criteria."));
        assert!(!text.contains("Open Restaurants:"));
    }
}
