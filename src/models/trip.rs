// src/models/trip.rs
use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoCoordinates {
    #[serde(deserialize_with = "lenient::float")]
    pub latitude: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub price_per_night: String,
    #[serde(deserialize_with = "lenient::string")]
    pub hotel_image_url: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub geo_coordinates: GeoCoordinates,
    #[serde(deserialize_with = "lenient::float")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "lenient::string")]
    pub place_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub place_details: String,
    #[serde(deserialize_with = "lenient::string")]
    pub place_image_url: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub geo_coordinates: GeoCoordinates,
    #[serde(deserialize_with = "lenient::string")]
    pub place_address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ticket_pricing: String,
    #[serde(deserialize_with = "lenient::string")]
    pub time_travel_each_location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub best_time_to_visit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    #[serde(deserialize_with = "lenient::day_number")]
    pub day: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub day_plan: String,
    #[serde(deserialize_with = "lenient::string")]
    pub best_time_to_visit_day: String,
    #[serde(deserialize_with = "lenient::list")]
    pub activities: Vec<Activity>,
}

/// Trip summary and lodging, the `trip_plan` object on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripPlan {
    #[serde(deserialize_with = "lenient::string")]
    pub destination: String,
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::string")]
    pub origin: String,
    #[serde(deserialize_with = "lenient::string")]
    pub budget: String,
    #[serde(deserialize_with = "lenient::string")]
    pub group_size: String,
    #[serde(deserialize_with = "lenient::list")]
    pub hotels: Vec<Hotel>,
}

/// A finished plan: summary plus the day-by-day itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedTrip {
    #[serde(deserialize_with = "lenient::or_default")]
    pub trip_plan: TripPlan,
    #[serde(deserialize_with = "lenient::list")]
    pub itinerary: Vec<DayPlan>,
}

impl GeneratedTrip {
    /// A plan the client can render: it names a destination and has at least one day.
    pub fn is_usable(&self) -> bool {
        !self.trip_plan.destination.trim().is_empty() && !self.itinerary.is_empty()
    }

    pub fn normalize_prices(&mut self) {
        for hotel in &mut self.trip_plan.hotels {
            hotel.price_per_night = crate::currency::format_price_text(&hotel.price_per_night);
        }
        for activity in self.itinerary.iter_mut().flat_map(|day| day.activities.iter_mut()) {
            activity.ticket_pricing = crate::currency::format_price_text(&activity.ticket_pricing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_plan_deserializes_with_defaults() {
        let trip: GeneratedTrip = serde_json::from_value(json!({
            "trip_plan": {
                "destination": "Goa",
                "hotels": [{"hotel_name": "Sea View", "rating": 4.1}]
            },
            "itinerary": [{"day": 1, "activities": [{"place_name": "Baga Beach"}]}]
        }))
        .unwrap();

        assert!(trip.is_usable());
        assert_eq!(trip.trip_plan.hotels[0].geo_coordinates, GeoCoordinates::default());
        assert_eq!(trip.itinerary[0].activities[0].ticket_pricing, "");
    }

    #[test]
    fn test_nulls_and_stringly_typed_fields_are_tolerated() {
        let trip: GeneratedTrip = serde_json::from_str(
            r#"{
                "trip_plan": {
                    "destination": "Paris", "duration": null, "origin": "Delhi", "budget": 3,
                    "hotels": [{
                        "hotel_name": "Le Meurice", "rating": null, "hotel_image_url": null,
                        "geo_coordinates": {"latitude": "48.86", "longitude": null}
                    }]
                },
                "itinerary": [
                    {"day": "1", "day_plan": "Louvre", "activities": null},
                    {"day": 2.0, "day_plan": "Eiffel", "activities": [{"place_name": "Eiffel Tower", "geo_coordinates": null}]}
                ]
            }"#,
        )
        .unwrap();

        assert!(trip.is_usable());
        assert_eq!(trip.trip_plan.duration, "");
        assert_eq!(trip.trip_plan.budget, "3");
        let hotel = &trip.trip_plan.hotels[0];
        assert_eq!(hotel.rating, 0.0);
        assert_eq!(hotel.hotel_image_url, "");
        assert_eq!(hotel.geo_coordinates, GeoCoordinates::new(48.86, 0.0));
        assert_eq!(trip.itinerary[0].day, 1);
        assert!(trip.itinerary[0].activities.is_empty());
        assert_eq!(trip.itinerary[1].day, 2);
        assert_eq!(trip.itinerary[1].activities[0].geo_coordinates, GeoCoordinates::default());
    }

    #[test]
    fn test_null_sections_leave_an_unusable_plan() {
        let trip: GeneratedTrip = serde_json::from_str(r#"{"trip_plan": null, "itinerary": null}"#).unwrap();
        assert!(!trip.is_usable());
    }

    #[test]
    fn test_plan_without_days_is_not_usable() {
        let trip = GeneratedTrip {
            trip_plan: TripPlan {
                destination: "Goa".to_string(),
                ..Default::default()
            },
            itinerary: vec![],
        };
        assert!(!trip.is_usable());
    }

    #[test]
    fn test_normalize_prices_rewrites_foreign_currency() {
        let mut trip = GeneratedTrip {
            trip_plan: TripPlan {
                hotels: vec![Hotel {
                    price_per_night: "$120 per night".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            itinerary: vec![DayPlan {
                day: 1,
                activities: vec![Activity {
                    ticket_pricing: "15 EUR".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };

        trip.normalize_prices();

        assert_eq!(trip.trip_plan.hotels[0].price_per_night, "₹120 per night");
        assert_eq!(trip.itinerary[0].activities[0].ticket_pricing, "15 ₹");
    }
}
