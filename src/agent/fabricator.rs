// src/agent/fabricator.rs
// Offline stand-in for the model: builds a complete, plausible-looking plan from
// whatever trip details can be pulled out of the conversation by string matching.
use crate::conversation::classifier::{trip_messages, user_messages};
use crate::models::chat::Message;
use crate::models::trip::{Activity, DayPlan, GeneratedTrip, GeoCoordinates, Hotel, TripPlan};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

pub const DEFAULT_SOURCE: &str = "Your Location";
pub const DEFAULT_DESTINATION: &str = "Your Destination";
pub const DEFAULT_DAYS: usize = 5;
/// Upper bound on fabricated days so a stray "99999999 days" cannot exhaust memory.
pub const MAX_FABRICATED_DAYS: usize = 1000;

const BASE_LATITUDE: f64 = 23.0225;
const BASE_LONGITUDE: f64 = 72.5714;
const DAY_OFFSET: f64 = 0.01;

lazy_static! {
    static ref DAY_COUNT: Regex = Regex::new(r"(?i)([0-9]+)\s*days?").unwrap();
    static ref LOW_BUDGET: Regex = Regex::new(r"\b(cheap|low)\b").unwrap();
    static ref HIGH_BUDGET: Regex = Regex::new(r"\b(luxury|high)\b").unwrap();
    static ref FAMILY: Regex = Regex::new(r"\bfamily\b").unwrap();
    static ref COUPLE: Regex = Regex::new(r"\bcouple\b").unwrap();
    static ref FRIENDS: Regex = Regex::new(r"\bfriends\b").unwrap();
}

// (theme, first stop, first stop details, second stop, second stop details); "{city}" is substituted.
const DAY_TEMPLATES: [(&str, &str, &str, &str, &str); 5] = [
    (
        "Historical Sites and Local Markets",
        "{city} Heritage Museum",
        "Explore the rich history and cultural heritage of {city} through artifacts and exhibits",
        "{city} City Center",
        "Walk through the bustling city center and experience local life in {city}",
    ),
    (
        "Cultural Heritage and Museums",
        "{city} Palace Complex",
        "Visit the magnificent palace showcasing traditional architecture and royal history",
        "{city} Art Gallery",
        "Discover local art and contemporary culture at {city}'s premier gallery",
    ),
    (
        "Natural Attractions and Gardens",
        "{city} Garden and Lake",
        "Enjoy the natural beauty and peaceful environment of {city}'s gardens",
        "{city} Riverside Walk",
        "Take a peaceful walk along the river and enjoy scenic views of {city}",
    ),
    (
        "Religious Sites and Architecture",
        "{city} Temple Circuit",
        "Experience the spiritual side of {city} with ancient temples and religious sites",
        "{city} Cultural Center",
        "Learn about local traditions and cultural practices at the cultural center",
    ),
    (
        "Local Cuisine and Shopping",
        "{city} Local Market",
        "Shop for local handicrafts and taste authentic cuisine of {city}",
        "{city} Handicraft Village",
        "Visit local artisans and see traditional crafts being made in {city}",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    fn pick<'a>(self, low: &'a str, medium: &'a str, high: &'a str) -> &'a str {
        match self {
            BudgetTier::Low => low,
            BudgetTier::Medium => medium,
            BudgetTier::High => high,
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pick("Low", "Medium", "High"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Solo,
    Couple,
    Family,
    Friends,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::Solo => "Solo",
            GroupKind::Couple => "Couple",
            GroupKind::Family => "Family",
            GroupKind::Friends => "Friends",
        };
        f.write_str(name)
    }
}

/// Trip attributes recovered from a conversation, with defaults for anything missing.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub source: String,
    pub destination: String,
    pub days: usize,
    pub budget: BudgetTier,
    pub group: GroupKind,
}

impl TripDetails {
    pub fn extract(messages: &[Message]) -> Self {
        let mut answers = trip_messages(messages).map(|m| m.content.trim());
        let source = non_empty_or(answers.next(), DEFAULT_SOURCE);
        let destination = non_empty_or(answers.next(), DEFAULT_DESTINATION);

        let conversation = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let days = DAY_COUNT
            .captures(&conversation)
            .map(|caps| caps[1].parse::<usize>().unwrap_or(MAX_FABRICATED_DAYS))
            .unwrap_or(DEFAULT_DAYS)
            .min(MAX_FABRICATED_DAYS);

        let user_text = user_messages(messages)
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let budget = if LOW_BUDGET.is_match(&user_text) {
            BudgetTier::Low
        } else if HIGH_BUDGET.is_match(&user_text) {
            BudgetTier::High
        } else {
            BudgetTier::Medium
        };
        let group = if FAMILY.is_match(&user_text) {
            GroupKind::Family
        } else if COUPLE.is_match(&user_text) {
            GroupKind::Couple
        } else if FRIENDS.is_match(&user_text) {
            GroupKind::Friends
        } else {
            GroupKind::Solo
        };

        Self {
            source,
            destination,
            days,
            budget,
            group,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Your {}-day {} trip to {} is ready! Check out the detailed itinerary with hotels and activities.",
            self.days, self.group, self.destination
        )
    }

    pub fn build_trip(&self) -> GeneratedTrip {
        GeneratedTrip {
            trip_plan: TripPlan {
                destination: capitalize(&self.destination),
                duration: format!("{} Days", self.days),
                origin: capitalize(&self.source),
                budget: self.budget.to_string(),
                group_size: self.group.to_string(),
                hotels: self.hotels(),
            },
            itinerary: (0..self.days).map(|index| self.day_plan(index)).collect(),
        }
    }

    fn hotels(&self) -> Vec<Hotel> {
        let city = &self.destination;
        vec![
            Hotel {
                hotel_name: format!("Heritage Hotel {}", city),
                hotel_address: format!("Central {}, Near Railway Station", city),
                price_per_night: self
                    .budget
                    .pick("₹1500 per night", "₹2500 per night", "₹5000 per night")
                    .to_string(),
                hotel_image_url: String::new(),
                geo_coordinates: GeoCoordinates::new(BASE_LATITUDE, BASE_LONGITUDE),
                rating: 4.2,
                description: format!("A comfortable hotel in the heart of {} with modern amenities", city),
            },
            Hotel {
                hotel_name: format!("Royal Palace {}", city),
                hotel_address: format!("Old City, {}", city),
                price_per_night: self
                    .budget
                    .pick("₹2000 per night", "₹3500 per night", "₹6000 per night")
                    .to_string(),
                hotel_image_url: String::new(),
                geo_coordinates: GeoCoordinates::new(23.0315, 72.5814),
                rating: 4.5,
                description: format!("Traditional architecture hotel with cultural ambiance in {}", city),
            },
        ]
    }

    fn day_plan(&self, index: usize) -> DayPlan {
        let city = self.destination.as_str();
        let fill = |template: &str| template.replace("{city}", city);
        let (theme, first, first_details, second, second_details) = DAY_TEMPLATES[index % DAY_TEMPLATES.len()];
        let offset = index as f64 * DAY_OFFSET;
        let even = index % 2 == 0;

        let best_time_to_visit_day = if index == 0 {
            "Morning to Evening"
        } else if index + 1 == self.days {
            "Morning to Afternoon"
        } else {
            "Full Day"
        };

        DayPlan {
            day: (index + 1) as u32,
            day_plan: format!("Day {}: Explore {} - {}", index + 1, city, theme),
            best_time_to_visit_day: best_time_to_visit_day.to_string(),
            activities: vec![
                Activity {
                    place_name: fill(first),
                    place_details: fill(first_details),
                    place_image_url: String::new(),
                    geo_coordinates: GeoCoordinates::new(BASE_LATITUDE + offset, BASE_LONGITUDE + offset),
                    place_address: format!("{} City, Tourist Area {}", city, index + 1),
                    ticket_pricing: self
                        .budget
                        .pick("₹100 per person", "₹250 per person", "₹500 per person")
                        .to_string(),
                    time_travel_each_location: "2-3 hours".to_string(),
                    best_time_to_visit: (if even { "Morning" } else { "Evening" }).to_string(),
                },
                Activity {
                    place_name: fill(second),
                    place_details: fill(second_details),
                    place_image_url: String::new(),
                    geo_coordinates: GeoCoordinates::new(23.0325 + offset, 72.5814 + offset),
                    place_address: format!("{} Heritage District", city),
                    ticket_pricing: self
                        .budget
                        .pick("₹150 per person", "₹200 per person", "₹400 per person")
                        .to_string(),
                    time_travel_each_location: "1-2 hours".to_string(),
                    best_time_to_visit: (if even { "Afternoon" } else { "Morning" }).to_string(),
                },
            ],
        }
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(contents: &[&str]) -> Vec<Message> {
        contents.iter().map(|c| Message::user(*c)).collect()
    }

    #[test]
    fn test_full_conversation_scenario() {
        let messages = users(&[
            "Delhi",
            "Paris",
            "Family - 3 to 5 People",
            "Moderate:Keep cost on the average side",
            "5 Days",
        ]);
        let details = TripDetails::extract(&messages);
        let trip = details.build_trip();

        assert_eq!(trip.trip_plan.origin, "Delhi");
        assert_eq!(trip.trip_plan.destination, "Paris");
        assert_eq!(trip.trip_plan.budget, "Medium");
        assert_eq!(trip.trip_plan.group_size, "Family");
        assert_eq!(trip.trip_plan.duration, "5 Days");
        assert_eq!(trip.itinerary.len(), 5);
        assert_eq!(trip.trip_plan.hotels.len(), 2);
        assert!(trip.itinerary.iter().all(|day| day.activities.len() == 2));
    }

    #[test]
    fn test_defaults_for_empty_conversation() {
        let details = TripDetails::extract(&[]);
        assert_eq!(details.source, DEFAULT_SOURCE);
        assert_eq!(details.destination, DEFAULT_DESTINATION);
        assert_eq!(details.days, DEFAULT_DAYS);
        assert_eq!(details.budget, BudgetTier::Medium);
        assert_eq!(details.group, GroupKind::Solo);
        assert_eq!(details.build_trip().itinerary.len(), DEFAULT_DAYS);
    }

    #[test]
    fn test_empty_state_chips_are_skipped_for_source() {
        let details = TripDetails::extract(&users(&["Create new trip", "  mumbai ", "goa"]));
        assert_eq!(details.source, "mumbai");
        assert_eq!(details.destination, "goa");

        let trip = details.build_trip();
        assert_eq!(trip.trip_plan.origin, "Mumbai");
        assert_eq!(trip.trip_plan.destination, "Goa");
        assert_eq!(trip.trip_plan.hotels[0].hotel_name, "Heritage Hotel goa");
    }

    #[test]
    fn test_unbounded_day_count_is_honoured() {
        let trip = TripDetails::extract(&users(&["999 days"])).build_trip();
        assert_eq!(trip.itinerary.len(), 999);
        assert_eq!(trip.itinerary[998].day, 999);
        assert_eq!(trip.trip_plan.duration, "999 Days");
    }

    #[test]
    fn test_absurd_day_count_hits_ceiling() {
        let details = TripDetails::extract(&users(&["123456789012345678901234567890 days"]));
        assert_eq!(details.days, MAX_FABRICATED_DAYS);
    }

    #[test]
    fn test_day_count_found_in_any_message() {
        let messages = vec![
            Message::user("Pune"),
            Message::assistant("A 3 day trip sounds lovely"),
            Message::user("Jaipur"),
        ];
        assert_eq!(TripDetails::extract(&messages).days, 3);
    }

    #[test]
    fn test_budget_and_group_tiers() {
        let low = TripDetails::extract(&users(&["A", "B", "A Couple - 2 People", "Cheap:Stay conscious of costs"]));
        assert_eq!(low.budget, BudgetTier::Low);
        assert_eq!(low.group, GroupKind::Couple);

        let high = TripDetails::extract(&users(&["A", "B", "Friends - 5 to 10 People", "Luxury:Don't worry about cost"]));
        assert_eq!(high.budget, BudgetTier::High);
        assert_eq!(high.group, GroupKind::Friends);

        let trip = high.build_trip();
        assert_eq!(trip.trip_plan.hotels[0].price_per_night, "₹5000 per night");
        assert_eq!(trip.itinerary[0].activities[0].ticket_pricing, "₹500 per person");
    }

    #[test]
    fn test_assistant_prompts_do_not_pick_budget() {
        let messages = vec![
            Message::assistant("What is your preferred budget for this trip (Low, Medium, or High)?"),
            Message::user("Delhi"),
        ];
        assert_eq!(TripDetails::extract(&messages).budget, BudgetTier::Medium);
    }

    #[test]
    fn test_templates_cycle_and_coordinates_shift() {
        let trip = TripDetails::extract(&users(&["Delhi", "Agra", "7 days"])).build_trip();
        let days = &trip.itinerary;

        assert_eq!(days[0].activities[0].place_name, "Agra Heritage Museum");
        assert_eq!(days[5].activities[0].place_name, "Agra Heritage Museum");
        assert_eq!(days[4].activities[1].place_name, "Agra Handicraft Village");
        assert_eq!(days[0].best_time_to_visit_day, "Morning to Evening");
        assert_eq!(days[3].best_time_to_visit_day, "Full Day");
        assert_eq!(days[6].best_time_to_visit_day, "Morning to Afternoon");

        let shift = days[2].activities[0].geo_coordinates.latitude - days[0].activities[0].geo_coordinates.latitude;
        assert!((shift - 0.02).abs() < 1e-9);
        assert!(days.iter().flat_map(|d| &d.activities).all(|a| a.place_image_url.is_empty()));
    }

    #[test]
    fn test_summary_mentions_days_group_and_destination() {
        let details = TripDetails::extract(&users(&["Delhi", "Paris", "3 days"]));
        assert_eq!(
            details.summary(),
            "Your 3-day Solo trip to Paris is ready! Check out the detailed itinerary with hotels and activities."
        );
    }
}
