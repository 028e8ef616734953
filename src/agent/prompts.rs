// src/agent/prompts.rs
use crate::conversation::classifier::trip_messages;
use crate::models::chat::Message;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SCHEMA_PLACEHOLDER: Regex = Regex::new(r"\{(source|destination)\}").unwrap();
}

pub const CONVERSATION_PROMPT: &str = r#"You are an AI Trip Planner Agent.
Your goal is to help the user plan a trip by asking one relevant trip-related question at a time.

Only ask questions about the following details in order, and wait for the user's answer before asking the next:

1. Starting location (source)
2. Destination city or country
3. Group size (Solo, Couple, Family, Friends)
4. Budget (Low, Medium, High)
5. Trip duration (number of days)

Once you have collected all 5 required pieces of information (source, destination, group size, budget, and trip duration), you must immediately acknowledge the information and indicate that you are starting to generate the trip plan. Do NOT ask for travel interests or any additional information at this point.

Return a response like: "Thank you for the information! I'm now generating a tailored itinerary for your [X]-day [group size] trip from [source] to [destination] with a [budget] budget. This might take a moment. Please wait..."

Along with the response, also send which UI component to display for generative UI (for example: 'budget/groupSize/tripDuration/Final'),
where Final means the AI is generating the complete final output.

Once all 5 required pieces of information are collected (after trip duration), you MUST return:
{
  "resp": "Thank you message with trip details summary",
  "ui": "Final"
}

Do not ask for travel interests or other optional information after collecting trip duration."#;

const PLAN_SCHEMA: &str = r#"{
  "trip_plan": {
    "destination": "{destination}",
    "duration": "X Days",
    "origin": "{source}",
    "budget": "Low/Medium/High",
    "group_size": "Solo/Couple/Family/Friends",
    "hotels": [
      {
        "hotel_name": "real hotel name",
        "hotel_address": "actual address",
        "price_per_night": "₹XXXX per night",
        "hotel_image_url": "",
        "geo_coordinates": {"latitude": XX.XXXX, "longitude": XX.XXXX},
        "rating": X.X,
        "description": "hotel description"
      }
    ]
  },
  "itinerary": [
    {
      "day": 1,
      "day_plan": "day overview",
      "best_time_to_visit_day": "time recommendation",
      "activities": [
        {
          "place_name": "real attraction name",
          "place_details": "detailed description",
          "place_image_url": "",
          "geo_coordinates": {"latitude": XX.XXXX, "longitude": XX.XXXX},
          "place_address": "actual address",
          "ticket_pricing": "₹XXX per person",
          "time_travel_each_location": "time needed",
          "best_time_to_visit": "optimal time"
        }
      ]
    }
  ]
}"#;

/// Single-turn instruction asking the model for the whole plan as JSON.
pub fn final_plan_prompt(messages: &[Message]) -> String {
    // Answers go into the summary verbatim; only the route names are trimmed.
    let answers: Vec<&str> = trip_messages(messages).map(|m| m.content.as_str()).collect();
    let source = answers.first().map(|s| s.trim()).filter(|s| !s.is_empty()).unwrap_or("Source Location");
    let destination = answers.get(1).map(|s| s.trim()).filter(|s| !s.is_empty()).unwrap_or("Destination");
    let summary = answers.join(". ");
    // One pass, so user text that looks like a placeholder is never substituted again.
    let schema = SCHEMA_PLACEHOLDER.replace_all(PLAN_SCHEMA, |caps: &Captures| {
        if &caps[1] == "source" {
            source
        } else {
            destination
        }
    });

    format!(
        "Generate a comprehensive travel plan for a trip from {source} to {destination}.\n\n\
         User's trip details: {summary}\n\n\
         Create a detailed travel plan with real places, hotels, and activities for the destination mentioned. \
         Include accurate pricing in local currency (convert to ₹ for display), real hotel names, actual tourist attractions, \
         and practical travel information.\n\n\
         Return ONLY valid JSON in this exact format:\n{schema}"
    )
}
