// src/conversation/responses.rs
use super::classifier::{classify, last_user_content, Classification, EmptyStateOption, Selection};
use crate::models::chat::{Message, UiHint};

pub const ASK_SOURCE: &str =
    "Hello! I'm here to help you plan your next adventure. To start, where will you be traveling from?";
pub const ASK_DESTINATION: &str = "Great! And what is your desired destination city or country?";
pub const ASK_GROUP_SIZE: &str =
    "Understood! Who will be traveling with you (Solo, Couple, Family, or Friends)?";
pub const ASK_BUDGET: &str = "Perfect! What is your preferred budget for this trip (Low, Medium, or High)?";
pub const ASK_DURATION: &str = "Got it! Finally, how many days will your trip last?";
pub const GENERATING: &str = "Thank you for the information! I'm now generating a tailored itinerary for your trip. This might take a moment. Please wait...";

fn greeting(option: EmptyStateOption) -> &'static str {
    match option {
        EmptyStateOption::CreateNewTrip => ASK_SOURCE,
        EmptyStateOption::InspireMe => "I'd love to inspire your next adventure! First, let me know where you'll be traveling from, and I can suggest some amazing destinations based on your preferences.",
        EmptyStateOption::HiddenGems => "Exciting! I can help you discover hidden gems and off-the-beaten-path destinations. To get started, where will you be traveling from?",
        EmptyStateOption::AdventureDestinations => "Perfect! I'll help you find thrilling adventure destinations. First, let me know your starting location so I can suggest the best adventure spots for you.",
    }
}

/// Widget to render next: a selection chains to the following widget, and the
/// third free-text step opens the group-size picker.
pub fn select_ui_hint(messages: &[Message]) -> Option<UiHint> {
    match classify(messages) {
        Classification::Selection(Selection::GroupSize) => Some(UiHint::Budget),
        Classification::Selection(Selection::Budget) => Some(UiHint::TripDuration),
        Classification::Selection(Selection::Duration) => Some(UiHint::Final),
        Classification::Step(2) => Some(UiHint::GroupSize),
        Classification::Step(_) => None,
    }
}

/// Scripted assistant reply used whenever the model is unavailable.
pub fn canned_response(messages: &[Message]) -> &'static str {
    if let Some(option) = EmptyStateOption::parse(last_user_content(messages)) {
        return greeting(option);
    }

    match classify(messages) {
        Classification::Selection(Selection::GroupSize) => ASK_BUDGET,
        Classification::Selection(Selection::Budget) => ASK_DURATION,
        Classification::Selection(Selection::Duration) => GENERATING,
        Classification::Step(0) => ASK_SOURCE,
        Classification::Step(1) => ASK_DESTINATION,
        Classification::Step(2) => ASK_GROUP_SIZE,
        Classification::Step(_) => GENERATING,
    }
}
