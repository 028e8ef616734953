// src/conversation/classifier.rs
use crate::models::chat::Message;
use lazy_static::lazy_static;
use regex::Regex;

pub const GROUP_SIZE_OPTIONS: [&str; 4] = [
    "just me - 1",
    "a couple - 2 people",
    "family - 3 to 5 people",
    "friends - 5 to 10 people",
];

/// Budget cards are sent as `<title>:<description>`; only the title is matched.
pub const BUDGET_OPTIONS: [&str; 3] = [
    "cheap:stay conscious of costs",
    "moderate:keep cost on the average side",
    "luxury:don't worry about cost",
];

lazy_static! {
    static ref DAYS_SELECTION: Regex = Regex::new(r"(?i)^[0-9]+\s+days?$").unwrap();
}

/// Suggestion chips shown before the user has typed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateOption {
    CreateNewTrip,
    InspireMe,
    HiddenGems,
    AdventureDestinations,
}

impl EmptyStateOption {
    pub const ALL: [EmptyStateOption; 4] = [
        Self::CreateNewTrip,
        Self::InspireMe,
        Self::HiddenGems,
        Self::AdventureDestinations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateNewTrip => "create new trip",
            Self::InspireMe => "inspire me where to go",
            Self::HiddenGems => "discover hidden gems",
            Self::AdventureDestinations => "adventure destinations",
        }
    }

    /// Case-insensitive exact match against the chip labels.
    pub fn parse(content: &str) -> Option<Self> {
        let lowered = content.to_lowercase();
        Self::ALL.into_iter().find(|option| option.label() == lowered)
    }
}

/// A message produced by one of the selection widgets rather than typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    GroupSize,
    Budget,
    Duration,
}

/// Where the conversation stands, judged from the latest user message.
///
/// A widget selection always wins; otherwise the step is the number of
/// free-text answers given so far (source, destination, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Step(usize),
    Selection(Selection),
}

pub fn is_empty_state(content: &str) -> bool {
    EmptyStateOption::parse(content).is_some()
}

/// Recognizes widget output. Group size is checked before budget, budget before days.
pub fn detect_selection(content: &str) -> Option<Selection> {
    let lowered = content.to_lowercase();

    if GROUP_SIZE_OPTIONS.contains(&lowered.as_str()) {
        return Some(Selection::GroupSize);
    }

    let is_budget = BUDGET_OPTIONS.iter().any(|option| {
        let title = option.split_once(':').map_or(*option, |(title, _)| title);
        lowered.contains(title)
    });
    if is_budget {
        return Some(Selection::Budget);
    }

    if DAYS_SELECTION.is_match(content) {
        return Some(Selection::Duration);
    }

    None
}

pub fn user_messages(messages: &[Message]) -> impl Iterator<Item = &Message> {
    messages.iter().filter(|m| m.is_user())
}

/// User messages that carry trip details, in the order they were given.
pub fn trip_messages(messages: &[Message]) -> impl Iterator<Item = &Message> {
    user_messages(messages).filter(|m| !is_empty_state(&m.content))
}

pub fn last_user_content(messages: &[Message]) -> &str {
    user_messages(messages)
        .last()
        .map(|m| m.content.as_str())
        .unwrap_or("")
}

/// Number of free-text answers, ignoring suggestion chips and widget selections.
pub fn conversation_step(messages: &[Message]) -> usize {
    trip_messages(messages)
        .filter(|m| detect_selection(&m.content).is_none())
        .count()
}

pub fn classify(messages: &[Message]) -> Classification {
    match detect_selection(last_user_content(messages)) {
        Some(selection) => Classification::Selection(selection),
        None => Classification::Step(conversation_step(messages)),
    }
}
