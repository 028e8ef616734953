// src/currency.rs
// Price strings from the model arrive in whatever currency it picked; the UI shows rupees.
use lazy_static::lazy_static;
use regex::Regex;

const RUPEE: &str = "₹";
const FOREIGN_MARKERS: [&str; 6] = ["$", "€", "£", "USD", "EUR", "GBP"];

lazy_static! {
    static ref FIRST_NUMBER: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Rewrites a free-form price so it reads in rupees.
///
/// Text that already carries `₹` is returned untouched. Known foreign currency
/// symbols and codes are swapped for `₹`; if none were present but the text has a
/// number, the first number is prefixed with `₹`.
pub fn format_price_text(price_text: &str) -> String {
    if price_text.is_empty() || price_text.contains(RUPEE) {
        return price_text.to_string();
    }

    let mut formatted = price_text.to_string();
    for marker in FOREIGN_MARKERS {
        formatted = formatted.replace(marker, RUPEE);
    }

    if !formatted.contains(RUPEE) {
        if let Some(number) = FIRST_NUMBER.find(&formatted) {
            let (start, end) = (number.start(), number.end());
            formatted = format!("{}{}{}{}", &formatted[..start], RUPEE, &formatted[start..end], &formatted[end..]);
        }
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_text_is_untouched() {
        assert_eq!(format_price_text("₹2500 per night"), "₹2500 per night");
        assert_eq!(format_price_text(""), "");
    }

    #[test]
    fn test_foreign_symbols_are_replaced() {
        assert_eq!(format_price_text("$40 per person"), "₹40 per person");
        assert_eq!(format_price_text("€12.50"), "₹12.50");
        assert_eq!(format_price_text("30 GBP"), "30 ₹");
    }

    #[test]
    fn test_bare_number_gets_prefixed() {
        assert_eq!(format_price_text("about 350 per person"), "about ₹350 per person");
        assert_eq!(format_price_text("Free entry"), "Free entry");
    }
}
