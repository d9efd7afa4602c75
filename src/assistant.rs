//! Orion, the scripted help assistant shown on every page.
//!
//! Replies are picked by the first matching keyword rule; there is no model
//! behind it.

const CITIES: [&str; 7] = [
    "mumbai",
    "bangalore",
    "delhi",
    "pune",
    "chennai",
    "hyderabad",
    "kolkata",
];

/// Cities that trigger the city reply on their own.
const CITY_TRIGGERS: [&str; 4] = ["mumbai", "bangalore", "delhi", "pune"];

const GREETING: &str = "Hi there! 👋 I'm Orion, your AI assistant. I can help you find properties, answer questions about listings, or guide you through our services. What would you like to know?";

const PRICE: &str = "Our properties range from ₹38 lakhs to ₹4.5 crores across India! You can use the price filter on our listings page (/listings.html#filters) to find properties within your budget. What's your price range?";

const FILTERS: &str = "You can use our powerful filters to search by location, price range, and sort properties. Visit the Listings page (/listings.html#filters) and click on 'Show More' to access advanced filters! 🔍";

const CONTACT: &str = "You can reach us at:\n📧 Email: vardhan24d@gmail.com\n📞 Phone: +91-9508081252\nOr visit our Contact page (/contact.html) to send us a message!";

const HELP: &str = "I can help you with:\n🏠 Finding properties by location\n💰 Filtering by price range\n🔍 Searching listings\n📞 Contact information\n❓ Answering questions about our services\n\nJust ask me anything!";

const THANKS: &str = "You're welcome! 😊 Feel free to ask if you need anything else. Happy house hunting! 🏡";

const PROPERTY_TYPES: &str = "We have a variety of properties including 1BHK, 2BHK, 3BHK, 4BHK apartments, and luxury villas! Head over to our Listings page (/listings.html) to explore all options. What type of property are you looking for?";

const FALLBACK: &str = "I'm here to help! 😊 You can ask me about:\n• Property locations (Mumbai, Bangalore, Delhi, etc.)\n• Price ranges and budgets\n• How to use filters\n• Contact information\n• Property types\n\nWhat would you like to know?";

/// Reply to a visitor message, or `None` for a blank message.
pub fn respond(message: &str) -> Option<String> {
    let message = message.trim();
    if message.is_empty() {
        return None;
    }
    Some(reply_for(&message.to_lowercase()))
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

fn reply_for(message: &str) -> String {
    if contains_any(message, &["hello", "hi", "hey"]) {
        return GREETING.to_string();
    }

    if contains_any(message, &CITY_TRIGGERS) {
        return city_reply(message);
    }

    let canned = if contains_any(message, &["price", "cost", "budget"]) {
        PRICE
    } else if contains_any(message, &["filter", "search"]) {
        FILTERS
    } else if contains_any(message, &["contact", "phone", "email"]) {
        CONTACT
    } else if contains_any(message, &["help", "what can you do"]) {
        HELP
    } else if contains_any(message, &["thank", "thanks"]) {
        THANKS
    } else if contains_any(message, &["2bhk", "3bhk", "4bhk", "villa"]) {
        PROPERTY_TYPES
    } else {
        FALLBACK
    };

    canned.to_string()
}

// The named city is the one appearing earliest in the message.
fn city_reply(message: &str) -> String {
    let city = CITIES
        .iter()
        .filter_map(|city| message.find(city).map(|at| (at, *city)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, city)| city)
        .unwrap_or("that city");

    format!(
        "Great choice! We have amazing properties in {}. You can use our advanced filters (/listings.html#filters) to browse properties in {}. Would you like me to guide you there?",
        capitalize(city),
        city
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
