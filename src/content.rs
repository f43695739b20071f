//! Copy shown in the page sections.

pub const BRAND: &str = "KRISHNA.IO";

pub const HERO_TITLE: &str = "IT'S ME, KRISHNA";
pub const HERO_SUBTITLE: &str = "CLASS 11 PCM | MAHARASHTRA";

/// A persona card. Words wrapped in `*` are drawn in the accent colour.
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
    pub tags: &'static [&'static str],
}

pub const STRATEGIST: Card = Card {
    title: "THE STRATEGIST",
    body: "I don't just trade; I engineer profit. Using *Pine Script* and advanced financial \
           logic, I build custom indicators that decode market movements before they happen.",
    tags: &["TRADINGVIEW", "PYTHON", "MATHS"],
};

pub const ALCHEMIST: Card = Card {
    title: "THE ALCHEMIST",
    body: "Founder of *RECRENZO*. I fuse AI-generated video content with Shopify infrastructure \
           to create high-conversion e-commerce experiences.",
    tags: &["SHOPIFY", "META ADS", "AI VIDEO"],
};

pub const CONTACT_TITLE: &str = "SYSTEM READY";
pub const CONTACT_BUTTON: &str = "INITIATE CONTACT";
pub const CONTACT_LOCATION: &str = "NAGPUR, INDIA";
pub const DEFAULT_CONTACT_ADDRESS: &str = "hello@krishna.io";
