//! Central UI style constants and helpers.
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::Timestamp;

pub const COLOR_BRAND: u32 = 0xEB0101; // Yen red

pub const FOOTER_TEXT: &str = "Yen Exchange - Providing seamless currency exchanges.";
pub const FOOTER_ICON_URL: &str = "https://path-to-logo.png";

/// Brand-colored, timestamped embed that every bot embed starts from.
pub fn brand_embed<T: Into<String>>(title: T) -> CreateEmbed {
    CreateEmbed::new()
        .color(COLOR_BRAND)
        .title(title)
        .timestamp(Timestamp::now())
}

pub fn brand_footer() -> CreateEmbedFooter {
    CreateEmbedFooter::new(FOOTER_TEXT).icon_url(FOOTER_ICON_URL)
}
