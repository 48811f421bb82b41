use super::state::{ExchangeStep, SEND_OPTIONS};
use crate::interactions::ids;
use crate::ui::SelectMenu;
use crate::ui::style::{brand_embed, brand_footer};
use serenity::builder::CreateEmbed;

const TERMS_URL: &str = "https://discord.com/channels/1280756986669174825/1287095676441722940";

pub fn exchange_embed() -> CreateEmbed {
    brand_embed("💱 Yen Exchange - Request an Exchange")
        .description("Easily request an exchange by selecting the appropriate payment option below. Follow the instructions provided and ensure all fields are correctly filled.")
        .field(
            "📜 **Terms of Service**",
            format!("Please read our [terms-of-service]({TERMS_URL}) before proceeding with any exchange to understand our policies."),
            false,
        )
        .field(
            "💵 **Minimum Fees**",
            "Our minimum service fee is **$5.00 USD**. This fee applies to every exchange and is non-negotiable.",
            false,
        )
        .field(
            "📝 **How It Works**",
            "1. Select a payment option below.\n2. Provide the required details.\n3. Wait for confirmation.",
            false,
        )
        .footer(brand_footer())
}

pub fn send_menu() -> SelectMenu {
    SelectMenu {
        custom_id: ids::EXCHANGE_SELECT,
        placeholder: "Select Option",
        options: SEND_OPTIONS,
    }
}

pub fn step_embed(step: &ExchangeStep) -> CreateEmbed {
    match step {
        ExchangeStep::CoinTicker => brand_embed("Sending Crypto").description(
            "You have selected **Cryptocurrency** as your sending payment. What crypto will you be sending?",
        ),
        ExchangeStep::Receive { method } => receive_embed(method.value()),
        ExchangeStep::Unsupported { value } => receive_embed(value),
    }
}

fn receive_embed(selected: &str) -> CreateEmbed {
    brand_embed("Receiving Payment").description(format!(
        "You have selected **{}** as your sending payment. What would you like to **receive**?",
        selected
    ))
}

/// `None` when the step has no options; Discord rejects empty select menus.
pub fn receive_menu(step: &ExchangeStep) -> Option<SelectMenu> {
    let options = step.options();
    if options.is_empty() {
        return None;
    }
    Some(SelectMenu {
        custom_id: ids::RECEIVE_SELECT,
        placeholder: "Select Receiving Option",
        options,
    })
}
