//! The exchange request flow as data.
//!
//! `!exchange` posts the send menu (`AwaitingSendChoice`). Picking a send method
//! produces an [`ExchangeStep`], answered privately with the receive menu
//! (`AwaitingReceiveChoice`). The receive pick ends the flow; nothing is kept
//! between the two interactions.

use crate::interactions::ids;
use crate::ui::MenuOption;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangeStage {
    AwaitingSendChoice,
    AwaitingReceiveChoice,
}

impl ExchangeStage {
    /// Which stage a select menu belongs to, from its custom id.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            ids::EXCHANGE_SELECT => Some(Self::AwaitingSendChoice),
            ids::RECEIVE_SELECT => Some(Self::AwaitingReceiveChoice),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendMethod {
    Paypal,
    CashApp,
    VisaGiftcard,
    Crypto,
}

pub const SEND_OPTIONS: &[MenuOption] = &[
    MenuOption {
        label: "PayPal",
        description: "10% Fee",
        value: "paypal",
    },
    MenuOption {
        label: "Cashapp",
        description: "7-10% Fee",
        value: "cashapp",
    },
    MenuOption {
        label: "Visa Giftcard",
        description: "15% Fee",
        value: "visa_giftcard",
    },
    MenuOption {
        label: "Cryptocurrency",
        description: "5% Fee",
        value: "crypto",
    },
];

pub const CRYPTO_TICKERS: &[MenuOption] = &[
    MenuOption {
        label: "BTC (Bitcoin)",
        description: "5% Fee",
        value: "btc",
    },
    MenuOption {
        label: "LTC (Litecoin)",
        description: "5% Fee",
        value: "ltc",
    },
    MenuOption {
        label: "ETH (Ethereum)",
        description: "5% Fee",
        value: "eth",
    },
];

const RECEIVE_FOR_PAYPAL: &[MenuOption] = &[
    MenuOption {
        label: "CashApp",
        description: "6-10% Fee",
        value: "CashApp",
    },
    MenuOption {
        label: "Crypto",
        description: "8-11% Fee",
        value: "Crypto",
    },
];

const RECEIVE_FOR_CASHAPP: &[MenuOption] = &[
    MenuOption {
        label: "Paypal",
        description: "10% Fee",
        value: "Paypal",
    },
    MenuOption {
        label: "Crypto",
        description: "8-11% Fee",
        value: "Crypto",
    },
];

const RECEIVE_FOR_VISA_GIFTCARD: &[MenuOption] = &[
    MenuOption {
        label: "Paypal",
        description: "10% Fee",
        value: "Paypal",
    },
    MenuOption {
        label: "CashApp",
        description: "8% Fee",
        value: "cashapp",
    },
    MenuOption {
        label: "Crypto",
        description: "8-11% Fee",
        value: "Crypto",
    },
];

impl SendMethod {
    pub const ALL: [SendMethod; 4] = [
        SendMethod::Paypal,
        SendMethod::CashApp,
        SendMethod::VisaGiftcard,
        SendMethod::Crypto,
    ];

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "paypal" => Some(Self::Paypal),
            "cashapp" => Some(Self::CashApp),
            "visa_giftcard" => Some(Self::VisaGiftcard),
            "crypto" => Some(Self::Crypto),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Paypal => "paypal",
            Self::CashApp => "cashapp",
            Self::VisaGiftcard => "visa_giftcard",
            Self::Crypto => "crypto",
        }
    }

    /// Second-menu options: coin tickers for crypto, otherwise the methods the
    /// user can receive, never including the one being sent.
    pub fn follow_up_options(self) -> &'static [MenuOption] {
        match self {
            Self::Paypal => RECEIVE_FOR_PAYPAL,
            Self::CashApp => RECEIVE_FOR_CASHAPP,
            Self::VisaGiftcard => RECEIVE_FOR_VISA_GIFTCARD,
            Self::Crypto => CRYPTO_TICKERS,
        }
    }
}

/// What to show after a send method was picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeStep {
    /// Crypto was picked; ask which coin will be sent.
    CoinTicker,
    /// Ask what the user wants to receive for `method`.
    Receive { method: SendMethod },
    /// A value outside the send menu; there is nothing to offer.
    Unsupported { value: String },
}

impl ExchangeStep {
    pub fn for_selection(value: &str) -> Self {
        match SendMethod::from_value(value) {
            Some(SendMethod::Crypto) => Self::CoinTicker,
            Some(method) => Self::Receive { method },
            None => Self::Unsupported {
                value: value.to_string(),
            },
        }
    }

    pub fn options(&self) -> &'static [MenuOption] {
        match self {
            Self::CoinTicker => SendMethod::Crypto.follow_up_options(),
            Self::Receive { method } => method.follow_up_options(),
            Self::Unsupported { .. } => &[],
        }
    }
}
