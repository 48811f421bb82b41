//! The `!exchange` post and the private follow-up menus.
mod common;

use common::*;
use serenity::model::id::ChannelId;
use yen_exchange_bot::commands::dispatch;
use yen_exchange_bot::commands::exchange::state::{
    CRYPTO_TICKERS, ExchangeStage, ExchangeStep, SEND_OPTIONS, SendMethod,
};
use yen_exchange_bot::commands::exchange::ui::receive_menu;
use yen_exchange_bot::constants::LOG_CHANNEL_ID;
use yen_exchange_bot::interactions::{ids, route};
use yen_exchange_bot::ui::MenuOption;

fn labels(options: &[MenuOption]) -> Vec<(&str, &str)> {
    options.iter().map(|o| (o.label, o.description)).collect()
}

#[tokio::test]
async fn exchange_posts_menu_logs_and_removes_trigger() {
    let messenger = RecordingMessenger::new();
    let state = app_state(messenger.clone(), Default::default());
    dispatch(&state, &invocation(plain_member(), "!exchange")).await;

    let calls = messenger.calls();
    assert_eq!(calls.len(), 3);
    match &calls[0] {
        Call::Send {
            channel: ch,
            embed: Some(embed),
            menu: Some(menu),
            ..
        } => {
            assert_eq!(*ch, channel());
            assert_eq!(
                embed_str(embed, "title"),
                "💱 Yen Exchange - Request an Exchange"
            );
            assert_eq!(
                embed_fields(embed)
                    .into_iter()
                    .map(|(name, _)| name)
                    .collect::<Vec<_>>(),
                vec![
                    "📜 **Terms of Service**",
                    "💵 **Minimum Fees**",
                    "📝 **How It Works**",
                ]
            );
            assert_eq!(menu.custom_id, ids::EXCHANGE_SELECT);
            assert_eq!(
                menu.values(),
                vec!["paypal", "cashapp", "visa_giftcard", "crypto"]
            );
        }
        other => panic!("expected exchange embed, got {:?}", other),
    }
    assert!(matches!(&calls[1], Call::Send { channel: ch, .. } if *ch == ChannelId::new(LOG_CHANNEL_ID)));
    assert_eq!(
        calls[2],
        Call::Delete {
            channel: channel(),
            message: trigger()
        }
    );
}

#[test]
fn send_menu_fees() {
    assert_eq!(
        labels(SEND_OPTIONS),
        vec![
            ("PayPal", "10% Fee"),
            ("Cashapp", "7-10% Fee"),
            ("Visa Giftcard", "15% Fee"),
            ("Cryptocurrency", "5% Fee"),
        ]
    );
}

#[test]
fn receive_options_never_offer_the_sent_method() {
    for method in SendMethod::ALL {
        let options = method.follow_up_options();
        assert!(!options.is_empty(), "{:?} has no follow-up options", method);
        let sent = method.value().to_ascii_lowercase();
        assert!(
            options
                .iter()
                .all(|o| o.value.to_ascii_lowercase() != sent),
            "{:?} offers itself",
            method
        );
    }
}

#[test]
fn selection_maps_to_steps() {
    assert_eq!(ExchangeStep::for_selection("crypto"), ExchangeStep::CoinTicker);
    assert_eq!(
        ExchangeStep::for_selection("paypal"),
        ExchangeStep::Receive {
            method: SendMethod::Paypal
        }
    );
    assert_eq!(
        ExchangeStep::for_selection("bank_wire"),
        ExchangeStep::Unsupported {
            value: "bank_wire".into()
        }
    );
    assert!(ExchangeStep::for_selection("bank_wire").options().is_empty());
    assert!(receive_menu(&ExchangeStep::for_selection("bank_wire")).is_none());
}

#[test]
fn receive_tables() {
    assert_eq!(
        labels(SendMethod::CashApp.follow_up_options()),
        vec![("Paypal", "10% Fee"), ("Crypto", "8-11% Fee")]
    );
    assert_eq!(
        labels(SendMethod::VisaGiftcard.follow_up_options()),
        vec![("Paypal", "10% Fee"), ("CashApp", "8% Fee"), ("Crypto", "8-11% Fee")]
    );
    assert_eq!(
        CRYPTO_TICKERS.iter().map(|o| o.value).collect::<Vec<_>>(),
        vec!["btc", "ltc", "eth"]
    );
}

#[tokio::test]
async fn paypal_selection_gets_private_two_option_menu() {
    let messenger = RecordingMessenger::new();
    let state = app_state(messenger.clone(), Default::default());
    let handled = route(
        &state,
        &interaction(),
        ids::EXCHANGE_SELECT,
        &["paypal".to_string()],
    )
    .await;
    assert!(handled);

    let calls = messenger.calls();
    assert_eq!(calls.len(), 1, "only a private response, no log");
    match &calls[0] {
        Call::Private {
            embed: Some(embed),
            menu: Some(menu),
            ..
        } => {
            assert_eq!(embed_str(embed, "title"), "Receiving Payment");
            assert!(embed_str(embed, "description").contains("**paypal**"));
            assert_eq!(menu.custom_id, ids::RECEIVE_SELECT);
            assert_eq!(
                labels(menu.options),
                vec![("CashApp", "6-10% Fee"), ("Crypto", "8-11% Fee")]
            );
        }
        other => panic!("expected private menu, got {:?}", other),
    }
}

#[tokio::test]
async fn crypto_selection_gets_tickers() {
    let messenger = RecordingMessenger::new();
    let state = app_state(messenger.clone(), Default::default());
    route(
        &state,
        &interaction(),
        ids::EXCHANGE_SELECT,
        &["crypto".to_string()],
    )
    .await;
    match &messenger.calls()[0] {
        Call::Private {
            embed: Some(embed),
            menu: Some(menu),
            ..
        } => {
            assert_eq!(embed_str(embed, "title"), "Sending Crypto");
            assert!(embed_str(embed, "description").contains("**Cryptocurrency**"));
            assert_eq!(menu.values(), vec!["btc", "ltc", "eth"]);
        }
        other => panic!("expected ticker menu, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_selection_gets_embed_without_menu() {
    let messenger = RecordingMessenger::new();
    let state = app_state(messenger.clone(), Default::default());
    route(
        &state,
        &interaction(),
        ids::EXCHANGE_SELECT,
        &["gold_bars".to_string()],
    )
    .await;
    match messenger.calls().as_slice() {
        [Call::Private {
            content: None,
            embed: Some(embed),
            menu: None,
        }] => {
            assert_eq!(embed_str(embed, "title"), "Receiving Payment");
            assert!(embed_str(embed, "description").contains("**gold_bars**"));
        }
        other => panic!("expected a bare embed, got {:?}", other),
    }
}

#[tokio::test]
async fn receive_pick_is_acknowledged_and_dropped() {
    let messenger = RecordingMessenger::new();
    let state = app_state(messenger.clone(), Default::default());
    route(
        &state,
        &interaction(),
        ids::RECEIVE_SELECT,
        &["Crypto".to_string()],
    )
    .await;
    assert_eq!(messenger.calls(), vec![Call::Acknowledge]);
}

#[tokio::test]
async fn foreign_menus_are_not_handled() {
    let messenger = RecordingMessenger::new();
    let state = app_state(messenger.clone(), Default::default());
    assert!(!route(&state, &interaction(), "help_select_command", &["x".into()]).await);
    assert!(messenger.calls().is_empty());
    assert_eq!(ExchangeStage::from_custom_id("help_select_command"), None);
}
