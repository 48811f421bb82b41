// Library entry so integration tests can drive the command handlers without a gateway.
// The binary (`main.rs`) only wires these modules to a serenity client.
pub mod adapter;
pub mod audit;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod error;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod process;
pub mod status;
pub mod ui;

pub use error::{BotError, BotResult};
pub use model::AppState;
