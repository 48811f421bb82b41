//! Error type shared by the adapter, process control and configuration layers.
//! Command handlers never surface these to users directly; they log them and
//! send a generic message instead.

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("{action} failed: {detail}")]
    ActionFailed {
        action: &'static str,
        detail: String,
    },
}

pub type BotResult<T> = Result<T, BotError>;
