use thiserror::Error;

#[derive(Error, Debug)]
pub enum NovaError {
    #[error("Insufficient coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u64, available: u64 },

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Theme already owned: {0}")]
    ThemeAlreadyOwned(String),

    #[error("Theme not owned: {0}")]
    ThemeNotOwned(String),

    #[error("Invalid achievement definition: {0}")]
    InvalidAchievement(String),

    #[error("Duplicate achievement id: {0}")]
    DuplicateAchievement(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NovaError>;
