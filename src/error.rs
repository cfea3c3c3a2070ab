use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid amount '{input}': expected pt-BR notation such as 1.234,56")]
    InvalidAmount { input: String },

    #[error("Invalid number '{input}'")]
    InvalidNumber { input: String },

    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Period must be non-negative, got {0}")]
    NegativePeriod(f64),

    #[error("Yearly rate must be greater than -100%, got {0}%")]
    RateBelowTotalLoss(f64),

    #[error("Horizon of {months} months exceeds the limit of {limit} months")]
    HorizonTooLong { months: f64, limit: u32 },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
