use thiserror::Error;

/// Convenient result alias for the stargate library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a vehicle capacity cannot produce a usable fleet.
    #[error("vehicle capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: i64 },

    /// Raised when a fleet size of zero would be used as a divisor.
    #[error("fleet size must be at least 1, got {count}")]
    InvalidFleetSize { count: u32 },

    /// Raised when a currency amount is NaN or infinite.
    #[error("currency amount must be finite, got {value}")]
    NonFiniteAmount { value: f64 },

    /// Raised when a formatted currency string cannot be read back.
    #[error("could not parse currency amount from '{text}'")]
    InvalidCurrencyText { text: String },

    /// Raised when a route has no stops at all.
    #[error("route contained no gates")]
    EmptyRoute,

    /// Raised when a gate code could not be found.
    #[error("unknown gate code: {code}{}", format_suggestions(.suggestions))]
    UnknownGate {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a transport quote request is outside the accepted range.
    #[error("invalid transport quote request: {message}")]
    InvalidQuoteRequest { message: String },

    /// Raised when a cheapest-route request cannot be issued.
    #[error("invalid route request: {message}")]
    InvalidRouteRequest { message: String },

    /// Raised when no API key was configured for the remote client.
    #[error("no API key configured; set STARGATE_API_KEY or pass --api-key")]
    MissingApiKey,

    /// Raised when the remote API answered with an unexpected status.
    #[error("API request to {url} failed with status {status}")]
    ApiStatus { url: String, status: u16 },

    /// Raised when a fixture directory lacks the requested file.
    #[error("fixture file not found: {path}")]
    FixtureMissing { path: std::path::PathBuf },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
