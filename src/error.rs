//! Error taxonomy for game setup, closed-form odds, and capped play.
//!
//! All validation runs before the first round is drawn, so a failed call never
//! hands back a partial trajectory or chart.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuinError {
    /// Rejected input: probability outside (0,1), empty stake, target not above stake.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A closed-form quantity came out non-finite or outside its range.
    #[error("Numeric overflow computing {quantity} (stake {stake}, target {target}, p = {p})")]
    NumericOverflow {
        quantity: &'static str,
        stake: u32,
        target: u32,
        p: f64,
    },

    /// The walk hit its round cap before reaching 0 or the target.
    #[error("Round limit exceeded: {limit} rounds played, capital still at {capital}")]
    RoundLimitExceeded { limit: u64, capital: u32 },

    #[error("Chart export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, RuinError>;

impl RuinError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RuinError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
