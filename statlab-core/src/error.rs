//! Errors raised by the numeric contracts.
//!
//! Every failure here is a caller mistake (bad parameter, empty input); none
//! of them are recoverable by retrying.

use thiserror::Error;

use crate::distributions::DistributionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("`{name}` must not be empty")]
    EmptySample { name: &'static str },

    #[error("statistic produced a non-finite value ({value}) at draw {index}")]
    NonFiniteStatistic { index: usize, value: f64 },

    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

impl StatError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        StatError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_argument() {
        let err = StatError::invalid("n_resamples", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid argument `n_resamples`: must be at least 1"
        );

        let err = StatError::EmptySample { name: "sample" };
        assert_eq!(err.to_string(), "`sample` must not be empty");
    }
}
