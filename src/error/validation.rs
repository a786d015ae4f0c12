use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing target URI.")]
    MissingTarget,
    #[error("Invalid target URI '{value}': {source}")]
    InvalidTarget {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Target URI '{value}' cannot be used as a base address.")]
    TargetNotAbsolute { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Value must be <= {max}.")]
    ValueTooLarge { max: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
}

impl ValidationError {
    /// True when the error concerns the target address rather than tuning flags.
    #[must_use]
    pub const fn is_target_error(&self) -> bool {
        matches!(
            self,
            Self::MissingTarget | Self::InvalidTarget { .. } | Self::TargetNotAbsolute { .. }
        )
    }
}
