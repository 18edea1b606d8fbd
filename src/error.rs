//! Error types shared by the registry and by provider implementations.

use thiserror::Error;

/// Errors raised by the provider registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A provider name was registered twice. This is a startup
    /// misconfiguration and should abort application startup.
    #[error("translator: register called twice for provider {0:?}")]
    DuplicateProvider(String),

    #[error("translator: unknown provider {0:?}")]
    UnknownProvider(String),
}

/// Errors returned by a provider's `get_langs`, `detect` or `translate`.
///
/// The named variants form a common vocabulary that providers map their
/// vendor-specific failures onto. The registry and the facade never raise
/// them; they only pass provider errors through.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("wrong API key")]
    WrongApiKey,

    #[error("the API key is blocked")]
    BlockedApiKey,

    #[error("unsupported")]
    Unsupported,

    #[error("day limit exceeded")]
    DayLimitExceeded,

    #[error("month limit exceeded")]
    MonthLimitExceeded,

    #[error("exceeded the maximum size of the text")]
    TextTooLong,

    #[error("text can not be translated")]
    TextNotTranslated,

    #[error("translation direction is not supported")]
    DirectionUnsupported,

    /// Any other provider failure, passed through untouched.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl TranslateError {
    /// Quota errors clear up by themselves once the provider's billing
    /// period rolls over; everything else needs caller action.
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::DayLimitExceeded | Self::MonthLimitExceeded)
    }
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, TranslateError>;
