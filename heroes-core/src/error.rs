//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use heroes_client::{ApiError, HeroId};

use crate::i18n::Texts;

/// Local draft check that failed before any request was issued.
///
/// Variants are declared in the order the checks run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// Trimmed name is empty
    #[error("name is required")]
    NameRequired,

    /// Trimmed power is empty
    #[error("power is required")]
    PowerRequired,

    /// Raw name is shorter than the minimum
    #[error("name must be at least {min} characters", min = crate::types::NAME_MIN_CHARS)]
    NameTooShort,
}

impl ValidationError {
    /// Localized warning text for this failure.
    pub fn message(self, texts: &Texts) -> &'static str {
        match self {
            Self::NameRequired => texts.validation.name_required,
            Self::PowerRequired => texts.validation.power_required,
            Self::NameTooShort => texts.validation.name_too_short,
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Draft rejected locally
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Fetch-by-id answered without a usable record
    #[error("Hero not found: {0}")]
    NotFoundOnLoad(HeroId),

    /// Remote call failed (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotFoundOnLoad(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }

    /// Wrap a fetch-by-id failure, lifting the client's missing-record case.
    pub fn on_load(err: ApiError) -> Self {
        match err {
            ApiError::HeroNotFound { id } => Self::NotFoundOnLoad(HeroId::new(id)),
            other => Self::Api(other),
        }
    }

    /// Text to show the user.
    ///
    /// Remote failures prefer the server's `message`, then its `errors`, then
    /// `fallback`.
    pub fn user_message(&self, texts: &Texts, fallback: &str) -> String {
        match self {
            Self::Validation(v) => v.message(texts).to_string(),
            Self::NotFoundOnLoad(_) => fallback.to_string(),
            Self::Api(e) => e.display_message(fallback),
        }
    }

    /// Log at `warn` for expected failures, `error` otherwise.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
