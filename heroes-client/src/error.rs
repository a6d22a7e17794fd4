use serde::{Deserialize, Serialize};

/// Unified error type for all heroes API operations.
///
/// All variants are serializable for structured error reporting. None of them
/// is retried automatically: every failure is handed back to the caller, which
/// decides what to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Only possible when a timeout was configured on the client.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status.
    ///
    /// `message` and `errors` are lifted from the JSON error body when present.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// The body's `message` field, if it was a non-empty string.
        message: Option<String>,
        /// The body's `errors` sequence rendered as strings.
        errors: Vec<String>,
    },

    /// The server answered with a success status other than the one the
    /// operation expects (e.g. `200` for a create).
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// A fetch-by-id succeeded but the body carried no usable record.
    HeroNotFound {
        /// ID that was requested.
        id: String,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be built from its configuration.
    InvalidConfig {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::HeroNotFound { .. } => true,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::UnexpectedStatus { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. }
            | Self::InvalidConfig { .. } => false,
        }
    }

    /// Message to show the user for this error.
    ///
    /// Precedence: the error body's `message`, then its `errors` joined with
    /// `", "`, then `fallback`.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        if let Self::HttpStatus {
            message, errors, ..
        } = self
        {
            if let Some(message) = message.as_deref().filter(|m| !m.is_empty()) {
                return message.to_string();
            }
            if !errors.is_empty() {
                return errors.join(", ");
            }
        }
        fallback.to_string()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timed out: {detail}"),
            Self::HttpStatus {
                status,
                message,
                errors,
            } => {
                write!(f, "HTTP {status}")?;
                if let Some(msg) = message {
                    write!(f, ": {msg}")?;
                }
                if !errors.is_empty() {
                    write!(f, " [{}]", errors.join(", "))?;
                }
                Ok(())
            }
            Self::UnexpectedStatus { status } => write!(f, "Unexpected HTTP status {status}"),
            Self::HeroNotFound { id } => write!(f, "Hero not found: {id}"),
            Self::ParseError { detail } => write!(f, "Failed to parse response: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "Failed to serialize request: {detail}")
            }
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result alias for heroes API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
