//! Utility module - error handling, response envelope, logging

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};

/// API response envelope
///
/// `data` and `error` are omitted when absent, so a bare acknowledgement is
/// `{"success": true}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AppResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl AppResponse<()> {
    /// Acknowledgement without payload
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Plain success flag
    pub fn flag(success: bool) -> Self {
        Self {
            success,
            data: None,
            error: None,
        }
    }
}
