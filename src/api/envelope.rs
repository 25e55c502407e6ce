//! The server's uniform response envelope.

use serde::Deserialize;

use crate::api::error::ApiError;

/// Business status meaning success.
pub const CODE_OK: i32 = 200;
/// Business status meaning the token is missing, expired, or revoked.
pub const CODE_UNAUTHORIZED: i32 = 401;

/// Wire shape of every server response: `{"code": .., "msg": .., "data": ..}`.
///
/// `data` may be absent even on success (mutation endpoints return only
/// the code), so unwrapping yields `Option<T>`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Collapses the envelope into the caller-facing result.
    ///
    /// `code == 200` succeeds with whatever `data` held. `code == 401`
    /// becomes [`ApiError::Unauthorized`]; everything else becomes
    /// [`ApiError::Server`] carrying the server's message.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.code {
            CODE_OK => Ok(self.data),
            CODE_UNAUTHORIZED => Err(ApiError::Unauthorized {
                message: self.message(),
            }),
            code => Err(ApiError::Server {
                code,
                message: self.message(),
            }),
        }
    }

    fn message(&self) -> String {
        match self.msg.as_deref() {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => "Request failed".to_string(),
        }
    }
}

/// For endpoints whose success contract includes a payload.
pub fn required<T>(data: Option<T>) -> Result<T, ApiError> {
    data.ok_or(ApiError::MissingData)
}
