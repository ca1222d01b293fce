//! Bearer token issued by the login screen.

use std::fmt;

use zeroize::Zeroize;

use crate::errors::ApiError;

/// Key under which the login screen stores the token in browser storage.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Session token sent as `Authorization: Bearer …`.
#[derive(Clone)]
pub struct BearerToken {
    value: String,
}

impl BearerToken {
    /// Wrap a raw token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when the token is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiError> {
        let mut raw = raw.into();
        let value = raw.trim().to_string();

        raw.zeroize();

        if value.is_empty() {
            return Err(ApiError::MissingToken);
        }

        Ok(Self { value })
    }

    /// Wrap a token read from storage, which may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when the token is absent or blank.
    pub fn from_stored(stored: Option<String>) -> Result<Self, ApiError> {
        stored.map_or(Err(ApiError::MissingToken), Self::new)
    }

    pub(crate) fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(**redacted**)")
    }
}

impl Drop for BearerToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
