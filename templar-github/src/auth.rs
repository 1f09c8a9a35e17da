//! Access token loading from the process environment.

use crate::error::ApiError;

/// Environment variable holding the GitHub access token.
pub const TOKEN_VAR: &str = "GITHUB_ACCESS_TOKEN";

/// Read the access token, failing pre-flight if it is absent or blank.
///
/// Callers check this before constructing a client so a missing credential
/// terminates the process before any network call is made.
pub fn access_token_from_env() -> Result<String, ApiError> {
    match std::env::var(TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ApiError::MissingToken),
    }
}
