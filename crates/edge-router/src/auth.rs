//! Basic-auth gate.

use base64::{engine::general_purpose::STANDARD, Engine};
use edge_core::{Authentication, UnauthorizedRoute};

/// Check an `Authorization` header against the configured credentials.
///
/// Returns the unauthorized route to serve, or `None` when access is
/// allowed (including when no credentials are configured).
pub fn check_basic_auth(
    authorization: Option<&str>,
    authentication: Option<&Authentication>,
) -> Option<UnauthorizedRoute> {
    let expected = authentication?;

    let supplied = authorization
        .and_then(|header| header.strip_prefix("Basic "))
        .and_then(|encoded| STANDARD.decode(encoded.trim()).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok());

    let authorized = supplied.is_some_and(|creds| {
        creds
            .split_once(':')
            .is_some_and(|(user, pass)| user == expected.username && pass == expected.password)
    });

    (!authorized).then(UnauthorizedRoute::default)
}
