//! Credential verification for link creation requests.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use tracing::error;

use crate::error::AppError;

/// Claims carried by creation tokens.
///
/// All claims are accepted but unused for authorization decisions: any
/// structurally valid, correctly signed token authorizes any operation.
/// `exp`, when present, is enforced by the JWT library.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    #[serde(default)]
    userid: Option<String>,
    #[serde(default)]
    realname: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Service for verifying Bearer credentials on mutating requests.
///
/// Tokens are HS256 JWTs signed with the configured secret. Verification is
/// binary: a valid signature grants full access, and no claim-based
/// authorization is performed.
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Creates a verifier keyed by the signing secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens without an exp claim are accepted; exp is still enforced
        // when present.
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies the `Authorization` header of an inbound request.
    ///
    /// Three rejection exits, all HTTP 403:
    ///
    /// 1. Header absent entirely (an empty value counts as absent)
    /// 2. Scheme is not literally `Bearer`
    /// 3. Token fails signature or structure verification
    ///
    /// The underlying verification failure is logged at error level but
    /// never leaks into the response body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] on any rejection exit.
    pub fn authorize(&self, header: Option<&str>) -> Result<(), AppError> {
        let header = header
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AppError::forbidden("No credentials sent."))?;

        let mut parts = header.splitn(2, ' ');
        if parts.next() != Some("Bearer") {
            return Err(AppError::forbidden("Invalid credentials."));
        }

        let token = parts.next().unwrap_or_default();

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Token verification failed: {e}");
                Err(AppError::forbidden("Invalid credentials."))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    const TEST_SECRET: &str = "test-signing-secret";

    fn mint(claims: &serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn service() -> AuthService {
        AuthService::new(TEST_SECRET)
    }

    #[test]
    fn test_authorize_valid_token() {
        let token = mint(
            &json!({ "userid": "johndoe", "realname": "John Doe" }),
            TEST_SECRET,
        );
        let header = format!("Bearer {token}");

        assert!(service().authorize(Some(&header)).is_ok());
    }

    #[test]
    fn test_authorize_token_without_expiry() {
        // The original tokens carry no exp claim; they must still verify.
        let token = mint(&json!({ "userid": "johndoe" }), TEST_SECRET);
        let header = format!("Bearer {token}");

        assert!(service().authorize(Some(&header)).is_ok());
    }

    #[test]
    fn test_authorize_missing_header() {
        let err = service().authorize(None).unwrap_err();
        assert_eq!(err.to_string(), "No credentials sent.");
    }

    #[test]
    fn test_authorize_empty_header_counts_as_absent() {
        let err = service().authorize(Some("")).unwrap_err();
        assert_eq!(err.to_string(), "No credentials sent.");
    }

    #[test]
    fn test_authorize_wrong_scheme() {
        let err = service()
            .authorize(Some("Invalid Authorization header"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials.");
    }

    #[test]
    fn test_authorize_garbage_token() {
        let err = service().authorize(Some("Bearer not-a-jwt")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials.");
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_authorize_scheme_without_token() {
        assert!(service().authorize(Some("Bearer")).is_err());
        assert!(service().authorize(Some("Bearer ")).is_err());
    }

    #[test]
    fn test_authorize_wrong_secret() {
        let token = mint(&json!({ "userid": "johndoe" }), "another-secret");
        let header = format!("Bearer {token}");

        let err = service().authorize(Some(&header)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials.");
    }

    #[test]
    fn test_authorize_expired_token() {
        let token = mint(&json!({ "userid": "johndoe", "exp": 1 }), TEST_SECRET);
        let header = format!("Bearer {token}");

        let err = service().authorize(Some(&header)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials.");
    }
}
