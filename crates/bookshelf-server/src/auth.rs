//! Authentication module: session token service and password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use serde::{Deserialize, Serialize};

/// Session token claims: the authenticated user's id plus the standard
/// expiry and issued-at timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user id.
    pub auth_id: i64,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// Token failures, split by cause so callers can report the reason.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token's expiry timestamp has passed.
    #[error("token is expired")]
    Expired,

    /// The signature does not match the signing secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token could not be decoded at all.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Signing a new token failed.
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Issues and verifies signed session tokens.
///
/// Constructed from an injected secret and expiry window; verification
/// is a pure function of the token string and the secret. There is no
/// server-side revocation.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl TokenService {
    /// Create a token service over the given signing secret.
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Issue a signed token for the given user id.
    pub fn generate(&self, auth_id: i64) -> Result<String, TokenError> {
        let now = chrono::Utc::now();
        let exp = (now + chrono::Duration::hours(self.expiry_hours)).timestamp() as usize;

        let claims = Claims {
            auth_id,
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claims.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiry_hours", &self.expiry_hours)
            .finish_non_exhaustive()
    }
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash. An unparseable hash counts
/// as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hash = hash_password("longenough123").unwrap();
        assert!(verify_password("longenough123", &hash));
        assert!(!verify_password("wrong_password", &hash));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-hash"));
    }

    #[test]
    fn token_round_trip() {
        let tokens = TokenService::new("test_secret_key_12345", 24);
        let token = tokens.generate(42).unwrap();
        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.auth_id, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_fails_with_signature_error() {
        let signer = TokenService::new("secret-one", 24);
        let verifier = TokenService::new("secret-two", 24);
        let token = signer.generate(42).unwrap();
        assert!(matches!(
            verifier.validate(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn expired_token_fails_with_expiry_error() {
        let secret = "test_secret_key_12345";
        let past = chrono::Utc::now().timestamp() as usize - 7200;
        let claims = Claims {
            auth_id: 42,
            exp: past + 3600,
            iat: past,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let tokens = TokenService::new(secret, 24);
        assert!(matches!(tokens.validate(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn garbage_token_fails_as_malformed() {
        let tokens = TokenService::new("test_secret_key_12345", 24);
        assert!(matches!(
            tokens.validate("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
    }
}
