//! Access and refresh token primitives.
//!
//! Access tokens are short-lived HS256 JWTs whose [`Claims`] carry enough
//! identity for an access decision without a database round trip. Refresh
//! tokens are opaque random strings; the server keeps only their SHA-256
//! digest, so a leaked sessions table cannot be replayed.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use riskpilot_core::types::DbId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Payload of an access token.
///
/// `org` is the actor's organisation; consultants operate across the whole
/// portfolio and carry no `org` claim at all.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// Role name, `"consultant"` or `"client"`.
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<DbId>,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Token id, one UUID per issued token.
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty), `JWT_ACCESS_EXPIRY_MINS`
    /// (default 15) and `JWT_REFRESH_EXPIRY_DAYS` (default 7).
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or empty. Refusing to boot beats
    /// signing tokens with a guessable secret.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let minutes = |name: &str, default: i64| -> i64 {
            std::env::var(name)
                .map(|raw| raw.parse().unwrap_or_else(|_| panic!("{name} must be a valid i64")))
                .unwrap_or(default)
        };

        Self {
            secret,
            access_token_expiry_mins: minutes("JWT_ACCESS_EXPIRY_MINS", 15),
            refresh_token_expiry_days: minutes("JWT_REFRESH_EXPIRY_DAYS", 7),
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }

    /// Sign a fresh access token for the given identity.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
        role: &str,
        organisation_id: Option<DbId>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            org: organisation_id,
            exp: iat + self.access_token_expiry_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key())
    }

    /// Verify signature and expiry, returning the claims.
    pub fn decode_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key(), &Validation::default())
            .map(|data| data.claims)
    }
}

/// Mint a refresh token as `(plaintext, sha256_hex)`.
///
/// The plaintext goes to the client once; only the digest is stored.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = hash_refresh_token(&plaintext);
    (plaintext, digest)
}

/// SHA-256 hex digest of a refresh token, for lookup against the stored hash.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
