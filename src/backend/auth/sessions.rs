/**
 * Session Tokens
 *
 * Sessions are issued by the login service as HS256 JWTs. This module only
 * needs to verify them, but token creation lives here too so the issuer and
 * the tests share one claims layout.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of a freshly issued staff session
pub const SESSION_TTL_HOURS: i64 = 12;

/// Dashboard role carried in the session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Receptionist,
    Member,
}

impl Role {
    /// Staff roles may produce access events
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Receptionist)
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Dashboard role
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Verified identity of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl TryFrom<Claims> for Session {
    type Error = uuid::Error;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: Uuid::parse_str(&claims.sub)?,
            email: claims.email,
            role: claims.role,
        })
    }
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a session token with the default lifetime
    pub fn create_token(
        &self,
        user_id: Uuid,
        email: String,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_with_ttl(user_id, email, role, Duration::hours(SESSION_TTL_HOURS))
    }

    /// Create a session token expiring `ttl` from now
    pub fn create_token_with_ttl(
        &self,
        user_id: Uuid,
        email: String,
        role: Role,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email,
            role,
            exp: (now + ttl).timestamp().max(0) as u64,
            iat: now.timestamp().max(0) as u64,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify signature and expiry and decode the claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}
