use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use thiserror::Error;
use tracing::debug;

use super::identity::Identity;
use crate::models::user;
use crate::serializers::user_auth::Claims;

pub const ISSUER: &str = "moodbot";
pub const AUDIENCE: &str = "moodbot-app";

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed payload, wrong issuer/audience or past expiry.
    #[error("invalid or expired token")]
    InvalidOrExpired,

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies access credentials (HS256 JWTs).
///
/// Built once at startup from the configured secret and shared through
/// `AppState`; verification never touches the database.
#[derive(Clone)]
pub struct TokenCodec {
    enc: Arc<EncodingKey>,
    dec: Arc<DecodingKey>,
    ttl: ChronoDuration,
}

impl TokenCodec {
    pub fn new(secret: &[u8], ttl: ChronoDuration) -> Self {
        Self {
            enc: Arc::new(EncodingKey::from_secret(secret)),
            dec: Arc::new(DecodingKey::from_secret(secret)),
            ttl,
        }
    }

    pub fn issue(&self, user: &user::Model) -> Result<String, TokenError> {
        self.issue_at(&Identity::of(user), Utc::now())
    }

    /// Issue a credential as if the clock read `now`.
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: identity.subject_id,
            role: identity.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            iss: ISSUER.into(),
            aud: AUDIENCE.into(),
        };
        jsonwebtoken::encode(&JwtHeader::new(Algorithm::HS256), &claims, &self.enc)
            .map_err(TokenError::Signing)
    }

    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let mut v = Validation::new(Algorithm::HS256);
        v.validate_exp = true;
        v.leeway = 0;
        v.set_audience(&[AUDIENCE]);
        v.set_issuer(&[ISSUER]);

        match jsonwebtoken::decode::<Claims>(token, &self.dec, &v) {
            Ok(data) => Ok(Identity {
                subject_id: data.claims.sub,
                role: data.claims.role,
            }),
            Err(e) => {
                debug!(kind = ?e.kind(), "credential rejected");
                Err(TokenError::InvalidOrExpired)
            }
        }
    }
}
