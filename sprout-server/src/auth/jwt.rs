//! JWT token service
//!
//! Issues and verifies the signed bearer tokens that carry the login
//! identity. Tokens are stateless: validity is determined entirely by
//! the HMAC-SHA256 signature and the `exp` claim, so a token cannot
//! be revoked before its natural expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use shared::models::Role;
use thiserror::Error;

/// Token lifetime: 10 hours
const DEFAULT_EXPIRATION_MINUTES: i64 = 600;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: load_secret(),
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
        }
    }
}

/// Claims carried in the signed token body.
///
/// `role` is a list for forward-compatibility with multi-role; only
/// one role is ever issued today. Authorization never trusts this
/// claim directly: authorities are re-derived from the stored user
/// record on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity (email)
    pub sub: String,
    /// Role labels at issuance time
    pub role: Vec<String>,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds), iat + lifetime
    pub exp: i64,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Load the signing secret from the environment, generating a
/// printable development secret when unset.
fn load_secret() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= 32 => secret,
        Ok(_) => {
            tracing::warn!("JWT_SECRET shorter than 32 characters, generating a dev secret");
            generate_printable_secret()
        }
        Err(_) => {
            tracing::warn!("JWT_SECRET not set, generating a temporary development secret");
            generate_printable_secret()
        }
    }
}

/// Generate a 64-character printable secret
pub fn generate_printable_secret() -> String {
    let allowed =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut secret = String::with_capacity(64);
    for _ in 0..64 {
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            // Random source unavailable; dev-only fallback
            return "SproutServerDevelopmentSecret-ChangeMe-0123456789".to_string();
        }
        let idx = (byte[0] as usize) % allowed.len();
        secret.push(allowed.as_bytes()[idx] as char);
    }
    secret
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for the identity: subject = identity, role claim
    /// from the assigned role, expiry = now + configured lifetime.
    pub fn issue(&self, identity: &str, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: identity.to_string(),
            role: vec![role.as_str().to_string()],
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Parse and signature-verify the token without enforcing expiry.
    ///
    /// Expiry is deliberately checked separately ([`Self::is_expired`])
    /// so an expired-but-authentic token can still be distinguished
    /// from a forged one.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp", "iat"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Decode the subject (identity) claim
    pub fn decode_subject(&self, token: &str) -> Result<String, JwtError> {
        Ok(self.decode(token)?.sub)
    }

    /// Decode the role claim
    pub fn decode_roles(&self, token: &str) -> Result<Vec<String>, JwtError> {
        Ok(self.decode(token)?.role)
    }

    /// Whether the token's expiry claim lies in the past
    pub fn is_expired(&self, token: &str) -> Result<bool, JwtError> {
        let claims = self.decode(token)?;
        Ok(claims.exp < Utc::now().timestamp())
    }

    /// Well-formed, correctly signed, unexpired, and bound to the
    /// expected identity. Does not consult the durable store.
    pub fn is_valid(&self, token: &str, expected_identity: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => {
                claims.sub == expected_identity && claims.exp >= Utc::now().timestamp()
            }
            Err(_) => false,
        }
    }

    /// Extract the token from an `Authorization` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}
