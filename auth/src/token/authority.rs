use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a shared symmetric secret, so any
/// process holding the secret can issue and verify tokens independently.
/// Stateless: no state is retained between calls.
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_secs: i64,
}

impl TokenAuthority {
    /// Create a token authority.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (at least 256 bits for HS256; validate its
    ///   presence at process start, never per request)
    /// * `ttl_secs` - Lifetime of issued tokens in seconds
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl_secs,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// Claims are `{sub, email, iat, exp}` with `exp` set to the configured
    /// TTL from issuance time.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn issue(&self, subject: &str, email: &str) -> Result<String, TokenError> {
        let claims = Claims::for_user(subject, email, self.ttl_secs);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry and extract its claims.
    ///
    /// # Errors
    /// * `Malformed` - Input is not a well-formed token
    /// * `BadSignature` - Signature does not match the configured secret
    /// * `Expired` - The `exp` claim is in the past
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
