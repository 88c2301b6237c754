//! Signs and verifies token strings for one token class

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::TokenError;

/// HMAC signer bound to one secret
///
/// Parsing accepts any algorithm of the HMAC family, rejects every other
/// family, and checks `exp` with no leeway. Expiry surfaces as
/// `TokenError::TokenExpired`.
#[derive(Clone)]
pub struct Signer {
    algorithm: Algorithm,
    encoding_key: Option<EncodingKey>,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("algorithm", &self.algorithm)
            .field("has_secret", &self.encoding_key.is_some())
            .finish()
    }
}

impl Signer {
    /// Creates a signer for `secret`. An empty secret yields a signer that
    /// refuses to sign.
    pub fn new(secret: &str, algorithm: Algorithm) -> Self {
        let encoding_key = if secret.is_empty() {
            None
        } else {
            Some(EncodingKey::from_secret(secret.as_bytes()))
        };

        let mut validation = Validation::new(algorithm);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            algorithm,
            encoding_key,
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Signs a claim set
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let key = self
            .encoding_key
            .as_ref()
            .ok_or(TokenError::TokenGenerationFailed)?;

        encode(&Header::new(self.algorithm), claims, key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Verifies a token string and decodes its claim set
    pub fn parse<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        if self.encoding_key.is_none() {
            return Err(TokenError::InvalidSignature);
        }

        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::InvalidAlgorithm
                }
                ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                    claim: claim.clone(),
                },
                ErrorKind::Json(_) => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            })
    }
}
