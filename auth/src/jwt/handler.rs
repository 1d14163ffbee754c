use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Signing algorithm for every token. Tokens whose header names any other
/// algorithm are rejected on decode.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Only checks the signature and structure;
/// expiry is judged by the caller against its own clock.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Process-wide signing secret
    ///
    /// # Returns
    /// JwtHandler pinned to HS512
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: SIGNING_ALGORITHM,
        })
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a JWT token and check its signature.
    ///
    /// # Errors
    /// * `DecodingFailed` - Malformed token, wrong algorithm, bad signature or
    ///   claims that do not fit `T`
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.leeway = 0;

        let token_data = decode::<T>(token, &self.decoding_key, &validation)
            .map_err(|e| JwtError::DecodingFailed(e.to_string()))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        role: String,
    }

    fn test_claims() -> TestClaims {
        TestClaims {
            sub: "user123".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let token = handler
            .encode(&test_claims())
            .expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: TestClaims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, test_claims());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::MissingSecret)));
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").unwrap();

        let result = handler.decode::<TestClaims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!").unwrap();
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let token = handler1
            .encode(&test_claims())
            .expect("Failed to encode token");

        let result = handler2.decode::<TestClaims>(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_other_algorithm() {
        let secret = b"my_secret_key_at_least_32_bytes_long!";
        let handler = JwtHandler::new(secret).unwrap();

        let hs256_token = encode(
            &Header::new(Algorithm::HS256),
            &test_claims(),
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        assert!(handler.decode::<TestClaims>(&hs256_token).is_err());
    }
}
