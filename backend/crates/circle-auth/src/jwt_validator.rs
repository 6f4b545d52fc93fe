use crate::{AuthError, Claims, Result as AuthErrorResult, TokenType};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Tolerated clock difference between issuer and validator
const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Checks HS256 tokens minted by [`crate::JwtIssuer`] with the same secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Signature, expiry and claim shape, for either token type
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                return Err(AuthError::TokenExpired { location });
            }
            Err(source) => return Err(AuthError::JwtDecode { source, location }),
        };

        claims.validate()?;

        Ok(claims)
    }

    #[track_caller]
    pub fn validate_access(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_as(token, TokenType::Access)
    }

    #[track_caller]
    pub fn validate_refresh(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_as(token, TokenType::Refresh)
    }

    #[track_caller]
    fn validate_as(&self, token: &str, expected: TokenType) -> AuthErrorResult<Claims> {
        let claims = self.validate(token)?;

        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType {
                expected,
                actual: claims.token_type,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}
