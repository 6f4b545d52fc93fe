pub mod argon2_credential_hasher;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod login_throttle;
pub mod login_throttle_config;
pub mod token_pair;
pub mod token_type;

pub use argon2_credential_hasher::Argon2CredentialHasher;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use login_throttle::LoginThrottle;
pub use login_throttle_config::LoginThrottleConfig;
pub use token_pair::TokenPair;
pub use token_type::TokenType;
