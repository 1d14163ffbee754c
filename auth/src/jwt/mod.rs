pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use claims::Identity;
pub use errors::JwtError;
pub use errors::Unauthorized;
pub use handler::JwtHandler;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use issuer::SESSION_LIFETIME_HOURS;
pub use verifier::TokenVerifier;
