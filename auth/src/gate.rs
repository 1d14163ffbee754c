use std::fmt;
use std::sync::Arc;

use cookie::Cookie;
use http::header;
use http::HeaderMap;

use crate::jwt::Claims;
use crate::jwt::TokenVerifier;
use crate::jwt::Unauthorized;

/// Where a deployment expects the session token. Exactly one per gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLocation {
    /// `Authorization: Bearer <token>`
    AuthorizationHeader,

    /// Named cookie holding the raw token
    Cookie(String),
}

/// Predicate over verified claims deciding whether a request may pass.
pub type AdmissionPolicy = Arc<dyn Fn(&Claims) -> bool + Send + Sync>;

/// Admission check run before protected handlers.
///
/// Extracts the token from the configured location, verifies it and applies
/// the optional admission policy. Every failure is the same [`Unauthorized`].
#[derive(Clone)]
pub struct RequestGate {
    verifier: TokenVerifier,
    location: TokenLocation,
    policy: Option<AdmissionPolicy>,
}

impl RequestGate {
    pub fn new(verifier: TokenVerifier, location: TokenLocation) -> Self {
        Self {
            verifier,
            location,
            policy: None,
        }
    }

    /// Install an admission policy evaluated after successful verification.
    pub fn with_policy<F>(mut self, policy: F) -> Self
    where
        F: Fn(&Claims) -> bool + Send + Sync + 'static,
    {
        self.policy = Some(Arc::new(policy));
        self
    }

    /// Admit only the listed subjects. An empty list leaves the gate open to
    /// every authenticated subject.
    pub fn with_allowed_subjects(self, subjects: Vec<String>) -> Self {
        if subjects.is_empty() {
            return self;
        }
        self.with_policy(move |claims| subjects.iter().any(|s| s == &claims.subject))
    }

    pub fn location(&self) -> &TokenLocation {
        &self.location
    }

    /// Decide whether a request carrying `headers` may proceed.
    ///
    /// # Returns
    /// Verified claims to attach to the request
    ///
    /// # Errors
    /// * `Unauthorized` - No token, invalid or expired token, or policy refusal
    pub fn admit(&self, headers: &HeaderMap) -> Result<Claims, Unauthorized> {
        let token = self.extract_token(headers).ok_or_else(|| {
            tracing::debug!(location = ?self.location, "No session token presented");
            Unauthorized
        })?;

        let claims = self.verifier.verify(&token)?;

        if let Some(policy) = &self.policy {
            if !policy(&claims) {
                tracing::debug!(subject = %claims.subject, "Admission policy refused subject");
                return Err(Unauthorized);
            }
        }

        Ok(claims)
    }

    fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        match &self.location {
            TokenLocation::AuthorizationHeader => bearer_token(headers),
            TokenLocation::Cookie(name) => cookie_token(headers, name),
        }
    }
}

impl fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestGate")
            .field("location", &self.location)
            .field("policy", &self.policy.is_some())
            .finish()
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();

    (!token.is_empty()).then(|| token.to_string())
}

fn cookie_token(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use http::HeaderValue;

    use super::*;
    use crate::clock::ManualClock;
    use crate::jwt::Identity;
    use crate::jwt::JwtHandler;
    use crate::jwt::TokenIssuer;

    struct Fixture {
        issuer: TokenIssuer,
        verifier: TokenVerifier,
        clock: Arc<ManualClock>,
    }

    fn fixture() -> Fixture {
        let handler = Arc::new(JwtHandler::new(b"test_secret_key_at_least_32_bytes!").unwrap());
        let clock = Arc::new(ManualClock::starting_now());
        Fixture {
            issuer: TokenIssuer::new(handler.clone(), clock.clone()),
            verifier: TokenVerifier::new(handler, clock.clone()),
            clock,
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_admit_bearer_token() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader);
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        let claims = gate.admit(&bearer(&issued.token)).expect("Should admit");
        assert_eq!(claims.subject, "a@x.com");
        assert!(claims.is_privileged);
    }

    #[test]
    fn test_reject_missing_token() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader);

        assert_eq!(gate.admit(&HeaderMap::new()), Err(Unauthorized));
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader);
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        for scheme in ["bearer", "BEARER", "BeArEr"] {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("{} {}", scheme, issued.token)).unwrap(),
            );

            assert!(gate.admit(&headers).is_ok(), "scheme: {}", scheme);
        }
    }

    #[test]
    fn test_reject_non_bearer_scheme() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader);
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {}", issued.token)).unwrap(),
        );

        assert_eq!(gate.admit(&headers), Err(Unauthorized));
        assert_eq!(gate.admit(&bearer("")), Err(Unauthorized));
    }

    #[test]
    fn test_reject_invalid_and_expired_alike() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader);
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        assert_eq!(gate.admit(&bearer("garbage")), Err(Unauthorized));

        f.clock.advance(Duration::hours(73));
        assert_eq!(gate.admit(&bearer(&issued.token)), Err(Unauthorized));
    }

    #[test]
    fn test_admit_cookie_token() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::Cookie("session".to_string()));
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; session={}", issued.token)).unwrap(),
        );

        let claims = gate.admit(&headers).expect("Should admit");
        assert_eq!(claims.subject, "a@x.com");
    }

    #[test]
    fn test_cookie_gate_ignores_bearer_header() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::Cookie("session".to_string()));
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        assert_eq!(gate.admit(&bearer(&issued.token)), Err(Unauthorized));
    }

    #[test]
    fn test_allowed_subjects_policy() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader)
            .with_allowed_subjects(vec!["test@gmail.com".to_string()]);

        let allowed = f
            .issuer
            .issue(&Identity::new("test@gmail.com", true))
            .unwrap();
        let other = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        assert!(gate.admit(&bearer(&allowed.token)).is_ok());
        assert_eq!(gate.admit(&bearer(&other.token)), Err(Unauthorized));
    }

    #[test]
    fn test_empty_allow_list_admits_everyone() {
        let f = fixture();
        let gate = RequestGate::new(f.verifier, TokenLocation::AuthorizationHeader)
            .with_allowed_subjects(Vec::new());
        let issued = f.issuer.issue(&Identity::new("a@x.com", true)).unwrap();

        assert!(gate.admit(&bearer(&issued.token)).is_ok());
    }
}
