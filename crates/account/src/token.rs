//! Signed bearer tokens (HS256) carrying the requester's identity

use coursehub_shared::{Error, Result, account::Role};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Empty when a validly signed token carries no username; the gate denies it.
    #[serde(default)]
    pub username: String,
    /// Only consulted by the strict gate. Tokens minted by older signers have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub iat: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role: Some(role),
            iat: 0,
            exp: None,
        }
    }
}

fn now() -> u64 {
    u64::try_from(time::OffsetDateTime::now_utc().unix_timestamp()).unwrap_or_default()
}

/// Signs claims with the process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    lifetime_secs: Option<u64>,
}

impl TokenIssuer {
    /// `lifetime_secs` of `None` mints non-expiring tokens.
    pub fn new(secret: &str, lifetime_secs: Option<u64>) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            lifetime_secs,
        }
    }

    /// Stamps `iat` and, unless the caller already set one, `exp` from the
    /// configured lifetime.
    pub fn issue(&self, mut claims: Claims) -> Result<String> {
        let issued_at = now();
        claims.iat = issued_at;

        if claims.exp.is_none() {
            claims.exp = self.lifetime_secs.map(|lifetime| issued_at + lifetime);
        }

        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| Error::Unknown(e.into()))
    }
}

/// Checks signature and expiry with the process-wide secret
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is optional; it is still enforced whenever present
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    Error::InvalidSignature
                }
                ErrorKind::ExpiredSignature => Error::Expired,
                _ => Error::Malformed,
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new(SECRET, None);
        let verifier = TokenVerifier::new(SECRET);

        let token = issuer.issue(Claims::new("alice", Role::Admin)).unwrap();
        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Some(Role::Admin));
        assert!(claims.iat > 0);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_wrong_secret_fails_with_invalid_signature() {
        let issuer = TokenIssuer::new(SECRET, None);
        let token = issuer.issue(Claims::new("alice", Role::User)).unwrap();

        let result = TokenVerifier::new("another_secret_key_of_at_least_32_chars").verify(&token);
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_tampered_payload_fails_with_invalid_signature() {
        let issuer = TokenIssuer::new(SECRET, None);
        let alice = issuer.issue(Claims::new("alice", Role::User)).unwrap();
        let mallory = TokenIssuer::new("mallory_secret_key_of_at_least_32_chars", None)
            .issue(Claims::new("mallory", Role::Admin))
            .unwrap();

        // mallory's header and payload glued to alice's signature
        let signature = alice.rsplit('.').next().unwrap();
        let (unsigned, _) = mallory.rsplit_once('.').unwrap();
        let forged = format!("{unsigned}.{signature}");

        let result = TokenVerifier::new(SECRET).verify(&forged);
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_garbage_fails_with_malformed() {
        let result = TokenVerifier::new(SECRET).verify("garbage");
        assert!(matches!(result, Err(Error::Malformed)));
    }

    #[test]
    fn test_expired_token_fails_with_expired() {
        let issuer = TokenIssuer::new(SECRET, None);
        let mut claims = Claims::new("alice", Role::Admin);
        claims.exp = Some(now() - 3600);

        let token = issuer.issue(claims).unwrap();

        let result = TokenVerifier::new(SECRET).verify(&token);
        assert!(matches!(result, Err(Error::Expired)));
    }

    #[test]
    fn test_configured_lifetime_sets_exp() {
        let issuer = TokenIssuer::new(SECRET, Some(600));
        let token = issuer.issue(Claims::new("alice", Role::Admin)).unwrap();

        let claims = TokenVerifier::new(SECRET).verify(&token).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 600));
    }

    #[test]
    fn test_token_without_username_still_verifies() {
        #[derive(Serialize)]
        struct Anonymous {
            sub: &'static str,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &Anonymous { sub: "nobody" },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let claims = TokenVerifier::new(SECRET).verify(&token).unwrap();
        assert!(claims.username.is_empty());
        assert_eq!(claims.role, None);
    }
}
