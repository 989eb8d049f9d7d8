use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Seconds before expiry at which an access token is treated as stale.
const EXPIRY_SKEW_SECS: i64 = 30;

#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    #[serde(default)]
    exp: Option<i64>,
}

/// Read the `exp` claim of an access token without verifying its signature.
///
/// The school API signs its own tokens; this server only needs to know when
/// to refresh. Tokens that are not JWTs yield `None`.
pub fn expires_at(token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<ExpiryClaim>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| data.claims.exp)
}

/// True if the token carries an `exp` claim at or before `now` (plus skew).
/// Opaque tokens never expire from this server's point of view.
pub fn is_expired(token: &str, now: i64) -> bool {
    expires_at(token)
        .map(|exp| exp <= now + EXPIRY_SKEW_SECS)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        exp: i64,
        user_id: i64,
    }

    fn token_expiring_at(exp: i64) -> String {
        encode(
            &Header::default(),
            &Claims { exp, user_id: 7 },
            &EncodingKey::from_secret(b"school-api-secret"),
        )
        .unwrap()
    }

    #[test]
    fn reads_exp_without_knowing_the_secret() {
        let token = token_expiring_at(1_900_000_000);
        assert_eq!(expires_at(&token), Some(1_900_000_000));
    }

    #[test]
    fn expired_tokens_are_detected() {
        let now = 1_700_000_000;
        assert!(is_expired(&token_expiring_at(now - 10), now));
        assert!(is_expired(&token_expiring_at(now + 5), now));
        assert!(!is_expired(&token_expiring_at(now + 3600), now));
    }

    #[test]
    fn opaque_tokens_never_expire() {
        assert_eq!(expires_at("3f1c2a9b"), None);
        assert!(!is_expired("3f1c2a9b", 0));
    }
}
