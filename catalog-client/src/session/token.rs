//! Access token payload decoding
//!
//! Tokens are JWTs: `header.payload.signature`. Only the payload is read;
//! signature verification is the backend's job.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use shared::PermissionSet;

use crate::error::TokenError;

/// Decode the JSON claims of a token
pub fn decode_claims(token: &str) -> Result<Map<String, Value>, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed(parts.len()));
    }

    // padding is optional in the wild
    let payload = parts[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(claims)) => Ok(claims),
        Ok(other) => Err(TokenError::Payload(format!("expected an object, got {other}"))),
        Err(e) => Err(TokenError::Payload(e.to_string())),
    }
}

/// Permission set from the `permissions` claim.
///
/// The claim must be a list of strings; an empty or all-unknown list
/// becomes `{no:perms}`.
pub fn decode_permissions(token: &str) -> Result<PermissionSet, TokenError> {
    let claims = decode_claims(token)?;
    let list = claims
        .get("permissions")
        .and_then(Value::as_array)
        .ok_or(TokenError::MissingPermissions)?;

    let scopes = list
        .iter()
        .map(Value::as_str)
        .collect::<Option<Vec<&str>>>()
        .ok_or(TokenError::MissingPermissions)?;

    Ok(PermissionSet::from_claims(scopes))
}

/// Expiry from the `exp` claim (Unix seconds), if the token carries one
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    let exp = decode_claims(token).ok()?.get("exp")?.as_i64()?;
    DateTime::from_timestamp(exp, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Scope;

    fn token_with(payload: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.c2lnbmF0dXJl")
    }

    #[test]
    fn test_decode_permissions() {
        let token = token_with(json!({
            "sub": "auth0|1",
            "permissions": ["read:movies", "create:movies"]
        }));
        let perms = decode_permissions(&token).unwrap();
        assert!(perms.contains(Scope::ReadMovies));
        assert!(perms.contains(Scope::CreateMovies));
        assert!(!perms.contains(Scope::DeleteMovies));
    }

    #[test]
    fn test_empty_permissions_become_sentinel() {
        let token = token_with(json!({"permissions": []}));
        let perms = decode_permissions(&token).unwrap();
        assert!(perms.grants_nothing());
    }

    #[test]
    fn test_missing_permissions_claim_is_an_error() {
        let token = token_with(json!({"sub": "auth0|1"}));
        assert_eq!(
            decode_permissions(&token).unwrap_err(),
            TokenError::MissingPermissions
        );

        let token = token_with(json!({"permissions": "read:movies"}));
        assert_eq!(
            decode_permissions(&token).unwrap_err(),
            TokenError::MissingPermissions
        );

        let token = token_with(json!({"permissions": ["read:movies", 3]}));
        assert_eq!(
            decode_permissions(&token).unwrap_err(),
            TokenError::MissingPermissions
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(
            decode_permissions("opaque-token").unwrap_err(),
            TokenError::Malformed(1)
        );
        assert!(matches!(
            decode_permissions("a.!!!.c").unwrap_err(),
            TokenError::Encoding(_)
        ));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(
            decode_permissions(&not_json).unwrap_err(),
            TokenError::Payload(_)
        ));
    }

    #[test]
    fn test_padded_payload_accepted() {
        let body = base64::engine::general_purpose::URL_SAFE
            .encode(json!({"permissions": ["read:actors"]}).to_string());
        let token = format!("h.{body}.s");
        assert!(decode_permissions(&token).unwrap().contains(Scope::ReadActors));
    }

    #[test]
    fn test_expires_at() {
        let token = token_with(json!({"permissions": [], "exp": 1_900_000_000}));
        let exp = expires_at(&token).unwrap();
        assert_eq!(exp.timestamp(), 1_900_000_000);
        assert_eq!(exp.to_rfc3339(), "2030-03-17T17:46:40+00:00");
        assert_eq!(expires_at("garbage"), None);

        let no_exp = token_with(json!({"permissions": []}));
        assert_eq!(expires_at(&no_exp), None);
    }
}
