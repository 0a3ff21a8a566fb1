use jsonwebtoken::{Algorithm, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::jwt_config::JwtConfig;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    user_id: String,
    exp: u64,
}

/// Verifies an HS256 token and returns the `user_id` claim.
pub fn extract_user_id_from_token(token: &str, config: &JwtConfig) -> Result<UserId, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp"]);

    let token_data = decode::<Claims>(token, config.decoding_key(), &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    if token_data.claims.user_id.is_empty() {
        return Err("auth.missing_user_id".to_string());
    }

    Ok(UserId::new(token_data.claims.user_id))
}

/// Viewer of a public endpoint. No `Authorization` header means an anonymous
/// viewer; a header that does not verify is an error.
pub fn optional_viewer(req: &Request) -> Result<Option<UserId>, String> {
    let Some(header) = req.header("Authorization") else {
        return Ok(None);
    };
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| "auth.unsupported_scheme".to_string())?;
    let config = req
        .data::<JwtConfig>()
        .ok_or_else(|| "auth.missing_configuration".to_string())?;

    extract_user_id_from_token(token, config).map(Some)
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub UserId);

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<UserId> {
    let Some(config) = req.data::<JwtConfig>() else {
        tracing::error!("JWT configuration is not attached to the route");
        return None;
    };

    match extract_user_id_from_token(&bearer.token, config) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("JWT auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    const SECRET: &str = "test-secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        user_id: &'a str,
        exp: u64,
    }

    fn now() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn token(user_id: &str, exp: u64, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &TestClaims { user_id, exp },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn should_extract_user_id_from_valid_token() {
        let config = JwtConfig::new(SECRET);

        let result = extract_user_id_from_token(&token("42", now() + 3600, SECRET), &config);

        assert_eq!(result.unwrap(), UserId::new("42"));
    }

    #[test]
    fn should_reject_malformed_token() {
        let result = extract_user_id_from_token("not-a-jwt", &JwtConfig::new(SECRET));

        assert!(result.unwrap_err().contains("auth.token_validation_failed"));
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let config = JwtConfig::new(SECRET);

        let result = extract_user_id_from_token(&token("42", now() + 3600, "other"), &config);

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_expired_token() {
        let config = JwtConfig::new(SECRET);

        let result = extract_user_id_from_token(&token("42", now() - 3600, SECRET), &config);

        assert!(result.is_err());
    }

    #[test]
    fn should_treat_request_without_header_as_anonymous() {
        let req = Request::builder().finish();

        assert_eq!(optional_viewer(&req).unwrap(), None);
    }

    #[test]
    fn should_resolve_viewer_from_bearer_header() {
        let mut req = Request::builder()
            .header("Authorization", format!("Bearer {}", token("7", now() + 3600, SECRET)))
            .finish();
        req.extensions_mut().insert(JwtConfig::new(SECRET));

        assert_eq!(optional_viewer(&req).unwrap(), Some(UserId::new("7")));
    }

    #[test]
    fn should_reject_non_bearer_header() {
        let mut req = Request::builder()
            .header("Authorization", "Basic Zm9vOmJhcg==")
            .finish();
        req.extensions_mut().insert(JwtConfig::new(SECRET));

        assert_eq!(optional_viewer(&req).unwrap_err(), "auth.unsupported_scheme");
    }

    #[test]
    fn should_reject_empty_user_id() {
        let config = JwtConfig::new(SECRET);

        let result = extract_user_id_from_token(&token("", now() + 3600, SECRET), &config);

        assert_eq!(result.unwrap_err(), "auth.missing_user_id");
    }
}
