use std::collections::HashSet;

use anyhow::anyhow;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use cb_application::error::AppError;
use cb_core::entities::UserId;

const TOKEN_VALIDITY: Duration = Duration::days(7);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    exp: i64,
    sub: i64,
}

/// Issues and validates the bearer tokens handed out on login.
///
/// The signing secret is generated at startup, so all tokens expire
/// when the server restarts. Blacklisted tokens are kept in memory
/// until then.
pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    blacklist: RwLock<HashSet<String>>,
}

impl JwtState {
    pub fn new() -> Self {
        use rand::RngCore as _;
        let mut secret = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
            blacklist: RwLock::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, user_id: UserId) -> Result<String, AppError> {
        let claims = Claims {
            exp: (OffsetDateTime::now_utc() + TOKEN_VALIDITY).unix_timestamp(),
            sub: user_id.into(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| AppError::Other(anyhow!(err)))
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<UserId, AppError> {
        if self.blacklist.read().contains(token) {
            return Err(AppError::Other(anyhow!("Token has been invalidated")));
        }
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|err| AppError::Other(anyhow!(err)))?;
        Ok(UserId::from(token_data.claims.sub))
    }

    pub fn blacklist_token(&self, token: String) {
        self.blacklist.write().insert(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let state = JwtState::new();
        let user_id = UserId::from(42);
        let token = state.generate_token(user_id).unwrap();
        assert_eq!(
            state.validate_token_and_get_user_id(&token).unwrap(),
            user_id
        );
    }

    #[test]
    fn blacklisted_token_is_rejected() {
        let state = JwtState::new();
        let token = state.generate_token(UserId::from(42)).unwrap();
        state.blacklist_token(token.clone());
        assert!(state.validate_token_and_get_user_id(&token).is_err());
    }

    #[test]
    fn token_from_another_instance_is_rejected() {
        let token = JwtState::new().generate_token(UserId::from(42)).unwrap();
        assert!(JwtState::new()
            .validate_token_and_get_user_id(&token)
            .is_err());
    }
}
