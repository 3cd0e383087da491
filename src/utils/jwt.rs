use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub user_id: Uuid,
  pub iat: usize,
  pub exp: usize,
}

/// HS256 signing keys plus the lifetime given to every issued token.
#[derive(Clone)]
pub struct JwtService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  expires_in: Duration,
}

impl JwtService {
  pub fn new(secret: &str, expires_in_secs: i64) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      expires_in: Duration::seconds(expires_in_secs),
    }
  }

  pub fn encode_jwt(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
      sub: user_id.to_string(),
      user_id,
      iat: now.timestamp() as usize,
      exp: (now + self.expires_in).timestamp() as usize,
    };

    encode(&Header::default(), &claims, &self.encoding_key)
  }

  pub fn decode_jwt(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
    Ok(token_data.claims)
  }
}
