pub mod error;
pub mod jwt;

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
  bcrypt::hash(password, cost)
}

/// Returns `false` both for a mismatch and for a stored hash bcrypt cannot
/// parse, so callers can treat every failure as bad credentials.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
  match bcrypt::verify(password, hashed_password) {
    Ok(matches) => matches,
    Err(e) => {
      tracing::warn!("Stored password hash could not be verified: {}", e);
      false
    }
  }
}
