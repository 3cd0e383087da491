use anyhow::{anyhow, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub database_max_connections: u32,
  pub run_migrations: bool,
  pub port: u16,
  pub jwt_secret: String,
  pub jwt_expires_in_secs: i64,
  pub bcrypt_cost: u32,
}

impl Config {
  pub const DEFAULT_PORT: u16 = 5000;
  pub const DEFAULT_JWT_EXPIRES_IN_SECS: i64 = 3600;
  pub const DEFAULT_BCRYPT_COST: u32 = 10;
  pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary key lookup, so tests do not
  /// have to touch the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let database_url = lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
    let jwt_secret = lookup("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
    if jwt_secret.trim().is_empty() {
      return Err(anyhow!("JWT_SECRET must not be empty"));
    }

    let port = match lookup("PORT") {
      Some(raw) => raw.parse::<u16>().context("PORT must be a valid u16 integer")?,
      None => Self::DEFAULT_PORT,
    };

    let jwt_expires_in_secs = match lookup("JWT_EXPIRES_IN_SECS") {
      Some(raw) => raw
        .parse::<i64>()
        .context("JWT_EXPIRES_IN_SECS must be a valid integer")?,
      None => Self::DEFAULT_JWT_EXPIRES_IN_SECS,
    };
    if jwt_expires_in_secs <= 0 {
      return Err(anyhow!("JWT_EXPIRES_IN_SECS must be positive, got {}", jwt_expires_in_secs));
    }

    let bcrypt_cost = match lookup("BCRYPT_COST") {
      Some(raw) => raw.parse::<u32>().context("BCRYPT_COST must be a valid integer")?,
      None => Self::DEFAULT_BCRYPT_COST,
    };
    if !(4..=31).contains(&bcrypt_cost) {
      return Err(anyhow!("BCRYPT_COST must be between 4 and 31, got {}", bcrypt_cost));
    }

    let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
      Some(raw) => raw
        .parse::<u32>()
        .context("DATABASE_MAX_CONNECTIONS must be a valid u32 integer")?,
      None => Self::DEFAULT_MAX_CONNECTIONS,
    };

    let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
      None | Some("true") => true,
      Some("false") => false,
      Some(other) => {
        return Err(anyhow!("RUN_MIGRATIONS must be 'true' or 'false', got '{}'", other));
      }
    };

    Ok(Self {
      database_url,
      database_max_connections,
      run_migrations,
      port,
      jwt_secret,
      jwt_expires_in_secs,
      bcrypt_cost,
    })
  }
}
