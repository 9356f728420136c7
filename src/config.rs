use crate::core::auth::AdminCredential;
use crate::error::Error;

pub static DATABASE_URL: &str = "DATABASE_URL";
pub static BIND_ADDR: &str = "BIND_ADDR";
pub static DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub static UPLOAD_PATH: &str = "UPLOAD_PATH";
pub static JWT_SECRET: &str = "JWT_SECRET";
pub static ADMIN_EMAIL: &str = "ADMIN_EMAIL";
pub static ADMIN_PASSWORD_HASH: &str = "ADMIN_PASSWORD_HASH";
pub static ADMIN_PASSWORD_SALT: &str = "ADMIN_PASSWORD_SALT";
pub static SESSION_TTL_MINUTES: &str = "SESSION_TTL_MINUTES";

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub max_connections: u32,
    pub upload_path: String,
    pub jwt_secret: Vec<u8>,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub admin_password_salt: String,
    pub session_ttl: chrono::Duration,
}

impl Config {
    /// Reads `.env` (if loaded) and the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).filter(|v| !v.is_empty()).ok_or_else(|| Error::ConfigError(format!("environment variable {} not been set", key)));
        let parsed = |key: &str, default: i64| -> Result<i64, Error> {
            match lookup(key) {
                Some(v) => v.parse::<i64>().map_err(|e| Error::ConfigError(format!("{}: {}", key, e))),
                None => Ok(default),
            }
        };

        let jwt_secret = required(JWT_SECRET)?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            log::warn!("{} is shorter than {} bytes", JWT_SECRET, MIN_SECRET_LEN);
        }
        let admin_password_hash = required(ADMIN_PASSWORD_HASH)?.to_lowercase();
        if admin_password_hash.len() != 64 || hex::decode(&admin_password_hash).is_err() {
            return Err(Error::ConfigError(format!("{} must be a hex encoded sha256 digest", ADMIN_PASSWORD_HASH)));
        }
        let max_connections = parsed(DATABASE_MAX_CONNECTIONS, 5)?;
        if max_connections < 1 {
            return Err(Error::ConfigError(format!("{} must be positive", DATABASE_MAX_CONNECTIONS)));
        }
        let ttl = parsed(SESSION_TTL_MINUTES, 480)?;
        if ttl < 1 {
            return Err(Error::ConfigError(format!("{} must be positive", SESSION_TTL_MINUTES)));
        }

        Ok(Config {
            bind_addr: lookup(BIND_ADDR).unwrap_or_else(|| "0.0.0.0:8000".to_owned()),
            database_url: required(DATABASE_URL)?,
            max_connections: max_connections as u32,
            upload_path: lookup(UPLOAD_PATH).unwrap_or_else(|| "uploads".to_owned()),
            jwt_secret: jwt_secret.into_bytes(),
            admin_email: required(ADMIN_EMAIL)?,
            admin_password_hash,
            admin_password_salt: required(ADMIN_PASSWORD_SALT)?,
            session_ttl: chrono::Duration::minutes(ttl),
        })
    }

    pub fn admin_credential(&self) -> AdminCredential {
        AdminCredential::new(&self.admin_email, &self.admin_password_hash, &self.admin_password_salt)
    }
}
