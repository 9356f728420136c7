use chrono::{DateTime, TimeZone, Utc};
use hex::ToHex;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::tokener::{Payload, Tokener};
use crate::error::Error;

pub fn hash_password(pass: &str, slt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pass);
    hasher.update(slt);
    hasher.finalize().encode_hex()
}

pub fn random_salt() -> String {
    thread_rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Admin identity as configured on the server: the password is only known as a salted digest.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    email: String,
    password_hash: String,
    salt: String,
}

impl AdminCredential {
    pub fn new(email: &str, password_hash: &str, salt: &str) -> Self {
        Self {
            email: email.to_owned(),
            password_hash: password_hash.to_lowercase(),
            salt: salt.to_owned(),
        }
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_ok = constant_time_eq(email.as_bytes(), self.email.as_bytes());
        let password_ok = constant_time_eq(hash_password(password, &self.salt).as_bytes(), self.password_hash.as_bytes());
        email_ok & password_ok
    }
}

#[derive(Debug, Clone)]
pub struct AdminGate {
    pub credential: AdminCredential,
    pub ttl: chrono::Duration,
}

impl AdminGate {
    pub fn new(credential: AdminCredential, ttl: chrono::Duration) -> Self {
        Self { credential, ttl }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Claim {
    pub sub: String,
    pub exp: i64,
}

impl Payload for Claim {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

#[derive(Debug, Serialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

pub fn login<T>(gate: &AdminGate, tokener: &T, email: &str, password: &str, now: DateTime<Utc>) -> Result<Session, Error>
where
    T: Tokener<Claim>,
{
    if !gate.credential.verify(email, password) {
        log::warn!("rejected admin login attempt for {:?}", email);
        return Err(Error::Unauthorized);
    }
    let exp = (now + gate.ttl).timestamp();
    let claim = Claim { sub: email.to_owned(), exp };
    let token = tokener.gen_token(&claim)?;
    let expires_at = Utc.timestamp_opt(exp, 0).single().ok_or_else(|| Error::ServerError("session expiry out of range".into()))?;
    log::info!("admin {} logged in", email);
    Ok(Session {
        token,
        email: email.to_owned(),
        expires_at,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::tokener::jwt::JWT;

    fn gate() -> AdminGate {
        let salt = random_salt();
        let credential = AdminCredential::new("admin@springfall.us", &hash_password("s3cret!", &salt), &salt);
        AdminGate::new(credential, chrono::Duration::minutes(30))
    }

    #[test]
    fn test_hash_password() {
        assert_eq!(hash_password("abc", ""), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
        assert_ne!(hash_password("abc", "x"), hash_password("abc", "y"));
        assert_eq!(random_salt().len(), 32);
    }

    #[test]
    fn test_verify_requires_both_fields() {
        let g = gate();
        assert!(g.credential.verify("admin@springfall.us", "s3cret!"));
        assert!(!g.credential.verify("admin@springfall.us", "s3cret"));
        assert!(!g.credential.verify("Admin@springfall.us", "s3cret!"));
        assert!(!g.credential.verify("admin@springfall.us ", "s3cret!"));
        assert!(!g.credential.verify("", ""));
    }

    #[test]
    fn test_login_issues_expiring_token() {
        let g = gate();
        let jwt = JWT::new(b"0123456789abcdef0123456789abcdef".to_vec());
        let now = Utc::now();
        let session = login(&g, &jwt, "admin@springfall.us", "s3cret!", now).unwrap();
        let claim: Claim = jwt.verify_token(&session.token).unwrap();
        assert_eq!(claim.subject(), "admin@springfall.us");
        assert_eq!(claim.expires_at(), (now + chrono::Duration::minutes(30)).timestamp());
        assert_eq!(session.expires_at.timestamp(), claim.exp);
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let g = gate();
        let jwt = JWT::new(b"0123456789abcdef0123456789abcdef".to_vec());
        let err = login(&g, &jwt, "admin@springfall.us", "guess", Utc::now()).unwrap_err();
        assert!(matches!(err, Error::Unauthorized));
    }
}
