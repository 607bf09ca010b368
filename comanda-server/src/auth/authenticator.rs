//! Credential verification
//!
//! The [`Authenticator`] trait is the single seam between the HTTP layer and
//! identity: swapping in an external identity provider touches nothing else.
//! The default [`PasswordAuthenticator`] verifies argon2 hashes over the
//! seeded user directory.

use chrono::Duration;
use shared::auth::{AuthSession, Credentials, UserRole};
use shared::error::AppError;
use shared::util::now;
use thiserror::Error;

/// A login-capable account
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// None for superadmin accounts
    pub organization_id: Option<String>,
    /// Argon2 PHC string
    pub password_hash: String,
}

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::invalid_credentials(),
            AuthError::Hash(msg) => AppError::internal(msg),
        }
    }
}

/// Credential verification seam
pub trait Authenticator: Send + Sync {
    /// Verify credentials and mint a session, or deny
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;
}

/// Argon2-backed authenticator over an in-memory user directory
pub struct PasswordAuthenticator {
    users: Vec<UserAccount>,
    session_ttl: Duration,
}

impl PasswordAuthenticator {
    pub fn new(users: Vec<UserAccount>, session_ttl_minutes: i64) -> Self {
        Self {
            users,
            session_ttl: Duration::minutes(session_ttl_minutes),
        }
    }
}

impl Authenticator for PasswordAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        // Single failure path throughout - no email enumeration
        let account = self
            .users
            .iter()
            .find(|u| u.email == credentials.email)
            .ok_or(AuthError::InvalidCredentials)?;

        // Staff logins may be pinned to an organization
        if let Some(ref org) = credentials.organization_id
            && account.organization_id.as_deref() != Some(org.as_str())
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !verify_password(&credentials.password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let created_at = now();
        Ok(AuthSession {
            user_id: account.id.clone(),
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
            organization_id: account.organization_id.clone(),
            created_at,
            expires_at: created_at + self.session_ttl,
        })
    }
}

/// Hash a password with argon2 and a fresh salt
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(password_hash.to_string())
}

/// Verify a password against an argon2 PHC string
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str, password: &str, org: Option<&str>) -> UserAccount {
        UserAccount {
            id: format!("user-{}", email),
            email: email.to_string(),
            name: "Test".into(),
            role: UserRole::Manager,
            organization_id: org.map(String::from),
            password_hash: hash_password(password).unwrap(),
        }
    }

    fn credentials(email: &str, password: &str, org: Option<&str>) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            organization_id: org.map(String::from),
        }
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let hash = hash_password("staff123").unwrap();
        assert!(verify_password("staff123", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_authenticate_success() {
        let auth = PasswordAuthenticator::new(
            vec![account("m@x.com", "staff123", Some("bella-vista"))],
            60,
        );
        let session = auth
            .authenticate(&credentials("m@x.com", "staff123", None))
            .unwrap();
        assert_eq!(session.organization_id.as_deref(), Some("bella-vista"));
        assert!(session.expires_at > session.created_at);
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let auth = PasswordAuthenticator::new(vec![account("m@x.com", "staff123", None)], 60);
        assert!(matches!(
            auth.authenticate(&credentials("m@x.com", "nope", None)),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_org_binding() {
        let auth = PasswordAuthenticator::new(
            vec![account("m@x.com", "staff123", Some("bella-vista"))],
            60,
        );
        // Pinning the login to a different organization is denied
        assert!(matches!(
            auth.authenticate(&credentials("m@x.com", "staff123", Some("urban-cafe"))),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(
            auth.authenticate(&credentials("m@x.com", "staff123", Some("bella-vista")))
                .is_ok()
        );
    }
}
