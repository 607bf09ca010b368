//! Request guards
//!
//! Extractors that pull the session token from `Authorization: Bearer` (or
//! the `session_id` cookie set by browser clients) and role-check helpers
//! used at the API boundary.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::auth::{AuthSession, UserRole};
use shared::error::{AppError, ErrorCode};

use crate::core::ServerState;
use crate::security_log;

use super::session::SessionLookup;

/// Extract the raw session token from a request, bearer header first
pub fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        && let Some(token) = header.strip_prefix("Bearer ")
    {
        return Some(token.trim().to_string());
    }

    parts
        .headers
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(str::trim)
                .find_map(|c| c.strip_prefix("session_id="))
        })
        .map(String::from)
}

/// The raw session token, if any (used by logout)
pub struct SessionToken(pub Option<String>);

impl FromRequestParts<ServerState> for SessionToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(extract_token(parts)))
    }
}

/// A validated, unexpired session - rejects with 401 otherwise
pub struct CurrentSession(pub AuthSession);

impl FromRequestParts<ServerState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let token = match extract_token(parts) {
            Some(token) => token,
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::not_authenticated());
            }
        };

        match state.sessions.lookup(&token) {
            SessionLookup::Valid(session) => Ok(CurrentSession(session)),
            SessionLookup::Expired => Err(AppError::new(ErrorCode::SessionExpired)),
            SessionLookup::Missing => {
                security_log!("WARN", "auth_invalid_session", uri = format!("{:?}", parts.uri));
                Err(AppError::not_authenticated())
            }
        }
    }
}

/// A session when present; never rejects
pub struct MaybeSession(pub Option<AuthSession>);

impl FromRequestParts<ServerState> for MaybeSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let session = extract_token(parts).and_then(|token| match state.sessions.lookup(&token) {
            SessionLookup::Valid(session) => Some(session),
            _ => None,
        });
        Ok(MaybeSession(session))
    }
}

/// Superadmin credential - either the configured bearer token or a
/// superadmin session. Carries the identity recorded in audit entries.
pub struct Superadmin(pub String);

impl FromRequestParts<ServerState> for Superadmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let token = match extract_token(parts) {
            Some(token) => token,
            None => {
                security_log!("WARN", "superadmin_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::not_authenticated());
            }
        };

        // Demo-grade fixed token, swap-compatible with session-based access
        if token == state.config.superadmin_token {
            return Ok(Superadmin("superadmin".to_string()));
        }

        match state.sessions.lookup(&token) {
            SessionLookup::Valid(session) if session.role == UserRole::Superadmin => {
                Ok(Superadmin(session.email))
            }
            SessionLookup::Valid(session) => {
                security_log!(
                    "WARN",
                    "superadmin_denied",
                    user_id = session.user_id.clone(),
                    email = session.email.clone()
                );
                Err(AppError::new(ErrorCode::SuperadminRequired))
            }
            SessionLookup::Expired => Err(AppError::new(ErrorCode::SessionExpired)),
            SessionLookup::Missing => Err(AppError::not_authenticated()),
        }
    }
}

/// Require the session to belong to the organization (superadmin passes)
pub fn require_org_access(session: &AuthSession, organization_id: &str) -> Result<(), AppError> {
    if session.role == UserRole::Superadmin || session.belongs_to(organization_id) {
        return Ok(());
    }
    security_log!(
        "WARN",
        "cross_tenant_denied",
        user_id = session.user_id.clone(),
        organization_id = organization_id.to_string()
    );
    Err(AppError::forbidden(
        "Session does not belong to this organization",
    ))
}

/// Require an admin/manager of the organization (superadmin passes)
pub fn require_org_manager(session: &AuthSession, organization_id: &str) -> Result<(), AppError> {
    require_org_access(session, organization_id)?;
    if session.role.can_manage_staff() {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::AdminRequired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::util::now;

    fn session(role: UserRole, org: Option<&str>) -> AuthSession {
        let created_at = now();
        AuthSession {
            user_id: "user-1".into(),
            email: "m@x.com".into(),
            name: "Test".into(),
            role,
            organization_id: org.map(String::from),
            created_at,
            expires_at: created_at + Duration::hours(1),
        }
    }

    #[test]
    fn test_org_access() {
        let s = session(UserRole::Staff, Some("bella-vista"));
        assert!(require_org_access(&s, "bella-vista").is_ok());
        assert!(require_org_access(&s, "urban-cafe").is_err());

        let admin = session(UserRole::Superadmin, None);
        assert!(require_org_access(&admin, "bella-vista").is_ok());
    }

    #[test]
    fn test_org_manager() {
        let staff = session(UserRole::Staff, Some("bella-vista"));
        assert!(require_org_manager(&staff, "bella-vista").is_err());

        let manager = session(UserRole::Manager, Some("bella-vista"));
        assert!(require_org_manager(&manager, "bella-vista").is_ok());
        assert!(require_org_manager(&manager, "urban-cafe").is_err());
    }
}
