//! Authentication Handlers
//!
//! Credential verification goes through the [`Authenticator`] seam on the
//! server state; these handlers only translate between HTTP and sessions.
//!
//! [`Authenticator`]: crate::auth::Authenticator

use axum::{Json, extract::State};
use serde::Serialize;
use shared::auth::{AuthSession, LoginRequest, LoginResponse};

use crate::api::MessageEnvelope;
use crate::auth::{CurrentSession, SessionToken};
use crate::core::ServerState;
use crate::utils::AppResult;

/// Login handler
///
/// Verifies credentials and mints an opaque session token. All failure
/// paths share one message so emails cannot be enumerated.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = match state.authenticator.authenticate(&req) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(email = %req.email, "Login failed");
            return Err(e.into());
        }
    };

    let token = state.sessions.insert(session.clone());

    tracing::info!(
        user_id = %session.user_id,
        email = %session.email,
        role = ?session.role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        success: true,
        token,
        session,
    }))
}

/// Session envelope
#[derive(Debug, Serialize)]
pub struct SessionEnvelope {
    pub success: bool,
    pub session: AuthSession,
}

/// Return the current session, rejecting missing/expired tokens
pub async fn session(CurrentSession(session): CurrentSession) -> Json<SessionEnvelope> {
    Json(SessionEnvelope {
        success: true,
        session,
    })
}

/// Invalidate the presented session token, if any
pub async fn logout(
    State(state): State<ServerState>,
    SessionToken(token): SessionToken,
) -> Json<MessageEnvelope> {
    if let Some(token) = token {
        state.sessions.remove(&token);
    }
    Json(MessageEnvelope::new("Logged out"))
}
