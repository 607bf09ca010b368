//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`auth`] - login / session / logout
//! - [`orders`] - customer-facing order placement and tracking
//! - [`org`] - tenant-scoped staff APIs (orders, menu, staff, settings, analytics)
//! - [`superadmin`] - organization management and audit trail
//!
//! Every module exposes `router() -> Router<ServerState>`; responses carry
//! the `{"success": true, ...}` envelope, failures serialize through
//! [`AppError`](crate::utils::AppError).

pub mod auth;
pub mod health;
pub mod orders;
pub mod org;
pub mod superadmin;

use serde::Serialize;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Envelope for mutations that return no entity
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
