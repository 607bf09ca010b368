//! Comanda Server - multi-tenant restaurant ordering backend
//!
//! # Architecture overview
//!
//! Customers scan a QR code or visit a tenant subdomain, browse the menu,
//! and place orders; staff progress orders through a status pipeline; a
//! superadmin manages tenant organizations.
//!
//! # Module structure
//!
//! ```text
//! comanda-server/src/
//! ├── core/      # Config, composed server state, HTTP server
//! ├── store/     # In-memory tenant-scoped stores (the state machine lives here)
//! ├── auth/      # Credential verification, sessions, role guards
//! ├── tenant/    # Host header → tenant resolution
//! ├── api/       # HTTP routes and handlers
//! ├── seed/      # Canonical in-memory seed data
//! └── utils/     # Logging, validation helpers
//! ```
//!
//! All state is process memory, reseeded on startup; every store serializes
//! its mutations behind a lock (one read-modify-write per operation).

pub mod api;
pub mod auth;
pub mod core;
pub mod seed;
pub mod store;
pub mod tenant;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, build_app, build_router};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured tracing with a dedicated target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
