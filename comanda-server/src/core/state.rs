//! Server state
//!
//! One composed application-state struct, constructed at process start and
//! injected into every handler via axum `State`. There is no ambient module
//! state: the stores live here and nowhere else.

use std::sync::Arc;

use crate::auth::{Authenticator, PasswordAuthenticator, SessionStore};
use crate::core::Config;
use crate::seed;
use crate::store::{AuditLogStore, MenuStore, OrderStore, OrganizationStore, StaffStore};

/// Server state - holds shared references to every service
///
/// Cloning is cheap (a handful of `Arc`s); axum clones it per request.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable configuration |
/// | organizations | Tenant registry |
/// | menus | Per-tenant menus |
/// | orders | Order store + lifecycle state machine |
/// | staff | Per-tenant staff directory |
/// | audit | Append-only audit log |
/// | sessions | Opaque-token session store |
/// | authenticator | Credential verification seam |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub organizations: Arc<OrganizationStore>,
    pub menus: Arc<MenuStore>,
    pub orders: Arc<OrderStore>,
    pub staff: Arc<StaffStore>,
    pub audit: Arc<AuditLogStore>,
    pub sessions: Arc<SessionStore>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl ServerState {
    /// Initialize the full state from the canonical seed data
    ///
    /// Called once per process; a restart rebuilds everything from seed
    /// (no persistence across restarts by design).
    pub fn initialize(config: &Config) -> Self {
        let organizations = Arc::new(OrganizationStore::new(seed::organizations()));
        let menus = Arc::new(MenuStore::new(seed::menus()));
        let orders = Arc::new(OrderStore::new(
            organizations.clone(),
            menus.clone(),
            seed::orders(),
        ));
        let staff = Arc::new(StaffStore::new(seed::staff()));
        let audit = Arc::new(AuditLogStore::new());
        let sessions = Arc::new(SessionStore::new());
        let authenticator: Arc<dyn Authenticator> = Arc::new(PasswordAuthenticator::new(
            seed::user_accounts(),
            config.session_ttl_minutes,
        ));

        tracing::info!(
            organizations = organizations.find_all().len(),
            environment = %config.environment,
            "Server state initialized from seed data"
        );

        Self {
            config: config.clone(),
            organizations,
            menus,
            orders,
            staff,
            audit,
            sessions,
            authenticator,
        }
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
