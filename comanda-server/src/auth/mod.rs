//! Authentication and authorization
//!
//! # Structure
//!
//! - [`authenticator`] - credential verification behind the [`Authenticator`] trait
//! - [`session`] - opaque token session store with TTL
//! - [`guard`] - request extractors and role guards for handlers

pub mod authenticator;
pub mod guard;
pub mod session;

pub use authenticator::{AuthError, Authenticator, PasswordAuthenticator, UserAccount};
pub use guard::{CurrentSession, MaybeSession, SessionToken, Superadmin};
pub use session::{SessionLookup, SessionStore};
