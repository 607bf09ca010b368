//! Data models
//!
//! Shared between the server and frontend (via API).
//! Wire format is camelCase JSON; all ids are prefixed strings and all
//! monetary amounts are integer minor units ([`crate::Money`]).

pub mod audit;
pub mod menu;
pub mod order;
pub mod organization;
pub mod staff;

// Re-exports
pub use audit::*;
pub use menu::*;
pub use order::*;
pub use organization::*;
pub use staff::*;
