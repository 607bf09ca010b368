//! Unified error codes for the Comanda platform
//!
//! Error codes are shared between the server and frontend clients and are
//! organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Tenant errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Superadmin credential required
    SuperadminRequired = 2004,

    // ==================== 3xxx: Tenant ====================
    /// Tenant not selected (no organization resolvable from the request)
    TenantNotSelected = 3001,
    /// Tenant not found
    TenantNotFound = 3002,
    /// Tenant exists but is inactive
    TenantInactive = 3003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order is already in a terminal state
    OrderAlreadyClosed = 4002,
    /// Requested status transition is not allowed
    InvalidStatusTransition = 4003,
    /// Order contains no items
    EmptyOrder = 4004,
    /// Referenced menu item is missing or unavailable
    ItemUnavailable = 4005,
    /// Item quantity is not a positive integer
    InvalidQuantity = 4006,
    /// Organization has no active menu
    NoActiveMenu = 4007,

    // ==================== 6xxx: Menu ====================
    /// Menu not found
    MenuNotFound = 6001,
    /// Menu category not found
    CategoryNotFound = 6002,
    /// Menu item not found
    MenuItemNotFound = 6003,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Staff email already exists within the organization
    DuplicateStaffEmail = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric value of this error code
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Default human-readable message for this error code
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",

            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::SessionExpired => "Session expired",

            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Insufficient role",
            ErrorCode::AdminRequired => "Admin role required",
            ErrorCode::SuperadminRequired => "Superadmin credential required",

            ErrorCode::TenantNotSelected => "Organization ID is required",
            ErrorCode::TenantNotFound => "Organization not found or inactive",
            ErrorCode::TenantInactive => "Organization is inactive",

            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyClosed => "Order is already closed",
            ErrorCode::InvalidStatusTransition => "Illegal order status transition",
            ErrorCode::EmptyOrder => "Order items are required",
            ErrorCode::ItemUnavailable => "Invalid order items",
            ErrorCode::InvalidQuantity => "Item quantity must be a positive integer",
            ErrorCode::NoActiveMenu => "No active menu for organization",

            ErrorCode::MenuNotFound => "Menu not found",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",

            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::DuplicateStaffEmail => "Staff member with this email already exists",

            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            7 => ErrorCode::RequiredField,

            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1005 => ErrorCode::SessionExpired,

            2001 => ErrorCode::PermissionDenied,
            2002 => ErrorCode::RoleRequired,
            2003 => ErrorCode::AdminRequired,
            2004 => ErrorCode::SuperadminRequired,

            3001 => ErrorCode::TenantNotSelected,
            3002 => ErrorCode::TenantNotFound,
            3003 => ErrorCode::TenantInactive,

            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderAlreadyClosed,
            4003 => ErrorCode::InvalidStatusTransition,
            4004 => ErrorCode::EmptyOrder,
            4005 => ErrorCode::ItemUnavailable,
            4006 => ErrorCode::InvalidQuantity,
            4007 => ErrorCode::NoActiveMenu,

            6001 => ErrorCode::MenuNotFound,
            6002 => ErrorCode::CategoryNotFound,
            6003 => ErrorCode::MenuItemNotFound,

            8001 => ErrorCode::StaffNotFound,
            8002 => ErrorCode::DuplicateStaffEmail,

            9001 => ErrorCode::InternalError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidCredentials,
            ErrorCode::TenantNotFound,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::DuplicateStaffEmail,
            ErrorCode::InternalError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(5555), Err(InvalidErrorCode(5555)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");
        let back: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(back, ErrorCode::OrderNotFound);
    }
}
