//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status code for this error
    ///
    /// Follows the platform error taxonomy: validation 400, unauthorized 401,
    /// forbidden 403, not-found 404, conflict 409, business rule 422,
    /// everything else 500.
    pub fn http_status(self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // Validation (400)
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::RequiredField
            | ErrorCode::TenantNotSelected
            | ErrorCode::EmptyOrder
            | ErrorCode::ItemUnavailable
            | ErrorCode::InvalidQuantity
            | ErrorCode::NoActiveMenu => StatusCode::BAD_REQUEST,

            // Unauthorized (401)
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::SessionExpired => StatusCode::UNAUTHORIZED,

            // Forbidden (403)
            ErrorCode::PermissionDenied
            | ErrorCode::RoleRequired
            | ErrorCode::AdminRequired
            | ErrorCode::SuperadminRequired => StatusCode::FORBIDDEN,

            // Not found (404)
            ErrorCode::NotFound
            | ErrorCode::TenantNotFound
            | ErrorCode::TenantInactive
            | ErrorCode::OrderNotFound
            | ErrorCode::MenuNotFound
            | ErrorCode::CategoryNotFound
            | ErrorCode::MenuItemNotFound
            | ErrorCode::StaffNotFound => StatusCode::NOT_FOUND,

            // Conflict (409)
            ErrorCode::AlreadyExists | ErrorCode::DuplicateStaffEmail => StatusCode::CONFLICT,

            // Business rule (422)
            ErrorCode::OrderAlreadyClosed | ErrorCode::InvalidStatusTransition => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // System (500)
            ErrorCode::Unknown | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotAuthenticated.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::TenantNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::DuplicateStaffEmail.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InvalidStatusTransition.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ErrorCode::InternalError.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
