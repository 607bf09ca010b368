//! Tenant resolution
//!
//! Derives the tenant identifier from the incoming request. Precedence:
//! explicit `x-tenant-id` header, then the Host subdomain; handlers may
//! still fall back to an explicit `organizationId` body/query field when
//! neither is present.
//!
//! [`resolve_tenant`] is a pure function over the host string - no I/O, no
//! failure mode beyond returning `None`.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};

/// Header carrying an explicit tenant id
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Resolved tenant for the current request, injected by
/// [`resolve_tenant_middleware`]
#[derive(Debug, Clone)]
pub struct TenantId(pub Option<String>);

/// Derive a tenant id from a Host header value
///
/// - bare `localhost`/`127.0.0.1` carry no tenant
/// - `<tenant>.localhost` carries one, unless the label is `www`
/// - otherwise the first DNS label of a host with at least two labels,
///   unless it is `www`
pub fn resolve_tenant(host: &str) -> Option<String> {
    let hostname = host.split(':').next().unwrap_or(host);

    if hostname == "localhost" || hostname == "127.0.0.1" {
        return None;
    }

    if let Some(tenant) = hostname.strip_suffix(".localhost") {
        if tenant.is_empty() || tenant == "www" {
            return None;
        }
        return Some(tenant.to_string());
    }

    let parts: Vec<&str> = hostname.split('.').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return None;
    }

    let subdomain = parts[0];
    if subdomain == "www" {
        return None;
    }
    Some(subdomain.to_string())
}

/// Middleware injecting the resolved [`TenantId`] as a request extension
pub async fn resolve_tenant_middleware(mut req: Request, next: Next) -> Response {
    let tenant = req
        .headers()
        .get(TENANT_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(String::from)
        .or_else(|| {
            req.headers()
                .get(http::header::HOST)
                .and_then(|h| h.to_str().ok())
                .and_then(resolve_tenant)
        });

    req.extensions_mut().insert(TenantId(tenant));
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_localhost_has_no_tenant() {
        assert_eq!(resolve_tenant("localhost"), None);
        assert_eq!(resolve_tenant("localhost:3000"), None);
        assert_eq!(resolve_tenant("127.0.0.1"), None);
        assert_eq!(resolve_tenant("127.0.0.1:3000"), None);
    }

    #[test]
    fn test_localhost_subdomain() {
        assert_eq!(
            resolve_tenant("bella-vista.localhost"),
            Some("bella-vista".to_string())
        );
        assert_eq!(
            resolve_tenant("bella-vista.localhost:3000"),
            Some("bella-vista".to_string())
        );
        assert_eq!(resolve_tenant("www.localhost"), None);
        assert_eq!(resolve_tenant(".localhost"), None);
    }

    #[test]
    fn test_public_domains() {
        assert_eq!(
            resolve_tenant("bella-vista.comanda.app"),
            Some("bella-vista".to_string())
        );
        assert_eq!(resolve_tenant("www.comanda.app"), None);
        assert_eq!(resolve_tenant("comanda"), None);
    }

    #[test]
    fn test_single_label_hosts() {
        assert_eq!(resolve_tenant("intranet"), None);
        assert_eq!(resolve_tenant("intranet:8080"), None);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                resolve_tenant("urban-cafe.comanda.app"),
                Some("urban-cafe".to_string())
            );
        }
    }
}
