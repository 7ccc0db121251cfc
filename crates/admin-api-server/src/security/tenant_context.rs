use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::utils::error::ApiError;

pub const TENANT_ID_HEADER: &str = "x-tenant-id";

/// Identity of the calling tenant, taken from the `x-tenant-id` header.
///
/// The header contract is shared with the other platform services behind
/// the gateway. None of the admin endpoints apply this extractor today;
/// the admin surface trusts its callers.
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub String);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tenant_id = parts
            .headers
            .get(TENANT_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Forbidden("Tenant ID required".to_string()))?;

        Ok(CurrentTenant(tenant_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn extracts_tenant_id_from_header() {
        let (mut parts, _) = Request::builder()
            .header(TENANT_ID_HEADER, "tenant-42")
            .body(())
            .unwrap()
            .into_parts();

        let tenant = CurrentTenant::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(tenant.0, "tenant-42");
    }

    #[tokio::test]
    async fn missing_header_is_forbidden() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let rejection = CurrentTenant::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(rejection, ApiError::Forbidden(_)));
    }
}
