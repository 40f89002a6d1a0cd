use serde::Deserialize;
use uuid::Uuid;

/// `?user_id=<uuid>` query string shared by every per-user endpoint.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    #[test]
    fn test_parses_user_id() {
        let uri: Uri = "/api/v1/interests?user_id=00000000-0000-0000-0000-000000000000"
            .parse()
            .unwrap();
        let Query(params) = Query::<UserIdQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(params.user_id, Uuid::nil());
    }

    #[test]
    fn test_rejects_missing_or_malformed_user_id() {
        for uri in ["/api/v1/interests", "/api/v1/interests?user_id=abc"] {
            let uri: Uri = uri.parse().unwrap();
            assert!(Query::<UserIdQuery>::try_from_uri(&uri).is_err());
        }
    }
}
