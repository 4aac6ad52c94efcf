use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde_qs::Config;

/// Query string extractor supporting nested and array parameters
pub struct Qs<T>(pub T);

impl<S, T> FromRequestParts<S> for Qs<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        Config::new(0, false)
            .deserialize_bytes(query.as_bytes())
            .map(Self)
            .map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Query extraction error: {e}"),
                )
            })
    }
}
