//! Path parameter extractor whose rejection renders as an [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for `axum::extract::Path`.
///
/// Undecodable segments (bad percent-encoding, invalid UTF-8) come back as a
/// `400` with the standard error body. Parsing the value further is left to
/// the caller, so `PathParam<String>` hands over the raw segment.
///
/// ```ignore
/// use axum_helpers::extractors::PathParam;
///
/// async fn get_item(PathParam(id): PathParam<String>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo(PathParam(id): PathParam<String>) -> String {
        id
    }

    async fn get_uri(uri: &str) -> (StatusCode, axum::body::Bytes) {
        let app = Router::new().route("/{id}", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, response.into_body().collect().await.unwrap().to_bytes())
    }

    #[tokio::test]
    async fn test_raw_segment_is_passed_through() {
        let (status, body) = get_uri("/not-a-uuid").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"not-a-uuid");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_json_bad_request() {
        let (status, body) = get_uri("/%FF%FE").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["code"], 1001);
        assert!(json["message"].as_str().unwrap().contains("UTF-8"));
    }
}
