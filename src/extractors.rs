use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{pagination::Page, rejections::AppError};

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

/// Extracts the `page` query parameter. Anything that is not a positive integer
/// falls back to the first page.
impl<S: Send + Sync> FromRequestParts<S> for Page {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.page);
        Ok(Page::from_param(page.as_deref()))
    }
}

/// Integer id taken from the route path. Non-integer segments do not name any
/// resource, so they answer [`AppError::NotFound`].
pub struct IdPath(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("invalid id in path: {e}");
                AppError::NotFound("invalid id in path")
            })?;
        Ok(IdPath(id))
    }
}

/// JSON body extractor that answers every unusable payload with
/// [`AppError::BadRequest`]: an empty body, invalid JSON, `null`, an empty object,
/// or a shape that does not fit `T`.
pub struct JsonBody<T>(pub T);

impl<S: Send + Sync, T: DeserializeOwned> FromRequest<S> for JsonBody<T> {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("failed to read request body: {e}");
            AppError::BadRequest("failed to read request body")
        })?;

        parse_body(&bytes).map(JsonBody)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("missing request body"));
    }

    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!("invalid json body: {e}");
        AppError::BadRequest("invalid json body")
    })?;

    let is_empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(AppError::BadRequest("empty json body"));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("unexpected json body shape: {e}");
        AppError::BadRequest("unexpected json body shape")
    })
}
